use std::collections::{BTreeSet, HashMap};

use crate::identity::IdentityResolver;
use crate::model::{CompileInput, MergedOrg, OrgRecord, Snapshot};

/// Accumulates merged organizations and the global taxonomy sets for one
/// run. Constructed fresh per run and exclusively owned by it; there is no
/// shared or global state.
#[derive(Debug, Default)]
pub struct Aggregator {
    resolver: IdentityResolver,
    orgs: HashMap<String, MergedOrg>,
    categories: BTreeSet<String>,
    topics: BTreeSet<String>,
    technologies: BTreeSet<String>,
}

impl Aggregator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Fold one record into the accumulated state.
    ///
    /// Identity resolution is stable across calls; the merge itself is not
    /// idempotent (every call may mutate accumulated state). The year must
    /// arrive in the configured processing order: recency checks compare
    /// against the LAST year recorded on the org, not a true max.
    pub fn add(&mut self, record: OrgRecord, year: i32) {
        let id = self.resolver.resolve(&record.name, &record.url);

        self.categories.extend(record.category.iter().cloned());
        self.topics.extend(record.topics.iter().cloned());
        self.technologies.extend(record.technologies.iter().cloned());

        match self.orgs.get_mut(&id) {
            Some(org) => merge_record(org, record, year),
            None => {
                self.orgs.insert(id, MergedOrg::from_record(record, year));
            }
        }
    }

    pub fn org_count(&self) -> usize {
        self.orgs.len()
    }

    /// Freeze the accumulated state into the output document. Org keys
    /// sort ascending; taxonomy lists come out sorted so identical inputs
    /// always serialize byte-identically.
    pub fn into_snapshot(self) -> Snapshot {
        Snapshot {
            org_data: self.orgs.into_iter().collect(),
            totalcategories: self.categories.into_iter().collect(),
            total_topics: self.topics.into_iter().collect(),
            total_technologies: self.technologies.into_iter().collect(),
        }
    }
}

/// Field-merge policy for a record joining an already-seen org.
fn merge_record(org: &mut MergedOrg, record: OrgRecord, year: i32) {
    // "Newest" means newer than the last recorded year, which is only a
    // true max while years arrive in monotone order.
    let newer = org.year.last().is_some_and(|last| *last < year);

    if org.image_url.is_empty() || newer {
        org.image_url = record.image_url;
    }

    // Compatibility quirk, kept bug-for-bug: this branch assigns the
    // incoming background color into image_url, and the stored
    // image_background_color is never updated after first-seen seeding.
    if org.image_background_color.is_empty() || !record.image_background_color.is_empty() {
        org.image_url = record.image_background_color;
    }

    if org.description.is_empty() || newer {
        org.description = record.description;
    }

    if newer {
        org.url = record.url;
    }

    org.category.extend(record.category);
    org.topics.extend(record.topics);
    org.technologies.extend(record.technologies);

    if !record.irc_channel.is_empty() {
        org.irc_channel = record.irc_channel;
    }
    if !record.contact_email.is_empty() {
        org.contact_email = record.contact_email;
    }
    if !record.mailing_list.is_empty() {
        org.mailing_list = record.mailing_list;
    }
    if !record.twitter_url.is_empty() {
        org.twitter_url = record.twitter_url;
    }
    if !record.blog_url.is_empty() {
        org.blog_url = record.blog_url;
    }
    if !record.facebook_url.is_empty() {
        org.facebook_url = record.facebook_url;
    }

    org.year.insert(year);
    // Same-year reinsertion overwrites; project lists never merge within a year.
    org.projects.insert(year, record.projects);
}

/// Run the full merge over pre-loaded input. Years fold in the order the
/// caller supplies them, which must match the configured order.
pub fn run(input: CompileInput) -> Snapshot {
    let mut aggregator = Aggregator::new();
    for (year, records) in input.years {
        for record in records {
            aggregator.add(record, year);
        }
    }
    aggregator.into_snapshot()
}
