use std::collections::BTreeMap;

use indexmap::IndexSet;
use serde::{Deserialize, Deserializer, Serialize};

// ---------------------------------------------------------------------------
// Input
// ---------------------------------------------------------------------------

/// One organization record as it appears in a year's source document.
///
/// Every field is best-effort: absent and explicitly-null fields both
/// deserialize to empty values and are never an error.
/// `category`/`topics`/`technologies` may appear as a single string or a
/// list in the wild; both normalize to a list here, at the boundary, so
/// the merge logic never branches on shape.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct OrgRecord {
    #[serde(default, deserialize_with = "null_to_default")]
    pub name: String,
    #[serde(default, deserialize_with = "null_to_default")]
    pub url: String,
    #[serde(default, deserialize_with = "null_to_default")]
    pub image_url: String,
    #[serde(default, deserialize_with = "null_to_default")]
    pub image_background_color: String,
    #[serde(default, deserialize_with = "null_to_default")]
    pub description: String,
    #[serde(default, deserialize_with = "string_or_list")]
    pub category: Vec<String>,
    #[serde(default, deserialize_with = "string_or_list")]
    pub topics: Vec<String>,
    #[serde(default, deserialize_with = "string_or_list")]
    pub technologies: Vec<String>,
    #[serde(default, deserialize_with = "null_to_default")]
    pub irc_channel: String,
    #[serde(default, deserialize_with = "null_to_default")]
    pub contact_email: String,
    #[serde(default, deserialize_with = "null_to_default")]
    pub mailing_list: String,
    #[serde(default, deserialize_with = "null_to_default")]
    pub twitter_url: String,
    #[serde(default, deserialize_with = "null_to_default")]
    pub blog_url: String,
    #[serde(default, deserialize_with = "null_to_default")]
    pub facebook_url: String,
    /// Project entries are opaque to the merge; carried through untouched.
    #[serde(default, deserialize_with = "null_to_default")]
    pub projects: Vec<serde_json::Value>,
}

/// `null` field values behave exactly like absent ones.
fn null_to_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de> + Default,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

fn string_or_list<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum OneOrMany {
        One(String),
        Many(Vec<String>),
    }

    Ok(match Option::<OneOrMany>::deserialize(deserializer)? {
        None => Vec::new(),
        Some(OneOrMany::One(value)) => vec![value],
        Some(OneOrMany::Many(values)) => values,
    })
}

/// Pre-loaded records for every configured year, in processing order.
///
/// Order matters: the merge policy compares each incoming year against the
/// last year already recorded on the merged org, so the caller must supply
/// years in the configured (monotone) order.
pub struct CompileInput {
    pub years: Vec<(i32, Vec<OrgRecord>)>,
}

// ---------------------------------------------------------------------------
// Output
// ---------------------------------------------------------------------------

/// One organization after merging across all the years it appeared in.
#[derive(Debug, Clone, Serialize)]
pub struct MergedOrg {
    pub name: String,
    pub image_url: String,
    pub image_background_color: String,
    pub description: String,
    pub url: String,
    pub category: IndexSet<String>,
    pub topics: IndexSet<String>,
    pub technologies: IndexSet<String>,
    pub irc_channel: String,
    pub contact_email: String,
    pub mailing_list: String,
    pub twitter_url: String,
    pub blog_url: String,
    pub facebook_url: String,
    /// Years this org appeared in, deduplicated, in insertion order.
    pub year: IndexSet<i32>,
    /// Each year's project list kept separately; never merged within a year.
    pub projects: BTreeMap<i32, Vec<serde_json::Value>>,
}

impl MergedOrg {
    /// Seed a merged org from its first-seen record.
    pub fn from_record(record: OrgRecord, year: i32) -> Self {
        let mut years = IndexSet::new();
        years.insert(year);
        let mut projects = BTreeMap::new();
        projects.insert(year, record.projects);

        Self {
            name: record.name,
            image_url: record.image_url,
            image_background_color: record.image_background_color,
            description: record.description,
            url: record.url,
            category: record.category.into_iter().collect(),
            topics: record.topics.into_iter().collect(),
            technologies: record.technologies.into_iter().collect(),
            irc_channel: record.irc_channel,
            contact_email: record.contact_email,
            mailing_list: record.mailing_list,
            twitter_url: record.twitter_url,
            blog_url: record.blog_url,
            facebook_url: record.facebook_url,
            year: years,
            projects,
        }
    }
}

/// The final compiled document. Field names reproduce the published JSON
/// shape exactly; `org_data` keys sort ascending via the BTreeMap.
#[derive(Debug, Clone, Serialize)]
pub struct Snapshot {
    #[serde(rename = "orgData")]
    pub org_data: BTreeMap<String, MergedOrg>,
    pub totalcategories: Vec<String>,
    #[serde(rename = "totalTopics")]
    pub total_topics: Vec<String>,
    #[serde(rename = "totalTechnologies")]
    pub total_technologies: Vec<String>,
}
