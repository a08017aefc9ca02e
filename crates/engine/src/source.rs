use serde::Deserialize;

use crate::error::CompileError;
use crate::model::OrgRecord;

/// Shape of one year's source document.
#[derive(Debug, Deserialize)]
struct YearDocument {
    #[serde(default)]
    organizations: Vec<OrgRecord>,
}

/// Parse one year's JSON document into its organization records.
///
/// The year is only used for error context; reading the document off disk
/// is the caller's job. A document that fails to parse is fatal for the
/// whole run — there is no per-year recovery.
pub fn parse_year_document(json: &str, year: i32) -> Result<Vec<OrgRecord>, CompileError> {
    let document: YearDocument =
        serde_json::from_str(json).map_err(|e| CompileError::YearParse {
            year,
            message: e.to_string(),
        })?;
    Ok(document.organizations)
}
