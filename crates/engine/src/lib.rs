//! `orgmerge-engine` — multi-year organization record merge engine.
//!
//! Pure engine crate: receives pre-loaded year documents, returns the
//! compiled snapshot. No CLI or IO dependencies.

pub mod config;
pub mod error;
pub mod identity;
pub mod merge;
pub mod model;
pub mod source;

pub use config::CompileConfig;
pub use error::CompileError;
pub use identity::IdentityResolver;
pub use merge::{run, Aggregator};
pub use model::{CompileInput, MergedOrg, OrgRecord, Snapshot};
pub use source::parse_year_document;
