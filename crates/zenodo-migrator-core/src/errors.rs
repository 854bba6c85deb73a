//! Error types for zenodo-migrator-core.
//!
//! Every failure carries a stable dotted code (see [`MigratorError::code`]) so
//! hosts can group and filter failures in their error logs without matching on
//! message text.

use thiserror::Error;

use crate::model::legacy::LegacyEntry;

/// Result type for migrator operations.
pub type MigratorResult<T> = std::result::Result<T, MigratorError>;

/// Errors raised while transforming a legacy entry.
#[derive(Error, Debug)]
pub enum MigratorError {
    /// The `json` section is present but carries no `conceptrecid`.
    ///
    /// The entry is kept so the caller can record it for manual repair.
    #[error("legacy entry has no conceptrecid")]
    NoConceptRecid { entry: Box<LegacyEntry> },

    /// A field required by the selected transform mode was not found.
    #[error("field not found: {0}")]
    MissingField(&'static str),

    /// The raw payload could not be read as a legacy entry.
    #[error("invalid legacy entry: {0}")]
    InvalidEntry(#[from] serde_json::Error),
}

impl MigratorError {
    pub fn no_conceptrecid(entry: &LegacyEntry) -> Self {
        Self::NoConceptRecid {
            entry: Box::new(entry.clone()),
        }
    }

    /// Stable error code for logs and reports.
    pub fn code(&self) -> &'static str {
        match self {
            Self::NoConceptRecid { .. } => "entry.no_conceptrecid",
            Self::MissingField(_) => "entry.missing_field",
            Self::InvalidEntry(_) => "entry.invalid",
        }
    }

    /// The offending entry, for failures that carry one.
    pub fn entry(&self) -> Option<&LegacyEntry> {
        match self {
            Self::NoConceptRecid { entry } => Some(entry.as_ref()),
            _ => None,
        }
    }
}
