//! Parent DOI rule.

use tracing::debug;

use crate::model::legacy::LegacyParentJson;
use crate::model::target::{DoiPid, Pids};
use crate::version::LegacySchemaKind;

/// DOI prefixes registered by Zenodo itself. `10.5072/` is the DataCite test
/// prefix used by fixtures.
pub const ZENODO_DATACITE_PREFIXES: &[&str] = &["10.5281/", "10.5072/"];

/// Returns true if `doi` was minted under one of the Zenodo prefixes.
pub fn is_zenodo_doi(doi: &str) -> bool {
    ZENODO_DATACITE_PREFIXES
        .iter()
        .any(|prefix| doi.starts_with(prefix))
}

/// Derive the parent pids from the legacy DOI fields.
///
/// Only Zenodo-minted DOIs produce a parent DOI:
/// - with a concept DOI, the concept DOI is carried over as a DataCite DOI
/// - without one, a published record gets a blank legacy DOI
/// - a draft without a concept DOI gets nothing
pub fn synthesize(json: &LegacyParentJson) -> Pids {
    let doi = match json.doi.as_deref() {
        Some(doi) if !doi.is_empty() => doi,
        _ => return Pids::default(),
    };

    if !is_zenodo_doi(doi) {
        debug!(doi, "externally registered DOI, no parent DOI");
        return Pids::default();
    }

    if let Some(conceptdoi) = json.conceptdoi.as_deref().filter(|c| !c.is_empty()) {
        return Pids {
            doi: Some(DoiPid::Datacite {
                identifier: conceptdoi.to_string(),
            }),
        };
    }

    let kind = LegacySchemaKind::detect(json.schema.as_deref());
    if kind.is_draft() {
        debug!(doi, kind = kind.as_str(), "no concept DOI, no parent DOI");
        return Pids::default();
    }

    Pids {
        doi: Some(DoiPid::Legacy),
    }
}
