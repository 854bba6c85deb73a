//! Schema locator helpers.
//!
//! Centralizes the target parent schema locator and the detection of legacy
//! deposit (draft) payloads from their `$schema` value.

/// Locator written to `json.$schema` of every migrated parent.
pub const PARENT_SCHEMA_V3: &str = "local://records/parent-v3.0.0.json";

/// Substring that marks a legacy deposit schema locator.
const DEPOSIT_SCHEMA_MARKER: &str = "deposits";

/// Kind of legacy payload, derived from its schema locator.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LegacySchemaKind {
    /// Unpublished, in-progress deposit.
    Deposit,
    /// Published record.
    Record,
}

impl LegacySchemaKind {
    /// Detect the kind from a legacy `$schema` value.
    ///
    /// A missing locator is treated as a published record.
    pub fn detect(schema: Option<&str>) -> Self {
        match schema {
            Some(s) if s.contains(DEPOSIT_SCHEMA_MARKER) => Self::Deposit,
            _ => Self::Record,
        }
    }

    pub fn is_draft(&self) -> bool {
        matches!(self, Self::Deposit)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Deposit => "deposit",
            Self::Record => "record",
        }
    }
}
