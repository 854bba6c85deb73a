//! Transform entries for the migration.
//!
//! An [`Entry`] turns one legacy entry into one target record. Implementations
//! must be deterministic: no clock reads, no counters, no I/O. Identical input
//! yields identical output.
//!
//! Field rules for the parent record live in their own modules and are pure
//! functions over the legacy body:
//! - `communities`: community slugs and the default community
//! - `pids`: the parent DOI
//! - `access`: owner and access request settings

use serde_json::Value;

use crate::errors::MigratorResult;
use crate::model::legacy::LegacyEntry;
use crate::model::target::TargetRecord;

pub mod access;
pub mod communities;
pub mod parents;
pub mod pids;

/// A transform entry.
pub trait Entry {
    /// Stable identifier, used in logs.
    fn id(&self) -> &str;

    /// Transform one typed legacy entry.
    fn transform(&self, entry: &LegacyEntry) -> MigratorResult<TargetRecord>;

    /// Read a loosely-typed payload, then transform it.
    fn transform_value(&self, raw: &Value) -> MigratorResult<TargetRecord> {
        let entry = LegacyEntry::from_value(raw)?;
        self.transform(&entry)
    }
}

/// Copy the top-level columns that are present on `entry` into `out`.
///
/// Values are carried over untouched; absent columns stay absent.
pub fn load_partial(entry: &LegacyEntry, out: &mut TargetRecord) {
    if let Some(v) = &entry.created {
        out.created = Some(v.clone());
    }
    if let Some(v) = &entry.updated {
        out.updated = Some(v.clone());
    }
    if let Some(v) = &entry.version_id {
        out.version_id = Some(v.clone());
    }
}
