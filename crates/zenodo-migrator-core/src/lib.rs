//! zenodo-migrator-core
//!
//! Core primitives for migrating legacy Zenodo parent records:
//! - Typed legacy entry and target record models
//! - The parent record transformer and its field rules
//! - Schema locator helpers
//! - Errors and configuration shared with hosts (CLI, batch drivers)
//!
//! The core crate performs no filesystem or network I/O. Hosts read legacy
//! entries, hand them to an [`transform::Entry`] implementation, and persist
//! whatever comes back.

pub mod config;
pub mod errors;
pub mod model;
pub mod transform;
pub mod version;

pub use crate::errors::{MigratorError, MigratorResult};

/// Convenience re-exports.
pub mod prelude {
    pub use crate::config::TransformConfig;
    pub use crate::model::legacy::{LegacyDeposit, LegacyEntry, LegacyParentJson, OwnerId};
    pub use crate::model::target::{
        Access, AccessSettings, Communities, DefaultCommunity, DoiPid, OwnedBy, ParentJson, Pids,
        TargetRecord,
    };
    pub use crate::transform::parents::ParentRecordEntry;
    pub use crate::transform::Entry;
    pub use crate::version::{LegacySchemaKind, PARENT_SCHEMA_V3};
    pub use crate::{MigratorError, MigratorResult};
}
