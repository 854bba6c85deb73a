//! Data models for the parent record migration.
//!
//! - [`legacy`] holds the typed view of a legacy parent/deposit entry as it is
//!   read from the old storage.
//! - [`target`] holds the parent record shape consumed by the RDM loader.
//!
//! Models are mostly "dumb" data. The rules that turn one into the other live
//! in `crate::transform`.

pub mod legacy;
pub mod target;

pub use legacy::{LegacyDeposit, LegacyEntry, LegacyParentJson, OwnerId};
pub use target::{
    Access, AccessSettings, Communities, DefaultCommunity, DoiPid, OwnedBy, ParentJson, Pids,
    TargetRecord,
};
