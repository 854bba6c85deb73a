//! Configuration structures for zenodo-migrator-core.
//!
//! The core crate does not read environment variables or files. Hosts build
//! these objects explicitly (from CLI flags, a config file, ...) and pass them
//! in when constructing transformers.

use serde::{Deserialize, Serialize};

/// Per-transformer settings.
///
/// Fixed once a transformer is constructed; every call made through that
/// transformer sees the same values.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TransformConfig {
    /// Accept entries that carry only top-level fields (no `json` section).
    #[serde(default)]
    pub partial: bool,
}

impl TransformConfig {
    pub fn full() -> Self {
        Self { partial: false }
    }

    pub fn partial() -> Self {
        Self { partial: true }
    }
}
