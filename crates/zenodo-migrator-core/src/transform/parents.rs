//! Parent record transform entry.
//!
//! Steps, per entry:
//! 1. copy `created`, `updated`, `version_id` when present
//! 2. with a `json` section: require `conceptrecid`, then derive communities,
//!    pids and the access block
//! 3. without one: fail, unless the entry was built for partial data
//!
//! Either a complete record comes back or an error does; there is no
//! half-built output.

use tracing::debug;

use crate::config::TransformConfig;
use crate::errors::{MigratorError, MigratorResult};
use crate::model::legacy::{LegacyEntry, LegacyParentJson};
use crate::model::target::{Access, ParentJson, TargetRecord};
use crate::version::PARENT_SCHEMA_V3;

use super::{access, communities, load_partial, pids, Entry};

pub use super::access::SECRET_LINK_EXPIRATION_DAYS;
pub use super::communities::IGNORED_COMMUNITIES;
pub use super::pids::ZENODO_DATACITE_PREFIXES;

/// Transforms legacy parent entries into RDM parent records.
#[derive(Debug, Clone, Default)]
pub struct ParentRecordEntry {
    partial: bool,
}

impl ParentRecordEntry {
    pub fn new(partial: bool) -> Self {
        Self { partial }
    }

    pub fn from_config(cfg: &TransformConfig) -> Self {
        Self::new(cfg.partial)
    }

    fn parent_json(
        &self,
        entry: &LegacyEntry,
        json: &LegacyParentJson,
    ) -> MigratorResult<ParentJson> {
        let id = match json.conceptrecid.as_deref() {
            Some(id) if !id.is_empty() => id.to_string(),
            _ => return Err(MigratorError::no_conceptrecid(entry)),
        };

        let access_block = [access::ownership(json), access::settings(json)]
            .into_iter()
            .flatten()
            .fold(Access::default(), Access::merge);

        Ok(ParentJson {
            schema: PARENT_SCHEMA_V3.to_string(),
            id,
            communities: communities::normalize(json),
            pids: pids::synthesize(json),
            access: (!access_block.is_empty()).then_some(access_block),
        })
    }
}

impl Entry for ParentRecordEntry {
    fn id(&self) -> &str {
        "parents"
    }

    fn transform(&self, entry: &LegacyEntry) -> MigratorResult<TargetRecord> {
        let mut out = TargetRecord::default();
        load_partial(entry, &mut out);

        match &entry.json {
            Some(json) => {
                let parent = self.parent_json(entry, json)?;
                debug!(id = %parent.id, "transformed parent");
                out.json = Some(parent);
            }
            None if self.partial => {}
            None => return Err(MigratorError::MissingField("json")),
        }

        Ok(out)
    }
}
