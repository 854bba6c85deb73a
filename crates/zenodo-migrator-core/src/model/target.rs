//! Target parent record, as consumed by the RDM loader.
//!
//! The serialized shape is what the loader expects:
//!
//! ```json
//! {
//!   "created": "...", "updated": "...", "version_id": 1,
//!   "json": {
//!     "$schema": "local://records/parent-v3.0.0.json",
//!     "id": "100",
//!     "communities": {"ids": ["bio"], "default": "bio"},
//!     "pids": {"doi": {"provider": "legacy", "identifier": ""}},
//!     "access": {"owned_by": {"user": 7}}
//!   }
//! }
//! ```
//!
//! Optional keys that were not derived are omitted entirely.

use serde::ser::SerializeMap;
use serde::{Serialize, Serializer};
use serde_json::Value;

use super::legacy::OwnerId;

/// A transformed parent record, or a partial fragment of one.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct TargetRecord {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created: Option<Value>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub updated: Option<Value>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub version_id: Option<Value>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub json: Option<ParentJson>,
}

impl TargetRecord {
    /// Serialize into a JSON value.
    pub fn to_value(&self) -> serde_json::Result<Value> {
        serde_json::to_value(self)
    }
}

/// Body of a migrated parent.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ParentJson {
    #[serde(rename = "$schema")]
    pub schema: String,

    /// The legacy `conceptrecid`, reused as the parent id.
    pub id: String,

    pub communities: Communities,

    pub pids: Pids,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub access: Option<Access>,
}

/// Community membership of a parent.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum Communities {
    /// No eligible community. Serializes as `{}`.
    #[default]
    Empty,
    /// One or more communities, in legacy order.
    Assigned {
        ids: Vec<String>,
        default: DefaultCommunity,
    },
}

/// Default community choice.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DefaultCommunity {
    /// More than one community; the loader must choose. Serializes as `null`.
    NoDefault,
    Default(String),
}

impl DefaultCommunity {
    pub fn as_slug(&self) -> Option<&str> {
        match self {
            Self::NoDefault => None,
            Self::Default(slug) => Some(slug.as_str()),
        }
    }
}

impl Communities {
    pub fn is_empty(&self) -> bool {
        matches!(self, Self::Empty)
    }

    pub fn ids(&self) -> &[String] {
        match self {
            Self::Empty => &[],
            Self::Assigned { ids, .. } => ids,
        }
    }
}

impl Serialize for Communities {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Self::Empty => serializer.serialize_map(Some(0))?.end(),
            Self::Assigned { ids, default } => {
                let mut map = serializer.serialize_map(Some(2))?;
                map.serialize_entry("ids", ids)?;
                map.serialize_entry("default", &default.as_slug())?;
                map.end()
            }
        }
    }
}

/// Persistent identifiers of a parent.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Pids {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub doi: Option<DoiPid>,
}

/// The parent DOI entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DoiPid {
    /// Concept DOI registered with DataCite.
    Datacite { identifier: String },
    /// Record minted before concept DOIs existed. The identifier is assigned
    /// later by the registration step.
    Legacy,
}

impl Serialize for DoiPid {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Self::Datacite { identifier } => {
                let mut map = serializer.serialize_map(Some(3))?;
                map.serialize_entry("client", "datacite")?;
                map.serialize_entry("provider", "datacite")?;
                map.serialize_entry("identifier", identifier)?;
                map.end()
            }
            Self::Legacy => {
                let mut map = serializer.serialize_map(Some(2))?;
                map.serialize_entry("provider", "legacy")?;
                map.serialize_entry("identifier", "")?;
                map.end()
            }
        }
    }
}

/// Access block of a parent.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Access {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub owned_by: Option<OwnedBy>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub settings: Option<AccessSettings>,
}

impl Access {
    pub fn owned_by(user: OwnerId) -> Self {
        Self {
            owned_by: Some(OwnedBy { user }),
            settings: None,
        }
    }

    pub fn with_settings(settings: AccessSettings) -> Self {
        Self {
            owned_by: None,
            settings: Some(settings),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.owned_by.is_none() && self.settings.is_none()
    }

    /// Merge another fragment into this one.
    ///
    /// Sub-keys already set on `self` are kept; `other` only fills gaps.
    pub fn merge(self, other: Access) -> Access {
        Access {
            owned_by: self.owned_by.or(other.owned_by),
            settings: self.settings.or(other.settings),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct OwnedBy {
    pub user: OwnerId,
}

/// Access request settings of a parent.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AccessSettings {
    pub allow_user_requests: bool,
    pub allow_guest_requests: bool,
    pub accept_conditions_text: String,
    /// Days until a secret link expires.
    pub secret_link_expiration: u32,
}
