//! Legacy parent entry.
//!
//! Legacy rows carry a handful of top-level columns plus a loosely structured
//! `json` body. Every recognized key is modelled as an optional field; keys the
//! migration does not use are dropped on read.

use std::fmt;

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

/// One legacy parent or deposit entry.
///
/// `json` being `None` marks a partial entry that only references top-level
/// columns.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct LegacyEntry {
    #[serde(
        default,
        deserialize_with = "present",
        skip_serializing_if = "Option::is_none"
    )]
    pub created: Option<Value>,

    #[serde(
        default,
        deserialize_with = "present",
        skip_serializing_if = "Option::is_none"
    )]
    pub updated: Option<Value>,

    #[serde(
        default,
        deserialize_with = "present",
        skip_serializing_if = "Option::is_none"
    )]
    pub version_id: Option<Value>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub json: Option<LegacyParentJson>,
}

/// Keeps an explicit `null` as `Some(Value::Null)` so that only a missing key
/// reads as absent.
fn present<'de, D>(deserializer: D) -> Result<Option<Value>, D::Error>
where
    D: Deserializer<'de>,
{
    Value::deserialize(deserializer).map(Some)
}

/// The legacy record body.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LegacyParentJson {
    #[serde(rename = "$schema", skip_serializing_if = "Option::is_none")]
    pub schema: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub conceptrecid: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub communities: Option<Vec<String>>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub doi: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub conceptdoi: Option<String>,

    /// Legacy owners; slots may be `null`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub owners: Option<Vec<Option<OwnerId>>>,

    #[serde(rename = "_deposit", skip_serializing_if = "Option::is_none")]
    pub deposit: Option<LegacyDeposit>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub access_conditions: Option<String>,
}

/// The legacy `_deposit` bookkeeping block.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LegacyDeposit {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub owners: Option<Vec<Option<OwnerId>>>,
}

/// Legacy user id. Older rows store it as a number, some as a string.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum OwnerId {
    Int(i64),
    Str(String),
}

impl From<i64> for OwnerId {
    fn from(v: i64) -> Self {
        Self::Int(v)
    }
}

impl From<&str> for OwnerId {
    fn from(v: &str) -> Self {
        Self::Str(v.to_string())
    }
}

impl fmt::Display for OwnerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Int(v) => write!(f, "{v}"),
            Self::Str(v) => write!(f, "{v}"),
        }
    }
}

impl LegacyEntry {
    /// Parse a legacy entry from a loosely-typed JSON value.
    pub fn from_value(raw: &Value) -> serde_json::Result<Self> {
        Self::deserialize(raw)
    }
}
