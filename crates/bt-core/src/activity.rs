#[cfg(feature = "serde")]
use serde::{Deserialize, Deserializer, Serialize};

use crate::Value;

/// Label used when rendering an access made outside any leaf.
pub const UNATTRIBUTED: &str = "<<NoMember>>";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum AccessMode {
    Read,
    Write,
}

impl AccessMode {
    pub fn as_str(self) -> &'static str {
        match self {
            AccessMode::Read => "read",
            AccessMode::Write => "write",
        }
    }
}

/// One blackboard access.
///
/// `client` is `None` when the access came from outside the tree (the driver seeding or
/// inspecting values). `value` is only recorded for writes.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct ActivityRecord {
    pub client: Option<String>,
    pub mode: AccessMode,
    pub key: String,
    #[cfg_attr(
        feature = "serde",
        serde(
            default,
            skip_serializing_if = "Option::is_none",
            deserialize_with = "present_value"
        )
    )]
    pub value: Option<Value>,
}

/// A present `value` field is always `Some`, even when it holds `null`.
#[cfg(feature = "serde")]
fn present_value<'de, D>(deserializer: D) -> Result<Option<Value>, D::Error>
where
    D: Deserializer<'de>,
{
    Value::deserialize(deserializer).map(Some)
}

impl ActivityRecord {
    pub fn read(client: Option<&str>, key: &str) -> Self {
        Self {
            client: client.map(str::to_string),
            mode: AccessMode::Read,
            key: key.to_string(),
            value: None,
        }
    }

    pub fn write(client: Option<&str>, key: &str, value: Value) -> Self {
        Self {
            client: client.map(str::to_string),
            mode: AccessMode::Write,
            key: key.to_string(),
            value: Some(value),
        }
    }
}

/// Predicates for `Blackboard::get_activity`. Unset fields match everything.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ActivityFilter {
    /// Keep only the most recent `max_len` matches.
    pub max_len: Option<usize>,
    pub mode: Option<AccessMode>,
    pub key: Option<String>,
    pub client: Option<String>,
}

impl ActivityFilter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_max_len(mut self, max_len: usize) -> Self {
        self.max_len = Some(max_len);
        self
    }

    pub fn with_mode(mut self, mode: AccessMode) -> Self {
        self.mode = Some(mode);
        self
    }

    pub fn with_key(mut self, key: impl Into<String>) -> Self {
        self.key = Some(key.into());
        self
    }

    pub fn with_client(mut self, client: impl Into<String>) -> Self {
        self.client = Some(client.into());
        self
    }

    /// An unattributed record matches the client [`UNATTRIBUTED`].
    pub fn matches(&self, record: &ActivityRecord) -> bool {
        self.mode.is_none_or(|m| m == record.mode)
            && self.key.as_deref().is_none_or(|k| k == record.key)
            && self
                .client
                .as_deref()
                .is_none_or(|c| record.client.as_deref().unwrap_or(UNATTRIBUTED) == c)
    }
}
