//! Caller-supplied token request.

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

use crate::claims::Role;

/// Token request as sent by a client.
///
/// Fields are untrusted. A field holding anything but a JSON string is
/// treated as absent rather than rejected.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TokenRequest {
    /// Requested role
    #[serde(rename = "as", default, deserialize_with = "string_or_absent", skip_serializing_if = "Option::is_none")]
    pub role: Option<String>,
    /// Room to scope the token to
    #[serde(rename = "roomId", default, deserialize_with = "string_or_absent", skip_serializing_if = "Option::is_none")]
    pub room_id: Option<String>,
}

fn string_or_absent<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    match Value::deserialize(deserializer)? {
        Value::String(s) => Ok(Some(s)),
        _ => Ok(None),
    }
}

impl TokenRequest {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_role(mut self, role: impl Into<String>) -> Self {
        self.role = Some(role.into());
        self
    }

    pub fn with_room_id(mut self, room_id: impl Into<String>) -> Self {
        self.room_id = Some(room_id.into());
        self
    }

    /// Admit an arbitrary JSON payload.
    ///
    /// Never fails: a missing, null or non-object payload is an empty request.
    pub fn from_value(value: &Value) -> Self {
        match value {
            Value::Object(_) => Self::deserialize(value).unwrap_or_default(),
            _ => Self::default(),
        }
    }

    /// Normalized role.
    pub fn role(&self) -> Role {
        Role::from_requested(self.role.as_deref())
    }
}
