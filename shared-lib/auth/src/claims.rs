//! RTC token claims, roles and permissions.

use error::AuthError;
use serde::{Deserialize, Serialize};

/// Claim-shape version understood by the media provider.
pub const SCHEMA_VERSION: u32 = 2;

/// Capability domain granted by every token.
pub const RTC_ROLE: &str = "rtc";

/// Default token validity: 120 minutes.
pub const DEFAULT_TTL_SECS: i64 = 120 * 60;

/// Room roles a caller can request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    /// Can join and moderate the room
    Host,
    /// Can join the room
    Viewer,
}

impl Default for Role {
    fn default() -> Self {
        Self::Viewer
    }
}

impl Role {
    /// Normalize a requested role.
    ///
    /// Only the exact string `"host"` selects [`Role::Host`]. Anything else,
    /// including no value at all, falls back to [`Role::Viewer`].
    pub fn from_requested(requested: Option<&str>) -> Self {
        match requested {
            Some("host") => Self::Host,
            _ => Self::Viewer,
        }
    }

    /// Permissions granted to this role, in the order they are embedded.
    pub fn permissions(self) -> &'static [Permission] {
        match self {
            Self::Host => &[Permission::AllowJoin, Permission::AllowMod],
            Self::Viewer => &[Permission::AllowJoin],
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Host => "host",
            Self::Viewer => "viewer",
        }
    }
}

impl std::fmt::Display for Role {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Capabilities inside a media session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Permission {
    /// Join the room directly
    AllowJoin,
    /// Moderate other participants
    AllowMod,
}

/// JWT claims structure.
///
/// Field names on the wire follow what the media provider reads.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Claims {
    /// API key identifying the issuer
    #[serde(rename = "apikey")]
    pub api_key: String,
    /// Granted permissions
    pub permissions: Vec<Permission>,
    /// Claim-shape version, always [`SCHEMA_VERSION`]
    pub version: u32,
    /// Capability domains, always `["rtc"]`
    pub roles: Vec<String>,
    /// Room the token is scoped to
    #[serde(rename = "roomId", default, skip_serializing_if = "Option::is_none")]
    pub room_id: Option<String>,
    /// Issued at (Unix timestamp)
    pub iat: i64,
    /// Expiration time (Unix timestamp)
    pub exp: i64,
}

impl Claims {
    /// Build claims for a role, issued at `issued_at` and valid for `ttl_secs`.
    ///
    /// Fails when the expiry does not fit in a Unix timestamp.
    pub fn new(
        api_key: impl Into<String>,
        role: Role,
        room_id: Option<String>,
        issued_at: i64,
        ttl_secs: i64,
    ) -> Result<Self, AuthError> {
        let exp = issued_at.checked_add(ttl_secs).ok_or_else(|| {
            tracing::error!("Token expiry overflows: iat={} ttl={}", issued_at, ttl_secs);
            AuthError::TokenCreationFailed
        })?;

        Ok(Self {
            api_key: api_key.into(),
            permissions: role.permissions().to_vec(),
            version: SCHEMA_VERSION,
            roles: vec![RTC_ROLE.to_string()],
            room_id,
            iat: issued_at,
            exp,
        })
    }

    /// Role implied by the granted permissions.
    pub fn role(&self) -> Role {
        if self.permissions.contains(&Permission::AllowMod) {
            Role::Host
        } else {
            Role::Viewer
        }
    }

    /// Check if the claims have expired at `now` (Unix timestamp).
    pub fn is_expired_at(&self, now: i64) -> bool {
        now >= self.exp
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_role_normalization_is_binary() {
        assert_eq!(Role::from_requested(Some("host")), Role::Host);
        for input in [None, Some("viewer"), Some("moderator"), Some("HOST"), Some(" host"), Some("")] {
            assert_eq!(Role::from_requested(input), Role::Viewer, "input {:?}", input);
        }
    }

    #[test]
    fn test_permission_table() {
        assert_eq!(Role::Host.permissions(), &[Permission::AllowJoin, Permission::AllowMod]);
        assert_eq!(Role::Viewer.permissions(), &[Permission::AllowJoin]);
    }

    #[test]
    fn test_claims_wire_shape() {
        let claims = Claims::new("key", Role::Host, Some("room42".into()), 1_000, DEFAULT_TTL_SECS).unwrap();
        let json = serde_json::to_value(&claims).unwrap();

        assert_eq!(json["apikey"], "key");
        assert_eq!(json["permissions"], serde_json::json!(["allow_join", "allow_mod"]));
        assert_eq!(json["version"], 2);
        assert_eq!(json["roles"], serde_json::json!(["rtc"]));
        assert_eq!(json["roomId"], "room42");
        assert_eq!(json["exp"], 1_000 + 7_200);
    }

    #[test]
    fn test_room_id_omitted_when_absent() {
        let claims = Claims::new("key", Role::Viewer, None, 0, DEFAULT_TTL_SECS).unwrap();
        let json = serde_json::to_value(&claims).unwrap();

        assert!(json.as_object().unwrap().get("roomId").is_none());
        assert_eq!(claims.role(), Role::Viewer);
    }

    #[test]
    fn test_expiry_overflow_fails() {
        let result = Claims::new("key", Role::Viewer, None, 1_700_000_000, i64::MAX);
        assert_eq!(result, Err(AuthError::TokenCreationFailed));
    }

    #[test]
    fn test_expiry_boundary() {
        let claims = Claims::new("key", Role::Viewer, None, 100, 10).unwrap();
        assert!(!claims.is_expired_at(109));
        assert!(claims.is_expired_at(110));
    }
}
