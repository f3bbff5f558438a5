use serde::{Deserialize, Serialize};

/// Claims carried by staff bearer tokens
///
/// Tokens are issued by the identity provider and signed with the shared
/// `JWT_SECRET`. Only `sub` and `exp` are required.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Claims {
    /// Subject (staff member identifier)
    pub sub: String,

    /// Expiration time (Unix timestamp)
    pub exp: i64,

    /// Issued at (Unix timestamp)
    #[serde(default)]
    pub iat: i64,

    /// Display name of the staff member
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    /// Home campus of the staff member ("oahu" or "hilo")
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub campus: Option<String>,

    /// Staff role (staff, admin, instructor)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub role: Option<String>,
}
