use serde::{Deserialize, Serialize};

/// Verified access-token claim set.
///
/// `permissions` is absent when the token was minted without RBAC
/// permissions; the gate treats that as an invalid-claims failure rather
/// than an empty grant.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Claims {
    pub iss: String,
    pub sub: String,
    pub aud: Audience,
    pub iat: Option<i64>,
    pub exp: i64,
    pub azp: Option<String>,
    pub scope: Option<String>,
    pub permissions: Option<Vec<String>>,
}

/// The provider issues `aud` as either a single string or an array.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Audience {
    One(String),
    Many(Vec<String>),
}
