use chrono::DateTime;
use chrono::Duration;
use chrono::Utc;
use serde::Deserialize;
use serde::Serialize;

use crate::token::Principal;

/// JWT claims carried by identity tokens.
///
/// `sub` holds the stored identity id rendered as a string and `email` the
/// identifier it was issued for. Timestamps are Unix seconds.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Claims {
    /// Subject (stored identity id)
    pub sub: String,

    /// Identifier the token was issued for
    pub email: String,

    /// Issued at
    pub iat: i64,

    /// Expiration time
    pub exp: i64,
}

impl Claims {
    /// Create claims for a principal, valid for `ttl` from `issued_at`.
    pub fn for_principal(principal: &Principal, issued_at: DateTime<Utc>, ttl: Duration) -> Self {
        let expiration = issued_at + ttl;

        Self {
            sub: principal.id.to_string(),
            email: principal.identifier.clone(),
            iat: issued_at.timestamp(),
            exp: expiration.timestamp(),
        }
    }
}
