use chrono::DateTime;
use chrono::Duration;
use chrono::Utc;

use crate::jwt::Claims;
use crate::jwt::JwtError;
use crate::jwt::JwtHandler;

/// Lifetime of issued tokens, in minutes, unless configured otherwise.
pub const DEFAULT_TOKEN_TTL_MINUTES: i64 = 60;

/// Minimal verified identity carried by a token.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Principal {
    pub id: i64,
    pub identifier: String,
}

/// Issues and verifies signed, time-limited identity tokens.
///
/// The signing key is fixed at construction and never changes afterwards, so
/// a single instance can be shared across request handlers.
pub struct TokenService {
    jwt_handler: JwtHandler,
    ttl: Duration,
}

impl TokenService {
    /// Create a token service.
    ///
    /// # Arguments
    /// * `secret` - HS256 signing key
    /// * `ttl` - Validity window of issued tokens
    pub fn new(secret: &[u8], ttl: Duration) -> Self {
        Self {
            jwt_handler: JwtHandler::new(secret),
            ttl,
        }
    }

    /// Issue a token for `principal`, valid from now.
    pub fn issue(&self, principal: &Principal) -> Result<String, JwtError> {
        self.issue_at(principal, Utc::now())
    }

    /// Issue a token for `principal` as if it had been issued at `issued_at`.
    ///
    /// Given the same principal, timestamp and key the token is identical.
    pub fn issue_at(
        &self,
        principal: &Principal,
        issued_at: DateTime<Utc>,
    ) -> Result<String, JwtError> {
        let claims = Claims::for_principal(principal, issued_at, self.ttl);
        self.jwt_handler.encode(&claims)
    }

    /// Verify a token and recover its principal.
    ///
    /// Malformed, tampered and expired tokens all yield `None`; the cause is
    /// only visible in debug logs.
    pub fn verify(&self, token: &str) -> Option<Principal> {
        match self.decode(token) {
            Ok(principal) => Some(principal),
            Err(e) => {
                tracing::debug!(error = %e, "Token rejected");
                None
            }
        }
    }

    fn decode(&self, token: &str) -> Result<Principal, JwtError> {
        let claims: Claims = self.jwt_handler.decode(token)?;

        let id = claims
            .sub
            .parse::<i64>()
            .map_err(|_| JwtError::InvalidToken("subject is not a valid id".to_string()))?;

        Ok(Principal {
            id,
            identifier: claims.email,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SECRET: &[u8] = b"test_secret_key_at_least_32_bytes!";

    fn ttl() -> Duration {
        Duration::minutes(DEFAULT_TOKEN_TTL_MINUTES)
    }

    fn principal() -> Principal {
        Principal {
            id: 7,
            identifier: "a@x.com".to_string(),
        }
    }

    #[test]
    fn test_issue_and_verify() {
        let service = TokenService::new(SECRET, ttl());

        let token = service.issue(&principal()).expect("Failed to issue token");

        assert_eq!(service.verify(&token), Some(principal()));
    }

    #[test]
    fn test_issue_is_deterministic_for_same_timestamp() {
        let service = TokenService::new(SECRET, ttl());
        let issued_at = Utc::now();

        let first = service.issue_at(&principal(), issued_at).unwrap();
        let second = service.issue_at(&principal(), issued_at).unwrap();

        assert_eq!(first, second);
    }

    #[test]
    fn test_verify_expired_token() {
        let service = TokenService::new(SECRET, ttl());

        let token = service
            .issue_at(&principal(), Utc::now() - Duration::hours(2))
            .unwrap();

        assert_eq!(service.verify(&token), None);
    }

    #[test]
    fn test_verify_token_from_other_key() {
        let issuer = TokenService::new(b"other_secret_key_at_least_32_bytes", ttl());
        let service = TokenService::new(SECRET, ttl());

        let token = issuer.issue(&principal()).unwrap();

        assert_eq!(service.verify(&token), None);
    }

    #[test]
    fn test_verify_tampered_token() {
        let service = TokenService::new(SECRET, ttl());
        let token = service.issue(&principal()).unwrap();

        let forged = service
            .issue(&Principal {
                id: 8,
                identifier: "b@x.com".to_string(),
            })
            .unwrap();

        // Swap in another payload while keeping the original signature
        let parts: Vec<&str> = token.split('.').collect();
        let forged_payload = forged.split('.').nth(1).unwrap();
        let tampered = format!("{}.{}.{}", parts[0], forged_payload, parts[2]);

        assert_eq!(service.verify(&tampered), None);
    }

    #[test]
    fn test_verify_garbage() {
        let service = TokenService::new(SECRET, ttl());

        assert_eq!(service.verify(""), None);
        assert_eq!(service.verify("not-a-token"), None);
    }

    #[test]
    fn test_verify_non_numeric_subject() {
        let handler = JwtHandler::new(SECRET);
        let service = TokenService::new(SECRET, ttl());

        let claims = Claims {
            sub: "alice".to_string(),
            email: "a@x.com".to_string(),
            iat: Utc::now().timestamp(),
            exp: Utc::now().timestamp() + 60,
        };
        let token = handler.encode(&claims).unwrap();

        assert_eq!(service.verify(&token), None);
    }
}
