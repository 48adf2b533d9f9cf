//! Authentication utilities library
//!
//! Provides the credential and token primitives of the account service:
//! - Password hashing (Argon2id)
//! - Signed, time-limited identity tokens (HS256 JWT)
//! - Authentication coordination
//!
//! # Examples
//!
//! ## Password Hashing
//! ```
//! use auth::PasswordHasher;
//!
//! let hasher = PasswordHasher::new();
//! let hash = hasher.hash("my_password").unwrap();
//! let is_valid = hasher.verify("my_password", &hash).unwrap();
//! assert!(is_valid);
//! ```
//!
//! ## Tokens
//! ```
//! use auth::{Principal, TokenService};
//! use chrono::Duration;
//!
//! let tokens = TokenService::new(b"secret_key_at_least_32_bytes_long!", Duration::hours(1));
//! let principal = Principal { id: 1, identifier: "a@x.com".to_string() };
//! let token = tokens.issue(&principal).unwrap();
//! assert_eq!(tokens.verify(&token), Some(principal));
//! assert_eq!(tokens.verify("garbage"), None);
//! ```

pub mod authenticator;
pub mod jwt;
pub mod password;
pub mod token;

// Re-export commonly used items
pub use authenticator::AuthenticationError;
pub use authenticator::AuthenticationResult;
pub use authenticator::Authenticator;
pub use jwt::Claims;
pub use jwt::JwtError;
pub use jwt::JwtHandler;
pub use password::PasswordError;
pub use password::PasswordHasher;
pub use token::Principal;
pub use token::TokenService;
pub use token::DEFAULT_TOKEN_TTL_MINUTES;
