//! # paylens-auth
//!
//! Identity domain: bcrypt password hashing, JWT access tokens, opaque
//! refresh tokens with single-use rotation, and the session service tying
//! them together.
//!
//! Access tokens are stateless (signature + expiry decide validity);
//! refresh tokens are stateful rows in the storage layer. The session
//! service only sees the `CredentialStore` / `RefreshTokenStore` traits;
//! the `providers` module implements them over `paylens-store`.

pub mod config;
pub mod errors;
pub mod helpers;
pub mod password;
pub mod providers;
pub mod session_service;
pub mod stores;
pub mod token_issuer;

pub use config::AuthConfig;
pub use errors::{AuthError, AuthResult};
pub use session_service::{SessionService, SessionTokens};
pub use stores::{CredentialStore, RefreshTokenStore};
pub use token_issuer::{AccessClaims, TokenIssuer};
