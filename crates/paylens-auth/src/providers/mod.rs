//! Storage-backed implementations of the identity store contracts.

mod refresh_tokens_provider;
mod users_provider;

pub use refresh_tokens_provider::{
    RefreshTokensProvider, REFRESH_TOKENS_PARTITION, REFRESH_TOKEN_VALUE_INDEX,
};
pub use users_provider::{UsersProvider, USERS_PARTITION, USER_EMAIL_INDEX};

/// Every partition the identity domain needs; the server opens the storage
/// backend with this set.
pub const AUTH_PARTITIONS: [&str; 4] = [
    USERS_PARTITION,
    USER_EMAIL_INDEX,
    REFRESH_TOKENS_PARTITION,
    REFRESH_TOKEN_VALUE_INDEX,
];
