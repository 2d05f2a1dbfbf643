//! Signup / login request model

use serde::Deserialize;

/// Maximum email length per RFC 5321 (prevent memory exhaustion)
const MAX_EMAIL_LENGTH: usize = 254;
/// Maximum password length (bcrypt limit is 72 bytes, but allow some headroom for encoding)
const MAX_PASSWORD_LENGTH: usize = 256;

/// Request body for signup and login; both carry the same pair.
#[derive(Debug, Deserialize)]
pub struct CredentialsRequest {
    #[serde(deserialize_with = "validate_email")]
    pub email: String,
    #[serde(deserialize_with = "validate_password_length")]
    pub password: String,
}

fn validate_email<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let s = String::deserialize(deserializer)?;
    if s.len() > MAX_EMAIL_LENGTH {
        return Err(serde::de::Error::custom(format!(
            "email exceeds maximum length of {} characters",
            MAX_EMAIL_LENGTH
        )));
    }
    if !s.contains('@') {
        return Err(serde::de::Error::custom("email must contain '@'"));
    }
    Ok(s)
}

fn validate_password_length<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let s = String::deserialize(deserializer)?;
    if s.is_empty() {
        return Err(serde::de::Error::custom("password must not be empty"));
    }
    if s.len() > MAX_PASSWORD_LENGTH {
        return Err(serde::de::Error::custom(format!(
            "password exceeds maximum length of {} characters",
            MAX_PASSWORD_LENGTH
        )));
    }
    Ok(s)
}
