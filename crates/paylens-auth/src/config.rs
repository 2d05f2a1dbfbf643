//! Auth configuration section.
//!
//! Embedded as `[auth]` in the server's TOML config. Every field has a
//! development default; `validate()` runs once at startup and any failure is
//! fatal, so token issuance never hits a configuration error per request.

use serde::{Deserialize, Serialize};

use crate::errors::{AuthError, AuthResult};

/// Settings for token issuance, password hashing, and the refresh cookie.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuthConfig {
    /// HS256 signing key for access tokens.
    #[serde(default = "default_jwt_secret")]
    pub jwt_secret: String,

    /// Value of the `iss` claim; verified on validation.
    #[serde(default = "default_jwt_issuer")]
    pub jwt_issuer: String,

    /// Value of the `aud` claim; verified on validation.
    #[serde(default = "default_jwt_audience")]
    pub jwt_audience: String,

    /// Access token lifetime in minutes.
    #[serde(default = "default_access_token_minutes")]
    pub access_token_minutes: i64,

    /// Refresh token lifetime in days. Also the refresh cookie max-age.
    #[serde(default = "default_refresh_token_days")]
    pub refresh_token_days: i64,

    /// bcrypt work factor. 12 is the production default; tests use 4.
    #[serde(default = "default_bcrypt_cost")]
    pub bcrypt_cost: u32,

    /// Secure flag on the refresh cookie. Enable behind HTTPS.
    #[serde(default)]
    pub cookie_secure: bool,
}

fn default_jwt_secret() -> String {
    // Development-only key; deployments override via config or PAYLENS_JWT_SECRET
    "paylens-dev-secret-change-me".to_string()
}

fn default_jwt_issuer() -> String {
    "paylens".to_string()
}

fn default_jwt_audience() -> String {
    "paylens-web".to_string()
}

fn default_access_token_minutes() -> i64 {
    15
}

fn default_refresh_token_days() -> i64 {
    7
}

fn default_bcrypt_cost() -> u32 {
    bcrypt::DEFAULT_COST
}

impl Default for AuthConfig {
    fn default() -> Self {
        Self {
            jwt_secret: default_jwt_secret(),
            jwt_issuer: default_jwt_issuer(),
            jwt_audience: default_jwt_audience(),
            access_token_minutes: default_access_token_minutes(),
            refresh_token_days: default_refresh_token_days(),
            bcrypt_cost: default_bcrypt_cost(),
            cookie_secure: false,
        }
    }
}

impl AuthConfig {
    /// Verifies the section is usable. Called once at startup.
    pub fn validate(&self) -> AuthResult<()> {
        if self.jwt_secret.trim().is_empty() {
            return Err(AuthError::ConfigurationError(
                "auth.jwt_secret must not be empty".to_string(),
            ));
        }
        if self.jwt_issuer.trim().is_empty() {
            return Err(AuthError::ConfigurationError(
                "auth.jwt_issuer must not be empty".to_string(),
            ));
        }
        if self.jwt_audience.trim().is_empty() {
            return Err(AuthError::ConfigurationError(
                "auth.jwt_audience must not be empty".to_string(),
            ));
        }
        if self.access_token_minutes <= 0 {
            return Err(AuthError::ConfigurationError(format!(
                "auth.access_token_minutes must be positive, got {}",
                self.access_token_minutes
            )));
        }
        if self.refresh_token_days <= 0 {
            return Err(AuthError::ConfigurationError(format!(
                "auth.refresh_token_days must be positive, got {}",
                self.refresh_token_days
            )));
        }
        // bcrypt rejects costs outside 4..=31
        if !(4..=31).contains(&self.bcrypt_cost) {
            return Err(AuthError::ConfigurationError(format!(
                "auth.bcrypt_cost must be between 4 and 31, got {}",
                self.bcrypt_cost
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_are_valid() {
        assert!(AuthConfig::default().validate().is_ok());
    }

    #[test]
    fn test_empty_secret_rejected() {
        let config = AuthConfig {
            jwt_secret: "   ".to_string(),
            ..Default::default()
        };
        assert!(matches!(
            config.validate(),
            Err(AuthError::ConfigurationError(_))
        ));
    }

    #[test]
    fn test_zero_ttl_rejected() {
        let config = AuthConfig {
            access_token_minutes: 0,
            ..Default::default()
        };
        assert!(config.validate().is_err());

        let config = AuthConfig {
            refresh_token_days: -1,
            ..Default::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_bcrypt_cost_bounds() {
        let config = AuthConfig {
            bcrypt_cost: 3,
            ..Default::default()
        };
        assert!(config.validate().is_err());

        let config = AuthConfig {
            bcrypt_cost: 32,
            ..Default::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_toml_section_with_defaults() {
        let config: AuthConfig = serde_json::from_str("{}").unwrap();
        assert_eq!(config.access_token_minutes, 15);
        assert_eq!(config.refresh_token_days, 7);
        assert!(!config.cookie_secure);
    }
}
