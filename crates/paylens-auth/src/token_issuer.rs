// Access-token issuance and validation, refresh-value generation

use base64::engine::general_purpose::STANDARD as BASE64;
use base64::Engine as _;
use jsonwebtoken::{decode, encode, Algorithm, DecodingKey, EncodingKey, Header, Validation};
use rand::rngs::OsRng;
use rand::RngCore;
use serde::{Deserialize, Serialize};

use paylens_commons::models::User;
use paylens_commons::time::now_millis;

use crate::config::AuthConfig;
use crate::errors::{AuthError, AuthResult};

/// Claims carried by every access token.
///
/// Validity is determined purely by signature and these claims; access
/// tokens are never looked up in storage.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AccessClaims {
    /// Subject: the user's normalized email
    pub sub: String,
    /// User id (custom claim)
    pub uid: String,
    /// Unique token id
    pub jti: String,
    /// Issued at (Unix seconds)
    pub iat: usize,
    /// Expiration (Unix seconds)
    pub exp: usize,
    /// Issuer
    pub iss: String,
    /// Audience
    pub aud: String,
}

/// Signs access tokens and mints refresh-token values.
///
/// Construction fails on unusable configuration, so a built issuer can
/// always sign. Cheap to clone behind an `Arc`; holds no mutable state.
pub struct TokenIssuer {
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    validation: Validation,
    issuer: String,
    audience: String,
    access_token_minutes: i64,
}

impl TokenIssuer {
    /// Builds an issuer from validated configuration.
    pub fn new(config: &AuthConfig) -> AuthResult<Self> {
        config.validate()?;

        let mut validation = Validation::new(Algorithm::HS256);
        // Expiry is exact: a token is invalid from the instant `exp` passes.
        validation.leeway = 0;
        validation.set_issuer(&[&config.jwt_issuer]);
        validation.set_audience(&[&config.jwt_audience]);

        Ok(Self {
            encoding_key: EncodingKey::from_secret(config.jwt_secret.as_bytes()),
            decoding_key: DecodingKey::from_secret(config.jwt_secret.as_bytes()),
            validation,
            issuer: config.jwt_issuer.clone(),
            audience: config.jwt_audience.clone(),
            access_token_minutes: config.access_token_minutes,
        })
    }

    /// Issues a signed access token for the user.
    pub fn issue_access_token(&self, user: &User) -> AuthResult<String> {
        let now_secs = now_millis() / 1000;
        let claims = AccessClaims {
            sub: user.email.clone(),
            uid: user.id.to_string(),
            jti: nanoid::nanoid!(),
            iat: now_secs as usize,
            exp: (now_secs + self.access_token_minutes * 60) as usize,
            iss: self.issuer.clone(),
            aud: self.audience.clone(),
        };

        encode(&Header::new(Algorithm::HS256), &claims, &self.encoding_key)
            .map_err(|e| AuthError::HashingError(format!("JWT encoding error: {}", e)))
    }

    /// Validates signature, expiry, issuer, and audience.
    ///
    /// Every failure collapses into `InvalidOrExpiredToken`; callers get a
    /// 401 without learning which check failed.
    pub fn validate_access_token(&self, token: &str) -> AuthResult<AccessClaims> {
        decode::<AccessClaims>(token, &self.decoding_key, &self.validation)
            .map(|data| data.claims)
            .map_err(|_| AuthError::InvalidOrExpiredToken)
    }

    /// Mints a fresh refresh-token value: 64 bytes from the OS CSPRNG,
    /// base64-encoded. Persistence belongs to the caller.
    pub fn generate_refresh_value() -> String {
        let mut bytes = [0u8; 64];
        OsRng.fill_bytes(&mut bytes);
        BASE64.encode(bytes)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn issuer() -> TokenIssuer {
        TokenIssuer::new(&AuthConfig::default()).unwrap()
    }

    fn user() -> User {
        User::new("alice@example.com", "hash".to_string())
    }

    #[test]
    fn test_issue_and_validate_round_trip() {
        let issuer = issuer();
        let user = user();

        let token = issuer.issue_access_token(&user).unwrap();
        let claims = issuer.validate_access_token(&token).unwrap();

        assert_eq!(claims.sub, "alice@example.com");
        assert_eq!(claims.uid, user.id.to_string());
        assert_eq!(claims.iss, "paylens");
        assert_eq!(claims.aud, "paylens-web");
        assert!(claims.exp > claims.iat);
    }

    #[test]
    fn test_jti_is_unique_per_token() {
        let issuer = issuer();
        let user = user();

        let a = issuer.validate_access_token(&issuer.issue_access_token(&user).unwrap());
        let b = issuer.validate_access_token(&issuer.issue_access_token(&user).unwrap());
        assert_ne!(a.unwrap().jti, b.unwrap().jti);
    }

    #[test]
    fn test_tampered_token_rejected() {
        let issuer = issuer();
        let token = issuer.issue_access_token(&user()).unwrap();

        let mut tampered = token.clone();
        tampered.pop();
        assert_eq!(
            issuer.validate_access_token(&tampered).unwrap_err(),
            AuthError::InvalidOrExpiredToken
        );
        assert!(issuer.validate_access_token("garbage").is_err());
    }

    #[test]
    fn test_wrong_key_rejected() {
        let token = issuer().issue_access_token(&user()).unwrap();

        let other = TokenIssuer::new(&AuthConfig {
            jwt_secret: "a-different-secret".to_string(),
            ..Default::default()
        })
        .unwrap();
        assert!(other.validate_access_token(&token).is_err());
    }

    #[test]
    fn test_wrong_audience_rejected() {
        let token = issuer().issue_access_token(&user()).unwrap();

        let other = TokenIssuer::new(&AuthConfig {
            jwt_audience: "other-app".to_string(),
            ..Default::default()
        })
        .unwrap();
        assert!(other.validate_access_token(&token).is_err());
    }

    #[test]
    fn test_expired_token_rejected_without_leeway() {
        let issuer = issuer();
        let now_secs = now_millis() / 1000;

        // Hand-craft a token that expired one second ago.
        let claims = AccessClaims {
            sub: "alice@example.com".to_string(),
            uid: "u1".to_string(),
            jti: "j1".to_string(),
            iat: (now_secs - 60) as usize,
            exp: (now_secs - 1) as usize,
            iss: "paylens".to_string(),
            aud: "paylens-web".to_string(),
        };
        let expired = encode(
            &Header::new(Algorithm::HS256),
            &claims,
            &EncodingKey::from_secret(AuthConfig::default().jwt_secret.as_bytes()),
        )
        .unwrap();

        assert_eq!(
            issuer.validate_access_token(&expired).unwrap_err(),
            AuthError::InvalidOrExpiredToken
        );
    }

    #[test]
    fn test_refresh_values_are_long_and_unique() {
        let a = TokenIssuer::generate_refresh_value();
        let b = TokenIssuer::generate_refresh_value();
        assert_ne!(a, b);
        // 64 bytes → 88 base64 characters
        assert_eq!(a.len(), 88);
    }

    #[test]
    fn test_invalid_config_fails_construction() {
        let config = AuthConfig {
            jwt_secret: String::new(),
            ..Default::default()
        };
        assert!(matches!(
            TokenIssuer::new(&config),
            Err(AuthError::ConfigurationError(_))
        ));
    }
}
