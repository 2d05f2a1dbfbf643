//! Signup handler
//!
//! POST /auth/signup - Creates an account and returns its first session

use actix_web::{web, HttpResponse};

use paylens_auth::{AuthConfig, SessionService};

use super::models::CredentialsRequest;
use super::{map_auth_error_to_response, session_response};

/// POST /auth/signup
///
/// Registers the email and immediately starts a session: `{token, email}`
/// in the body, refresh token in the HttpOnly cookie. A duplicate email
/// yields 400.
pub async fn signup_handler(
    service: web::Data<SessionService>,
    config: web::Data<AuthConfig>,
    body: web::Json<CredentialsRequest>,
) -> HttpResponse {
    match service.register(&body.email, &body.password).await {
        Ok(session) => session_response(&session, &config),
        Err(err) => map_auth_error_to_response(err),
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use actix_web::http::StatusCode;
    use actix_web::{test, web, App};

    use paylens_auth::providers::{RefreshTokensProvider, UsersProvider};
    use paylens_auth::{AuthConfig, SessionService, TokenIssuer};
    use paylens_store::{InMemoryBackend, StorageBackend};

    use super::*;

    fn test_config() -> AuthConfig {
        AuthConfig {
            bcrypt_cost: 4, // keep hashing fast in tests
            ..Default::default()
        }
    }

    fn session_service(config: &AuthConfig) -> SessionService {
        let backend: Arc<dyn StorageBackend> = Arc::new(InMemoryBackend::new());
        SessionService::new(
            Arc::new(UsersProvider::new(backend.clone())),
            Arc::new(RefreshTokensProvider::new(backend)),
            Arc::new(TokenIssuer::new(config).unwrap()),
            config.clone(),
        )
    }

    #[actix_rt::test]
    async fn test_signup_returns_session_and_cookie() {
        let config = test_config();
        let app = test::init_service(
            App::new()
                .app_data(web::Data::new(session_service(&config)))
                .app_data(web::Data::new(config.clone()))
                .route("/auth/signup", web::post().to(signup_handler)),
        )
        .await;

        let req = test::TestRequest::post()
            .uri("/auth/signup")
            .set_json(serde_json::json!({
                "email": "alice@example.com",
                "password": "hunter22"
            }))
            .to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), StatusCode::OK);
        let cookie = resp
            .response()
            .cookies()
            .find(|c| c.name() == "refreshToken")
            .expect("refresh cookie must be set");
        assert!(!cookie.value().is_empty());

        let body: serde_json::Value = test::read_body_json(resp).await;
        assert_eq!(body["email"], "alice@example.com");
        assert!(body["token"].as_str().is_some_and(|t| !t.is_empty()));
    }

    #[actix_rt::test]
    async fn test_duplicate_signup_is_bad_request() {
        let config = test_config();
        let app = test::init_service(
            App::new()
                .app_data(web::Data::new(session_service(&config)))
                .app_data(web::Data::new(config.clone()))
                .route("/auth/signup", web::post().to(signup_handler)),
        )
        .await;

        let payload = serde_json::json!({
            "email": "alice@example.com",
            "password": "hunter22"
        });
        let first = test::TestRequest::post()
            .uri("/auth/signup")
            .set_json(&payload)
            .to_request();
        assert_eq!(test::call_service(&app, first).await.status(), StatusCode::OK);

        let second = test::TestRequest::post()
            .uri("/auth/signup")
            .set_json(&payload)
            .to_request();
        let resp = test::call_service(&app, second).await;
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

        let body: serde_json::Value = test::read_body_json(resp).await;
        assert_eq!(body["error"], "duplicate_user");
        assert_eq!(body["message"], "User already exists.");
    }
}
