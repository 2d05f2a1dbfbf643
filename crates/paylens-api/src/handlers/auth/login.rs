//! Login handler
//!
//! POST /auth/login - Authenticates a user and starts a session

use actix_web::{web, HttpResponse};

use paylens_auth::{AuthConfig, SessionService};

use super::models::CredentialsRequest;
use super::{map_auth_error_to_response, session_response};

/// POST /auth/login
///
/// Verifies the credentials and returns `{token, email}` plus the refresh
/// cookie. Unknown email and wrong password both yield the same 401.
pub async fn login_handler(
    service: web::Data<SessionService>,
    config: web::Data<AuthConfig>,
    body: web::Json<CredentialsRequest>,
) -> HttpResponse {
    match service.login(&body.email, &body.password).await {
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

    async fn registered_service() -> (SessionService, AuthConfig) {
        let config = AuthConfig {
            bcrypt_cost: 4, // keep hashing fast in tests
            ..Default::default()
        };
        let backend: Arc<dyn StorageBackend> = Arc::new(InMemoryBackend::new());
        let service = SessionService::new(
            Arc::new(UsersProvider::new(backend.clone())),
            Arc::new(RefreshTokensProvider::new(backend)),
            Arc::new(TokenIssuer::new(&config).unwrap()),
            config.clone(),
        );
        service
            .register("alice@example.com", "hunter22")
            .await
            .unwrap();
        (service, config)
    }

    #[actix_rt::test]
    async fn test_login_with_right_password_succeeds() {
        let (service, config) = registered_service().await;
        let app = test::init_service(
            App::new()
                .app_data(web::Data::new(service))
                .app_data(web::Data::new(config))
                .route("/auth/login", web::post().to(login_handler)),
        )
        .await;

        let req = test::TestRequest::post()
            .uri("/auth/login")
            .set_json(serde_json::json!({
                "email": "alice@example.com",
                "password": "hunter22"
            }))
            .to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), StatusCode::OK);
        assert!(resp
            .response()
            .cookies()
            .any(|c| c.name() == "refreshToken"));

        let body: serde_json::Value = test::read_body_json(resp).await;
        assert_eq!(body["email"], "alice@example.com");
    }

    #[actix_rt::test]
    async fn test_wrong_password_and_unknown_email_both_401() {
        let (service, config) = registered_service().await;
        let app = test::init_service(
            App::new()
                .app_data(web::Data::new(service))
                .app_data(web::Data::new(config))
                .route("/auth/login", web::post().to(login_handler)),
        )
        .await;

        for payload in [
            serde_json::json!({"email": "alice@example.com", "password": "wrong"}),
            serde_json::json!({"email": "nobody@example.com", "password": "hunter22"}),
        ] {
            let req = test::TestRequest::post()
                .uri("/auth/login")
                .set_json(&payload)
                .to_request();
            let resp = test::call_service(&app, req).await;
            assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);

            let body: serde_json::Value = test::read_body_json(resp).await;
            assert_eq!(body["message"], "Invalid credentials.");
        }
    }
}
