//! Token refresh handler
//!
//! POST /auth/refresh - Rotates the refresh token and issues a new pair

use actix_web::{web, HttpRequest, HttpResponse};

use paylens_auth::helpers::cookie::REFRESH_COOKIE_NAME;
use paylens_auth::{AuthConfig, SessionService};

use super::{map_auth_error_to_response, session_response};
use crate::models::ErrorResponse;

/// POST /auth/refresh
///
/// Reads the refresh token from the cookie, rotates it, and returns a new
/// `{token, email}` pair with the replacement cookie. The presented value
/// is single-use: replaying it after a successful refresh yields 401.
pub async fn refresh_handler(
    req: HttpRequest,
    service: web::Data<SessionService>,
    config: web::Data<AuthConfig>,
) -> HttpResponse {
    let presented = match req.cookie(REFRESH_COOKIE_NAME) {
        Some(cookie) => cookie.value().to_string(),
        None => {
            return HttpResponse::Unauthorized()
                .json(ErrorResponse::new("unauthorized", "Refresh token not found"));
        }
    };

    match service.refresh(&presented).await {
        Ok(session) => session_response(&session, &config),
        Err(err) => map_auth_error_to_response(err),
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use actix_web::cookie::Cookie;
    use actix_web::http::StatusCode;
    use actix_web::{test, web, App};

    use paylens_auth::providers::{RefreshTokensProvider, UsersProvider};
    use paylens_auth::{AuthConfig, SessionService, SessionTokens, TokenIssuer};
    use paylens_store::{InMemoryBackend, StorageBackend};

    use super::*;

    async fn service_with_session() -> (SessionService, AuthConfig, SessionTokens) {
        let config = AuthConfig {
            bcrypt_cost: 4,
            ..Default::default()
        };
        let backend: Arc<dyn StorageBackend> = Arc::new(InMemoryBackend::new());
        let service = SessionService::new(
            Arc::new(UsersProvider::new(backend.clone())),
            Arc::new(RefreshTokensProvider::new(backend)),
            Arc::new(TokenIssuer::new(&config).unwrap()),
            config.clone(),
        );
        let session = service
            .register("alice@example.com", "hunter22")
            .await
            .unwrap();
        (service, config, session)
    }

    #[actix_rt::test]
    async fn test_refresh_rotates_the_cookie() {
        let (service, config, session) = service_with_session().await;
        let app = test::init_service(
            App::new()
                .app_data(web::Data::new(service))
                .app_data(web::Data::new(config))
                .route("/auth/refresh", web::post().to(refresh_handler)),
        )
        .await;

        let req = test::TestRequest::post()
            .uri("/auth/refresh")
            .cookie(Cookie::new(REFRESH_COOKIE_NAME, session.refresh_token.clone()))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::OK);

        let rotated = resp
            .response()
            .cookies()
            .find(|c| c.name() == REFRESH_COOKIE_NAME)
            .expect("rotated refresh cookie must be set")
            .value()
            .to_string();
        assert_ne!(rotated, session.refresh_token, "value must rotate");

        // The original value is now retired
        let replay = test::TestRequest::post()
            .uri("/auth/refresh")
            .cookie(Cookie::new(REFRESH_COOKIE_NAME, session.refresh_token))
            .to_request();
        let resp = test::call_service(&app, replay).await;
        assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);

        let body: serde_json::Value = test::read_body_json(resp).await;
        assert_eq!(body["message"], "Invalid or expired refresh token.");
    }

    #[actix_rt::test]
    async fn test_missing_cookie_is_unauthorized() {
        let (service, config, _session) = service_with_session().await;
        let app = test::init_service(
            App::new()
                .app_data(web::Data::new(service))
                .app_data(web::Data::new(config))
                .route("/auth/refresh", web::post().to(refresh_handler)),
        )
        .await;

        let req = test::TestRequest::post().uri("/auth/refresh").to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);

        let body: serde_json::Value = test::read_body_json(resp).await;
        assert_eq!(body["message"], "Refresh token not found");
    }
}
