//! Server lifecycle helpers.
//!
//! Bootstraps the storage backend and services, wires the HTTP server, and
//! coordinates graceful shutdown, keeping `main.rs` a thin orchestrator.

use std::path::Path;
use std::sync::Arc;

use actix_cors::Cors;
use actix_web::{middleware, web, App, HttpServer};
use anyhow::{Context, Result};
use log::{debug, info};

use paylens_api::routes::configure_routes;
use paylens_auth::providers::{RefreshTokensProvider, UsersProvider, AUTH_PARTITIONS};
use paylens_auth::{SessionService, TokenIssuer};
use paylens_salaries::providers::{SubmissionsProvider, VotesProvider, SALARY_PARTITIONS};
use paylens_salaries::SalaryService;
use paylens_store::{RocksDbBackend, StorageBackend};

use crate::config::ServerConfig;

/// Aggregated application state shared across HTTP workers.
pub struct ApplicationComponents {
    pub session_service: SessionService,
    pub salary_service: SalaryService,
    pub token_issuer: Arc<TokenIssuer>,
}

/// Open the storage backend and build both domain services over it.
pub async fn bootstrap(config: &ServerConfig) -> Result<ApplicationComponents> {
    let db_path = Path::new(&config.storage.rocksdb_path);
    std::fs::create_dir_all(db_path)
        .with_context(|| format!("creating data directory {}", db_path.display()))?;

    // One database holds every partition; both domains share the backend.
    let mut partitions = Vec::with_capacity(AUTH_PARTITIONS.len() + SALARY_PARTITIONS.len());
    partitions.extend_from_slice(&AUTH_PARTITIONS);
    partitions.extend_from_slice(&SALARY_PARTITIONS);

    let backend: Arc<dyn StorageBackend> =
        Arc::new(RocksDbBackend::open(db_path, &partitions)?);
    info!("Storage initialized at {}", db_path.display());

    let token_issuer = Arc::new(TokenIssuer::new(&config.auth)?);
    let session_service = SessionService::new(
        Arc::new(UsersProvider::new(backend.clone())),
        Arc::new(RefreshTokensProvider::new(backend.clone())),
        token_issuer.clone(),
        config.auth.clone(),
    );
    let salary_service = SalaryService::new(
        SubmissionsProvider::new(backend.clone()),
        VotesProvider::new(backend),
    );
    debug!("Session and salary services initialized");

    Ok(ApplicationComponents {
        session_service,
        salary_service,
        token_issuer,
    })
}

/// Start the HTTP server and block until it exits or Ctrl+C arrives.
pub async fn run(config: &ServerConfig, components: ApplicationComponents) -> Result<()> {
    let bind_addr = format!("{}:{}", config.server.host, config.server.port);
    info!("Starting HTTP server on {}", bind_addr);
    debug!("Endpoints: /auth/*, /salaries*, /health");

    let session_service = web::Data::new(components.session_service);
    let salary_service = web::Data::new(components.salary_service);
    let token_issuer = web::Data::from(components.token_issuer);
    let auth_config = web::Data::new(config.auth.clone());
    let allowed_origin = config.cors.allowed_origin.clone();

    let server = HttpServer::new(move || {
        // The refresh cookie crosses origins, so CORS names the browser
        // origin and allows credentials; a wildcard cannot carry cookies.
        let cors = Cors::default()
            .allowed_origin(&allowed_origin)
            .allow_any_method()
            .allow_any_header()
            .supports_credentials()
            .max_age(3600);

        App::new()
            .wrap(middleware::Logger::default())
            .wrap(cors)
            .app_data(session_service.clone())
            .app_data(salary_service.clone())
            .app_data(token_issuer.clone())
            .app_data(auth_config.clone())
            .configure(configure_routes)
    })
    .bind(&bind_addr)?
    .workers(if config.server.workers == 0 {
        num_cpus::get()
    } else {
        config.server.workers
    })
    .run();

    let server_handle = server.handle();
    let server_task = tokio::spawn(server);

    tokio::select! {
        result = server_task => {
            match result {
                Ok(Ok(())) => {}
                Ok(Err(e)) => log::error!("HTTP server failed: {}", e),
                Err(e) => log::error!("Server task failed: {}", e),
            }
        }
        _ = tokio::signal::ctrl_c() => {
            info!("Received Ctrl+C, initiating graceful shutdown...");
            server_handle.stop(true).await;
        }
    }

    info!("Server shutdown complete");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use paylens_salaries::NewSubmission;
    use tempfile::TempDir;

    fn test_config(dir: &TempDir) -> ServerConfig {
        let mut config = ServerConfig::default();
        config.storage.rocksdb_path = dir.path().join("db").to_string_lossy().into_owned();
        config.auth.bcrypt_cost = 4;
        config
    }

    #[tokio::test]
    async fn test_bootstrap_wires_both_domains() {
        let dir = TempDir::new().unwrap();
        let components = bootstrap(&test_config(&dir)).await.unwrap();

        // Identity and salary services operate over the same backend.
        let tokens = components
            .session_service
            .register("ops@example.com", "hunter22")
            .await
            .unwrap();
        let claims = components
            .token_issuer
            .validate_access_token(&tokens.access_token)
            .unwrap();
        assert_eq!(claims.sub, "ops@example.com");

        components
            .salary_service
            .submit(NewSubmission {
                country: "Germany".to_string(),
                company: "Initech".to_string(),
                role: "Backend Engineer".to_string(),
                years_of_experience: Some(5),
                level: Some("Senior".to_string()),
                salary_amount: 95_000.0,
                currency: None,
                period: None,
                is_anonymous: None,
                user_email: None,
            })
            .await
            .unwrap();
        assert_eq!(components.salary_service.list().await.unwrap().len(), 1);
    }

    #[tokio::test]
    async fn test_bootstrap_survives_reopen() {
        let dir = TempDir::new().unwrap();
        let config = test_config(&dir);

        {
            let components = bootstrap(&config).await.unwrap();
            components
                .session_service
                .register("keep@example.com", "hunter22")
                .await
                .unwrap();
        }

        // Same path, fresh process: the account must still be there.
        let components = bootstrap(&config).await.unwrap();
        let tokens = components
            .session_service
            .login("keep@example.com", "hunter22")
            .await
            .unwrap();
        assert_eq!(tokens.email, "keep@example.com");
    }
}
