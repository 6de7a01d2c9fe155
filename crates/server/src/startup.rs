use std::{path::Path, sync::Arc};

use configs::{AppConfig, StoreBackend};
use service::auth::{
    password::{Argon2Hasher, PasswordHasherConfig},
    repo::json_file::JsonFileCredentialStore,
    AuthService, CredentialStore, MemoryCredentialStore,
};
use tower_http::cors::CorsLayer;
use tracing::{info, warn};

use crate::errors::StartupError;
use crate::routes::{self, auth::AppState};

fn build_cors() -> CorsLayer {
    CorsLayer::very_permissive()
}

/// Open the configured credential store and wire the auth service.
pub async fn build_state(cfg: &AppConfig) -> Result<AppState, StartupError> {
    let hasher = Argon2Hasher::new(PasswordHasherConfig {
        memory_kib: cfg.hashing.memory_kib,
        iterations: cfg.hashing.iterations,
        parallelism: cfg.hashing.parallelism,
    })
    .map_err(|e| StartupError::InvalidConfig(e.to_string()))?;

    let store: Arc<dyn CredentialStore> = match cfg.store.backend {
        StoreBackend::Memory => {
            warn!("using in-memory credential store; accounts are lost on restart");
            Arc::new(MemoryCredentialStore::new())
        }
        StoreBackend::JsonFile => {
            let path = Path::new(&cfg.store.path);
            common::env::ensure_parent_dir(path).await?;
            let store = JsonFileCredentialStore::open(path)
                .await
                .map_err(|e| StartupError::Store(e.to_string()))?;
            info!(path = %path.display(), "opened json file credential store");
            Arc::new(store)
        }
    };

    Ok(AppState { auth: AuthService::new(store, hasher) })
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        warn!(error = %e, "cannot listen for Ctrl+C; running until killed");
        std::future::pending::<()>().await;
    }
    info!("received Ctrl+C, shutting down");
}

/// Public entry: build the app from a loaded configuration and serve until Ctrl+C.
///
/// Expects `.env`, configuration and logging to be set up by the caller.
pub async fn run(cfg: AppConfig) -> anyhow::Result<()> {
    let state = build_state(&cfg).await?;
    let app = routes::build_router(state, build_cors());

    let addr = cfg.server.bind_addr()?;
    info!(%addr, backend = ?cfg.store.backend, "starting auth server");
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;
    Ok(())
}
