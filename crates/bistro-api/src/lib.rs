//! # Bistro API
//!
//! axum server for the restaurant site:
//!
//! - `GET/PUT /api/menu`: the whole menu document
//! - `POST /api/upload`: multipart image upload, served back under `/uploads`
//! - `POST /api/booking`, `POST /booking`: booking requests (logged only)
//! - `GET /api/health`
//! - `GET /`, `/about`, `/menu`: server-rendered pages

pub mod config;
pub mod error;
pub mod handlers;
pub mod templates;
pub mod types;

use anyhow::{Context, Result};
use axum::{
    extract::DefaultBodyLimit,
    routing::{get, post},
    Router,
};
use tower_http::{cors::CorsLayer, services::ServeDir, trace::TraceLayer};
use tracing::{error, info};

pub use config::ServerConfig;
pub use error::ApiError;
pub use types::ApiState;

use handlers::*;

/// Build the router over prepared state
pub fn create_router(state: ApiState) -> Router {
    let uploads_dir = state.uploads.dir().to_path_buf();
    let public_dir = state.config.public_dir.clone();
    let upload_limit = state.config.upload_max_bytes;

    Router::new()
        // Pages
        .route("/", get(index_page))
        .route("/about", get(about_page))
        .route("/menu", get(menu_page))
        .route("/booking", post(submit_booking_form))
        // API
        .route("/api/health", get(health_check))
        .route("/api/menu", get(get_menu).put(put_menu))
        .route(
            "/api/upload",
            post(upload_image).layer(DefaultBodyLimit::max(upload_limit)),
        )
        .route("/api/booking", post(create_booking))
        // Static files
        .nest_service("/uploads", ServeDir::new(uploads_dir))
        .fallback_service(ServeDir::new(public_dir))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}

/// Open the configured store and build the router
pub fn build_app(config: ServerConfig) -> Result<Router> {
    let state = ApiState::new(config)?;
    Ok(create_router(state))
}

/// Serve until Ctrl+C or SIGTERM
pub async fn run_server(config: ServerConfig) -> Result<()> {
    let addr = config.address();
    info!("Menu store: {}", config.store.describe());
    info!("Uploads directory: {}", config.store.uploads_dir.display());

    let app = build_app(config)?;

    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("Failed to bind {addr}"))?;
    info!("API server listening on {}", addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("API server stopped");
    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            error!("Failed to listen for Ctrl+C: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                error!("Failed to install SIGTERM handler: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    info!("Shutdown signal received");
}
