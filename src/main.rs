//! Hiring Portal Backend
//!
//! A REST backend for the hiring-portal demo: admins define jobs with a
//! per-job application form, applicants fetch the rendered form and submit
//! validated applications. Persistence is a namespaced key-value store on
//! SQLite standing in for a future backend.

mod api;
mod config;
mod db;
mod errors;
mod form;
mod format;
mod ids;
mod models;
mod seed;

use std::sync::Arc;

use axum::{
    routing::{get, post, put},
    Router,
};
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use config::Config;
use db::Repository;

/// Application state shared across all handlers.
#[derive(Clone)]
pub struct AppState {
    pub repo: Arc<Repository>,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Load configuration
    let config = Config::from_env();

    // Initialize logging
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.log_level));

    tracing_subscriber::registry()
        .with(env_filter)
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("Starting Hiring Portal Backend");
    tracing::info!("Store path: {:?}", config.db_path);
    tracing::info!("Bind address: {}", config.bind_addr);

    // Initialize the store and repository
    let store = db::init_store(&config.db_path).await?;
    let repo = Arc::new(Repository::new(Arc::new(store)));

    // Seed demo data on first run
    if config.seed_demo_data {
        seed::seed(&repo).await?;
    }

    // Create application state
    let state = AppState { repo };

    // Build router
    let app = create_router(state);

    // Start server
    let listener = tokio::net::TcpListener::bind(&config.bind_addr).await?;
    tracing::info!("Server listening on {}", config.bind_addr);

    axum::serve(listener, app).await?;

    Ok(())
}

/// Create the application router with all routes.
pub fn create_router(state: AppState) -> Router {
    // CORS configuration
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    // API routes
    let api_routes = Router::new()
        // Jobs
        .route("/jobs", get(api::list_jobs))
        .route("/jobs", post(api::create_job))
        .route("/jobs/{id}", get(api::get_job))
        .route("/jobs/{id}", put(api::update_job))
        .route("/jobs/slug/{slug}", get(api::get_job_by_slug))
        // Form configuration
        .route("/jobs/{id}/config", get(api::get_job_config))
        .route("/jobs/{id}/config", put(api::save_job_config))
        .route("/jobs/{id}/form", get(api::get_form))
        // Applications
        .route("/jobs/{id}/apply", post(api::apply))
        .route("/jobs/{id}/candidates", get(api::list_candidates));

    // Health check
    let health_routes = Router::new().route("/health", get(health_check));

    Router::new()
        .nest("/api", api_routes)
        .merge(health_routes)
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Health check endpoint.
async fn health_check() -> &'static str {
    "OK"
}
