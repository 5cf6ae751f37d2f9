pub mod config;
pub mod db;
pub mod defaults;
pub mod domain;
pub mod logging;
pub mod repository;
pub mod response;
pub mod routes;
pub mod state;
pub mod usecases;

use tower_http::{cors::CorsLayer, trace::TraceLayer};

use crate::config::Config;
use crate::db::{schema, seed, Database, DbInitError};
use crate::state::AppState;

/// Builds the application against the configured database, or against the
/// seeded in-memory store when none is reachable.
pub async fn create_app() -> axum::Router {
    create_app_with_config(&Config::from_env()).await
}

pub async fn create_app_with_config(config: &Config) -> axum::Router {
    let state = match init_database(config).await {
        Ok(database) => AppState::with_database(database),
        Err(err) => {
            tracing::warn!(error = %err, "database unavailable, serving seeded in-memory store");
            AppState::in_memory()
        }
    };
    app_with_state(state)
}

pub fn app_with_state(state: AppState) -> axum::Router {
    routes::router(state)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
}

async fn init_database(config: &Config) -> Result<Database, DbInitError> {
    let url = config
        .database_url
        .as_deref()
        .ok_or(DbInitError::MissingUrl)?;
    let database = Database::connect(url).await?;
    schema::ensure_schema(database.pool()).await?;
    seed::seed_if_empty(database.pool()).await;
    Ok(database)
}
