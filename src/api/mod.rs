use axum::{
    Router,
    http::HeaderValue,
    routing::{get, post, put},
};
use std::sync::Arc;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use crate::config::Config;
use crate::db::Store;

mod directors;
mod error;
mod genres;
mod movies;
mod types;
mod validation;

pub use error::ApiError;
pub use types::*;

/// Per-request dependencies, injected into every handler instead of living
/// in process-wide globals.
#[derive(Clone)]
pub struct AppState {
    store: Store,
    config: Config,
}

impl AppState {
    #[must_use]
    pub const fn store(&self) -> &Store {
        &self.store
    }

    #[must_use]
    pub const fn config(&self) -> &Config {
        &self.config
    }
}

pub async fn create_app_state(config: Config) -> anyhow::Result<Arc<AppState>> {
    let store = Store::with_pool_options(
        &config.general.database_path,
        config.general.max_db_connections,
        config.general.min_db_connections,
    )
    .await?;

    Ok(Arc::new(AppState { store, config }))
}

pub fn router(state: Arc<AppState>) -> Router {
    let cors_origins = state.config().server.cors_allowed_origins.clone();

    let cors_layer = if cors_origins.contains(&"*".to_string()) {
        CorsLayer::new().allow_origin(Any)
    } else {
        let origins: Vec<HeaderValue> =
            cors_origins.iter().filter_map(|s| s.parse().ok()).collect();
        CorsLayer::new().allow_origin(origins)
    };

    Router::new()
        .route("/movies/", get(movies::list_movies))
        .route("/movies/", post(movies::create_movie))
        .route("/movies/{uid}", get(movies::get_movie))
        .route("/movies/{uid}", put(movies::update_movie))
        .route("/directors/", get(directors::list_directors))
        .route("/directors/{uid}", get(directors::get_director))
        .route("/genres/", get(genres::list_genres))
        .route("/genres/{uid}", get(genres::get_genre))
        .with_state(state)
        .layer(cors_layer.allow_methods(Any).allow_headers(Any))
        .layer(TraceLayer::new_for_http())
}
