//! Plants API: REST backend for a plant catalogue stored in SQLite.

pub mod config;
pub mod error;
pub mod handlers;
pub mod migration;
pub mod models;
pub mod response;
pub mod routes;
pub mod service;
pub mod state;
pub mod store;

pub use config::ServerConfig;
pub use error::{AppError, ConfigError};
pub use migration::apply_migrations;
pub use models::{NewPlant, Plant, PlantPatch};
pub use routes::plant_routes;
pub use service::PlantService;
pub use state::AppState;
pub use store::connect;

use axum::{routing::get, Router};
use tower_http::trace::TraceLayer;

/// Full application router: the `/` greeting plus the plant routes, with request tracing.
pub fn app(state: AppState) -> Router {
    Router::new()
        .route("/", get(handlers::home))
        .merge(plant_routes(state))
        .layer(TraceLayer::new_for_http())
}
