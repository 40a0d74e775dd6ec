//! Route table: one entry per (path, method). The static `most-expensive` segment wins over `:id`.

use crate::handlers::plants::{
    create, delete as delete_handler, list, most_expensive, read, update,
};
use crate::state::AppState;
use axum::{routing::get, Router};

pub fn plant_routes(state: AppState) -> Router {
    Router::new()
        .route("/plants", get(list).post(create))
        .route("/plants/most-expensive", get(most_expensive))
        .route(
            "/plants/:id",
            get(read).patch(update).delete(delete_handler),
        )
        .with_state(state)
}
