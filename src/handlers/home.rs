use crate::response::{Greeting, GREETING};
use axum::Json;

pub async fn home() -> Json<Greeting> {
    Json(Greeting { message: GREETING })
}
