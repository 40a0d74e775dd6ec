//! Fixed response bodies.

use serde::Serialize;

pub const GREETING: &str = "starting backend server";

#[derive(Debug, Serialize)]
pub struct Greeting {
    pub message: &'static str,
}

/// Body of a successful `DELETE /plants/:id`.
#[derive(Debug, Serialize)]
pub struct Deleted {
    pub deleted: bool,
    pub id: i64,
    pub message: &'static str,
}

impl Deleted {
    pub fn plant(id: i64) -> Self {
        Deleted {
            deleted: true,
            id,
            message: "plant deleted",
        }
    }
}
