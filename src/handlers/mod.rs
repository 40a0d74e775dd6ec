//! HTTP handlers for the home greeting and plant CRUD.

pub mod home;
pub mod plants;
pub use home::home;
