mod plants;
pub use plants::plant_routes;
