//! Data access for the plants table.

mod plants;
pub use plants::PlantService;
