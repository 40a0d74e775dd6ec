//! Plant entity and request bodies.

use serde::{Deserialize, Deserializer, Serialize};
use sqlx::FromRow;

/// One row of the `plants` table, serialized as-is for every response.
#[derive(Debug, Clone, PartialEq, Serialize, FromRow)]
pub struct Plant {
    pub id: i64,
    pub name: Option<String>,
    pub image: Option<String>,
    /// Stored in a REAL column, so an integer sent as `15` is returned as `15.0`.
    pub price: Option<f64>,
}

/// Body of `POST /plants`. Missing keys are stored as NULL.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct NewPlant {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub image: Option<String>,
    #[serde(default)]
    pub price: Option<f64>,
}

/// Body of `PATCH /plants/:id`.
///
/// Outer `None`: key absent, column left alone. `Some(None)`: key sent as `null`, column cleared.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct PlantPatch {
    #[serde(default, deserialize_with = "present")]
    pub name: Option<Option<String>>,
    #[serde(default, deserialize_with = "present")]
    pub image: Option<Option<String>>,
    #[serde(default, deserialize_with = "present")]
    pub price: Option<Option<f64>>,
}

impl PlantPatch {
    pub fn is_empty(&self) -> bool {
        self.name.is_none() && self.image.is_none() && self.price.is_none()
    }
}

// Only called when the key exists, so a JSON null becomes Some(None).
fn present<'de, D, T>(deserializer: D) -> Result<Option<Option<T>>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    Option::<T>::deserialize(deserializer).map(Some)
}
