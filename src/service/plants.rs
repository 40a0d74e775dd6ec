//! Plant queries against SQLite.

use crate::error::AppError;
use crate::models::{NewPlant, Plant, PlantPatch};
use sqlx::{QueryBuilder, Sqlite, SqlitePool};

const COLUMNS: &str = "id, name, image, price";

pub struct PlantService;

impl PlantService {
    /// All plants in ascending id order.
    pub async fn list(pool: &SqlitePool) -> Result<Vec<Plant>, AppError> {
        let sql = format!("SELECT {} FROM plants ORDER BY id", COLUMNS);
        tracing::debug!(sql = %sql, "query");
        let rows = sqlx::query_as::<_, Plant>(&sql).fetch_all(pool).await?;
        Ok(rows)
    }

    /// Insert one row and return it with its assigned id.
    pub async fn create(pool: &SqlitePool, body: &NewPlant) -> Result<Plant, AppError> {
        let sql = format!(
            "INSERT INTO plants (name, image, price) VALUES (?, ?, ?) RETURNING {}",
            COLUMNS
        );
        tracing::debug!(sql = %sql, "query");
        let row = sqlx::query_as::<_, Plant>(&sql)
            .bind(&body.name)
            .bind(&body.image)
            .bind(body.price)
            .fetch_one(pool)
            .await?;
        Ok(row)
    }

    pub async fn read(pool: &SqlitePool, id: i64) -> Result<Option<Plant>, AppError> {
        let sql = format!("SELECT {} FROM plants WHERE id = ?", COLUMNS);
        tracing::debug!(sql = %sql, id, "query");
        let row = sqlx::query_as::<_, Plant>(&sql)
            .bind(id)
            .fetch_optional(pool)
            .await?;
        Ok(row)
    }

    /// Write only the fields present in `patch`. Returns None when no row has `id`.
    pub async fn update(
        pool: &SqlitePool,
        id: i64,
        patch: &PlantPatch,
    ) -> Result<Option<Plant>, AppError> {
        if patch.is_empty() {
            return Self::read(pool, id).await;
        }

        let mut qb: QueryBuilder<Sqlite> = QueryBuilder::new("UPDATE plants SET ");
        let mut set = qb.separated(", ");
        if let Some(name) = &patch.name {
            set.push("name = ").push_bind_unseparated(name.clone());
        }
        if let Some(image) = &patch.image {
            set.push("image = ").push_bind_unseparated(image.clone());
        }
        if let Some(price) = patch.price {
            set.push("price = ").push_bind_unseparated(price);
        }
        qb.push(" WHERE id = ").push_bind(id);
        qb.push(" RETURNING ").push(COLUMNS);

        tracing::debug!(sql = %qb.sql(), id, "query");
        let row = qb.build_query_as::<Plant>().fetch_optional(pool).await?;
        Ok(row)
    }

    /// Delete by id. Returns whether a row was removed.
    pub async fn delete(pool: &SqlitePool, id: i64) -> Result<bool, AppError> {
        let sql = "DELETE FROM plants WHERE id = ?";
        tracing::debug!(sql = %sql, id, "query");
        let result = sqlx::query(sql).bind(id).execute(pool).await?;
        Ok(result.rows_affected() > 0)
    }

    /// Highest-priced plant; ties go to the lowest id. Unpriced rows never qualify.
    pub async fn most_expensive(pool: &SqlitePool) -> Result<Option<Plant>, AppError> {
        let sql = format!(
            "SELECT {} FROM plants WHERE price IS NOT NULL ORDER BY price DESC, id ASC LIMIT 1",
            COLUMNS
        );
        tracing::debug!(sql = %sql, "query");
        let row = sqlx::query_as::<_, Plant>(&sql).fetch_optional(pool).await?;
        Ok(row)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::migration::apply_migrations;
    use crate::store::connect;

    async fn pool() -> SqlitePool {
        let pool = connect("sqlite::memory:", 1).await.unwrap();
        apply_migrations(&pool).await.unwrap();
        pool
    }

    fn new_plant(name: &str, price: f64) -> NewPlant {
        NewPlant {
            name: Some(name.into()),
            image: Some(format!("{}.jpg", name.to_lowercase())),
            price: Some(price),
        }
    }

    #[tokio::test]
    async fn create_assigns_increasing_ids() {
        let pool = pool().await;
        let a = PlantService::create(&pool, &new_plant("Fern", 12.5)).await.unwrap();
        let b = PlantService::create(&pool, &new_plant("Cactus", 3.0)).await.unwrap();
        assert_eq!(a.id, 1);
        assert_eq!(b.id, 2);
        assert_eq!(a.name.as_deref(), Some("Fern"));
        assert_eq!(a.image.as_deref(), Some("fern.jpg"));
        assert_eq!(a.price, Some(12.5));
    }

    #[tokio::test]
    async fn create_stores_missing_fields_as_null() {
        let pool = pool().await;
        let plant = PlantService::create(&pool, &NewPlant::default()).await.unwrap();
        assert_eq!(
            plant,
            Plant {
                id: 1,
                name: None,
                image: None,
                price: None
            }
        );
    }

    #[tokio::test]
    async fn read_missing_is_none() {
        let pool = pool().await;
        assert!(PlantService::read(&pool, 42).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn list_returns_rows_in_id_order() {
        let pool = pool().await;
        assert!(PlantService::list(&pool).await.unwrap().is_empty());
        for (name, price) in [("Fern", 1.0), ("Ivy", 2.0), ("Moss", 3.0)] {
            PlantService::create(&pool, &new_plant(name, price)).await.unwrap();
        }
        let ids: Vec<i64> = PlantService::list(&pool)
            .await
            .unwrap()
            .into_iter()
            .map(|p| p.id)
            .collect();
        assert_eq!(ids, vec![1, 2, 3]);
    }

    #[tokio::test]
    async fn update_touches_only_present_fields() {
        let pool = pool().await;
        let created = PlantService::create(&pool, &new_plant("Fern", 12.5)).await.unwrap();
        let patch = PlantPatch {
            price: Some(Some(15.0)),
            ..Default::default()
        };
        let updated = PlantService::update(&pool, created.id, &patch)
            .await
            .unwrap()
            .unwrap();
        assert_eq!(updated.price, Some(15.0));
        assert_eq!(updated.name, created.name);
        assert_eq!(updated.image, created.image);
        assert_eq!(PlantService::read(&pool, created.id).await.unwrap(), Some(updated));
    }

    #[tokio::test]
    async fn update_with_null_clears_column() {
        let pool = pool().await;
        let created = PlantService::create(&pool, &new_plant("Fern", 12.5)).await.unwrap();
        let patch = PlantPatch {
            image: Some(None),
            name: Some(Some("Maidenhair".into())),
            ..Default::default()
        };
        let updated = PlantService::update(&pool, created.id, &patch)
            .await
            .unwrap()
            .unwrap();
        assert_eq!(updated.image, None);
        assert_eq!(updated.name.as_deref(), Some("Maidenhair"));
        assert_eq!(updated.price, Some(12.5));
    }

    #[tokio::test]
    async fn update_missing_is_none() {
        let pool = pool().await;
        let patch = PlantPatch {
            name: Some(Some("Ghost".into())),
            ..Default::default()
        };
        assert!(PlantService::update(&pool, 9, &patch).await.unwrap().is_none());
        assert!(PlantService::update(&pool, 9, &PlantPatch::default())
            .await
            .unwrap()
            .is_none());
    }

    #[tokio::test]
    async fn empty_update_returns_current_row() {
        let pool = pool().await;
        let created = PlantService::create(&pool, &new_plant("Fern", 12.5)).await.unwrap();
        let same = PlantService::update(&pool, created.id, &PlantPatch::default())
            .await
            .unwrap();
        assert_eq!(same, Some(created));
    }

    #[tokio::test]
    async fn delete_reports_whether_a_row_went() {
        let pool = pool().await;
        let created = PlantService::create(&pool, &new_plant("Fern", 12.5)).await.unwrap();
        assert!(PlantService::delete(&pool, created.id).await.unwrap());
        assert!(!PlantService::delete(&pool, created.id).await.unwrap());
        assert!(PlantService::read(&pool, created.id).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn most_expensive_breaks_ties_on_lowest_id() {
        let pool = pool().await;
        for (name, price) in [("A", 10.0), ("B", 25.0), ("C", 25.0), ("D", 5.0)] {
            PlantService::create(&pool, &new_plant(name, price)).await.unwrap();
        }
        let top = PlantService::most_expensive(&pool).await.unwrap().unwrap();
        assert_eq!(top.price, Some(25.0));
        assert_eq!(top.id, 2);
    }

    #[tokio::test]
    async fn most_expensive_skips_unpriced_rows() {
        let pool = pool().await;
        assert!(PlantService::most_expensive(&pool).await.unwrap().is_none());

        PlantService::create(&pool, &NewPlant::default()).await.unwrap();
        assert!(PlantService::most_expensive(&pool).await.unwrap().is_none());

        PlantService::create(&pool, &new_plant("Fern", -1.0)).await.unwrap();
        let top = PlantService::most_expensive(&pool).await.unwrap().unwrap();
        assert_eq!(top.id, 2);
    }
}
