//! Repository for the `animals` table.

use sqlx::PgPool;
use shelter_core::types::DbId;

use crate::models::animal::{Animal, AnimalFields};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str =
    "id, animal_type, name, breed, birth_date, photo_url, created_at, updated_at";

/// Provides CRUD operations for animals.
pub struct AnimalRepo;

impl AnimalRepo {
    /// Insert a new animal, returning the created row.
    pub async fn create(pool: &PgPool, input: &AnimalFields) -> Result<Animal, sqlx::Error> {
        let query = format!(
            "INSERT INTO animals (animal_type, name, breed, birth_date, photo_url)
             VALUES ($1, $2, $3, $4, $5)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Animal>(&query)
            .bind(&input.animal_type)
            .bind(&input.name)
            .bind(&input.breed)
            .bind(input.birth_date)
            .bind(&input.photo_url)
            .fetch_one(pool)
            .await
    }

    /// Find an animal by its ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Animal>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM animals WHERE id = $1");
        sqlx::query_as::<_, Animal>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List all animals ordered by ID ascending.
    pub async fn list(pool: &PgPool) -> Result<Vec<Animal>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM animals ORDER BY id ASC");
        sqlx::query_as::<_, Animal>(&query).fetch_all(pool).await
    }

    /// Replace every mutable column of an animal.
    ///
    /// Returns `None` if no row with the given `id` exists.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &AnimalFields,
    ) -> Result<Option<Animal>, sqlx::Error> {
        let query = format!(
            "UPDATE animals SET
                animal_type = $2,
                name = $3,
                breed = $4,
                birth_date = $5,
                photo_url = $6,
                updated_at = NOW()
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Animal>(&query)
            .bind(id)
            .bind(&input.animal_type)
            .bind(&input.name)
            .bind(&input.breed)
            .bind(input.birth_date)
            .bind(&input.photo_url)
            .fetch_optional(pool)
            .await
    }

    /// Permanently delete an animal by ID. Returns `true` if a row was removed.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM animals WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
