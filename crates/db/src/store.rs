//! Injectable record store.
//!
//! [`AnimalStore`] is the handle the service layer receives at construction.
//! [`PgAnimalStore`] is the production implementation over a connection
//! pool; tests supply their own in-memory implementation.

use async_trait::async_trait;
use shelter_core::types::DbId;

use crate::models::animal::{Animal, AnimalFields};
use crate::repositories::AnimalRepo;
use crate::DbPool;

#[async_trait]
pub trait AnimalStore: Send + Sync {
    /// Persist a new record under a freshly assigned id.
    async fn create(&self, input: &AnimalFields) -> Result<Animal, sqlx::Error>;

    /// Every persisted record.
    async fn list(&self) -> Result<Vec<Animal>, sqlx::Error>;

    async fn find_by_id(&self, id: DbId) -> Result<Option<Animal>, sqlx::Error>;

    /// Full replace. `None` when the id does not exist.
    async fn update(&self, id: DbId, input: &AnimalFields) -> Result<Option<Animal>, sqlx::Error>;

    /// `true` when a record was removed.
    async fn delete(&self, id: DbId) -> Result<bool, sqlx::Error>;
}

/// [`AnimalStore`] backed by PostgreSQL.
#[derive(Clone)]
pub struct PgAnimalStore {
    pool: DbPool,
}

impl PgAnimalStore {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl AnimalStore for PgAnimalStore {
    async fn create(&self, input: &AnimalFields) -> Result<Animal, sqlx::Error> {
        AnimalRepo::create(&self.pool, input).await
    }

    async fn list(&self) -> Result<Vec<Animal>, sqlx::Error> {
        AnimalRepo::list(&self.pool).await
    }

    async fn find_by_id(&self, id: DbId) -> Result<Option<Animal>, sqlx::Error> {
        AnimalRepo::find_by_id(&self.pool, id).await
    }

    async fn update(&self, id: DbId, input: &AnimalFields) -> Result<Option<Animal>, sqlx::Error> {
        AnimalRepo::update(&self.pool, id, input).await
    }

    async fn delete(&self, id: DbId) -> Result<bool, sqlx::Error> {
        AnimalRepo::delete(&self.pool, id).await
    }
}
