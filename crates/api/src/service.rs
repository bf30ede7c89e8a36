//! Animal record service.
//!
//! Owns the create/update photo policy: a caller-supplied photo URL is kept
//! verbatim, otherwise the [`PhotoResolver`] is asked for one based on the
//! animal type. Photo lookups never fail an operation; a failed or
//! unsupported lookup simply stores no photo.

use std::sync::Arc;

use shelter_core::animal::{AnimalPayload, ANIMAL_ENTITY};
use shelter_core::error::CoreError;
use shelter_core::types::DbId;
use shelter_db::models::animal::AnimalFields;
use shelter_db::store::AnimalStore;
use shelter_photos::PhotoResolver;

use crate::error::AppResult;
use crate::response::AnimalResponse;

/// CRUD over animal records with photo enrichment.
///
/// The store handle and resolver are injected at construction and shared
/// across requests; each call is independent.
pub struct AnimalService {
    store: Arc<dyn AnimalStore>,
    photos: PhotoResolver,
}

impl AnimalService {
    pub fn new(store: Arc<dyn AnimalStore>, photos: PhotoResolver) -> Self {
        Self { store, photos }
    }

    /// Validate, enrich with a photo if none was supplied, and persist.
    pub async fn create(&self, payload: AnimalPayload) -> AppResult<AnimalResponse> {
        payload.check()?;

        let photo_url = self.photo_for(&payload).await;
        let fields = into_fields(payload, photo_url);
        let animal = self.store.create(&fields).await?;

        tracing::info!(
            id = animal.id,
            animal_type = %animal.animal_type,
            has_photo = animal.photo_url.is_some(),
            "Animal created"
        );
        Ok(animal.into())
    }

    /// Every record, in store order.
    pub async fn list(&self) -> AppResult<Vec<AnimalResponse>> {
        let animals = self.store.list().await?;
        Ok(animals.into_iter().map(AnimalResponse::from).collect())
    }

    pub async fn retrieve(&self, id: DbId) -> AppResult<AnimalResponse> {
        let animal = self.store.find_by_id(id).await?.ok_or_else(|| not_found(id))?;
        Ok(animal.into())
    }

    /// Full replace of the descriptive fields.
    ///
    /// A non-empty `photo_url` in the payload replaces the stored photo.
    /// Otherwise the photo is re-resolved from the new `animal_type`, and
    /// the previous photo is discarded even if the lookup yields nothing.
    pub async fn update(&self, id: DbId, payload: AnimalPayload) -> AppResult<AnimalResponse> {
        payload.check()?;

        // Existence check first so a missing id never triggers a photo fetch.
        if self.store.find_by_id(id).await?.is_none() {
            return Err(not_found(id).into());
        }

        let photo_url = self.photo_for(&payload).await;
        let fields = into_fields(payload, photo_url);
        let animal = self
            .store
            .update(id, &fields)
            .await?
            .ok_or_else(|| not_found(id))?;

        tracing::info!(
            id,
            animal_type = %animal.animal_type,
            has_photo = animal.photo_url.is_some(),
            "Animal updated"
        );
        Ok(animal.into())
    }

    /// Permanently remove a record.
    pub async fn delete(&self, id: DbId) -> AppResult<()> {
        if !self.store.delete(id).await? {
            return Err(not_found(id).into());
        }
        tracing::info!(id, "Animal deleted");
        Ok(())
    }

    async fn photo_for(&self, payload: &AnimalPayload) -> Option<String> {
        match payload.supplied_photo_url() {
            Some(url) => Some(url),
            None => self.photos.resolve(&payload.animal_type).await,
        }
    }
}

fn into_fields(payload: AnimalPayload, photo_url: Option<String>) -> AnimalFields {
    AnimalFields {
        animal_type: payload.animal_type,
        name: payload.name,
        breed: payload.breed,
        birth_date: payload.birth_date,
        photo_url,
    }
}

fn not_found(id: DbId) -> CoreError {
    CoreError::NotFound {
        entity: ANIMAL_ENTITY,
        id,
    }
}
