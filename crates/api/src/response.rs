//! Response body types for the animal endpoints.
//!
//! Records are always serialized through [`AnimalResponse`] so that `age` is
//! computed at response time and never read from storage.

use chrono::NaiveDate;
use serde::Serialize;
use shelter_core::age;
use shelter_core::types::DbId;
use shelter_db::models::animal::Animal;

/// Public representation of an animal record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AnimalResponse {
    pub id: DbId,
    pub animal_type: String,
    pub name: String,
    pub breed: String,
    pub birth_date: NaiveDate,
    pub photo_url: Option<String>,
    /// Whole years elapsed since `birth_date`.
    pub age: i32,
}

impl AnimalResponse {
    /// Materialize a row, computing age against `today`.
    pub fn from_row(animal: Animal, today: NaiveDate) -> Self {
        Self {
            age: age::age_on(animal.birth_date, today),
            id: animal.id,
            animal_type: animal.animal_type,
            name: animal.name,
            breed: animal.breed,
            birth_date: animal.birth_date,
            photo_url: animal.photo_url,
        }
    }
}

impl From<Animal> for AnimalResponse {
    fn from(animal: Animal) -> Self {
        Self::from_row(animal, age::today())
    }
}

/// `GET /animals` body.
#[derive(Debug, Serialize)]
pub struct AnimalListResponse {
    pub animals: Vec<AnimalResponse>,
}

/// Body carrying a single record, with an optional confirmation message.
#[derive(Debug, Serialize)]
pub struct AnimalEnvelope {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<&'static str>,
    pub animal: AnimalResponse,
}

/// Body carrying only a confirmation message.
#[derive(Debug, Serialize)]
pub struct MessageResponse {
    pub message: &'static str,
}
