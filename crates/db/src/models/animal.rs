//! Animal entity model and write DTO.

use chrono::NaiveDate;
use serde::Serialize;
use shelter_core::types::{DbId, Timestamp};
use sqlx::FromRow;

/// An animal row from the `animals` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Animal {
    pub id: DbId,
    /// Stored exactly as supplied; lower-cased only for photo lookup.
    pub animal_type: String,
    pub name: String,
    pub breed: String,
    pub birth_date: NaiveDate,
    pub photo_url: Option<String>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// Column values written on insert and on full replace.
///
/// `photo_url` has already been resolved by the caller; the store writes it
/// as given, including `None`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnimalFields {
    pub animal_type: String,
    pub name: String,
    pub breed: String,
    pub birth_date: NaiveDate,
    pub photo_url: Option<String>,
}
