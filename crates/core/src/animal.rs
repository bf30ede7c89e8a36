//! Inbound animal payload and the rules it must satisfy.
//!
//! The same payload shape is used for create and update. Validation runs
//! before any photo lookup or store access, so a rejected payload never
//! causes a side effect.

use chrono::NaiveDate;
use serde::Deserialize;
use validator::{Validate, ValidationError, ValidationErrors};

use crate::age;
use crate::error::CoreError;

/// Entity name used in not-found errors.
pub const ANIMAL_ENTITY: &str = "Animal";

/// Maximum length of `animal_type`, `name`, and `breed`.
pub const MAX_TEXT_LEN: u64 = 100;

/// Maximum length of a client-supplied photo URL.
pub const MAX_PHOTO_URL_LEN: u64 = 2048;

/// Request body for `POST /animal` and `PUT /animal/{id}`.
///
/// `age` is deliberately absent: it is always computed from `birth_date`.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct AnimalPayload {
    #[validate(
        length(min = 1, max = 100, message = "must be between 1 and 100 characters"),
        custom(function = "validate_not_blank")
    )]
    pub animal_type: String,

    #[validate(
        length(min = 1, max = 100, message = "must be between 1 and 100 characters"),
        custom(function = "validate_not_blank")
    )]
    pub name: String,

    #[validate(
        length(min = 1, max = 100, message = "must be between 1 and 100 characters"),
        custom(function = "validate_not_blank")
    )]
    pub breed: String,

    #[validate(custom(function = "validate_birth_date"))]
    pub birth_date: NaiveDate,

    #[validate(length(max = 2048, message = "must be at most 2048 characters"))]
    #[serde(default)]
    pub photo_url: Option<String>,
}

impl AnimalPayload {
    /// Run every field rule, flattening failures into [`CoreError::Validation`].
    pub fn check(&self) -> Result<(), CoreError> {
        self.validate()
            .map_err(|errors| CoreError::Validation(validation_message(&errors)))
    }

    /// The supplied photo URL, or `None` when it is absent or blank.
    pub fn supplied_photo_url(&self) -> Option<String> {
        normalize_photo_url(self.photo_url.as_deref())
    }
}

/// Reject strings that contain only whitespace.
fn validate_not_blank(value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        return Err(ValidationError::new("blank").with_message("must not be blank".into()));
    }
    Ok(())
}

/// Reject birth dates after today (UTC).
fn validate_birth_date(value: &NaiveDate) -> Result<(), ValidationError> {
    if *value > age::today() {
        return Err(
            ValidationError::new("future_date").with_message("must not be in the future".into())
        );
    }
    Ok(())
}

/// Trim a photo URL, treating an empty result as absent.
pub fn normalize_photo_url(url: Option<&str>) -> Option<String> {
    url.map(str::trim)
        .filter(|u| !u.is_empty())
        .map(str::to_string)
}

/// Render validator output as `field: message` pairs, sorted by field.
pub fn validation_message(errors: &ValidationErrors) -> String {
    let mut parts: Vec<String> = errors
        .field_errors()
        .into_iter()
        .flat_map(|(field, errs)| {
            errs.iter().map(move |e| {
                let detail = e
                    .message
                    .as_ref()
                    .map(|m| m.to_string())
                    .unwrap_or_else(|| e.code.to_string());
                format!("{field}: {detail}")
            })
        })
        .collect();
    parts.sort();
    parts.join("; ")
}
