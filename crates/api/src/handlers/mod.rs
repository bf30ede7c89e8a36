//! Request handlers.
//!
//! Handlers are thin: they extract path and body, delegate to the
//! [`AnimalService`](crate::service::AnimalService) held in state, and wrap
//! the result in the response envelope. Errors map via [`AppError`](crate::error::AppError).

pub mod animal;
