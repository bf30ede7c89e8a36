//! Domain primitives for the shelter roster service.
//!
//! Holds the error type shared by every layer, the id alias used by the
//! store, the age calculation, and the validation rules applied to inbound
//! animal payloads. Nothing in this crate performs I/O.

pub mod age;
pub mod animal;
pub mod error;
pub mod types;
