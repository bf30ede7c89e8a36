//! Random photo lookup for newly registered animals.
//!
//! [`PhotoResolver`] maps a normalized animal type to a [`PhotoSource`].
//! The two built-in sources call public image APIs over HTTP; any failure
//! degrades to "no photo" rather than an error.

pub mod config;
pub mod resolver;
pub mod sources;

pub use config::PhotoConfig;
pub use resolver::PhotoResolver;
pub use sources::{CatPhotoSource, DogPhotoSource, PhotoError, PhotoSource};
