//! Shelter roster API server library.
//!
//! Exposes the core building blocks (config, state, error handling, routes,
//! the animal record service) so integration tests and the binary entrypoint
//! can both access them.

pub mod config;
pub mod error;
pub mod extract;
pub mod handlers;
pub mod response;
pub mod router;
pub mod routes;
pub mod service;
pub mod state;
