use std::sync::Arc;

use crate::config::ServerConfig;
use crate::service::AnimalService;

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// This is cheaply cloneable (inner data is behind `Arc`).
#[derive(Clone)]
pub struct AppState {
    /// Server configuration.
    pub config: Arc<ServerConfig>,
    /// Animal record service, holding the store handle and photo resolver.
    pub animals: Arc<AnimalService>,
}
