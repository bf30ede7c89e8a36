//! Registry from animal type to photo source.

use std::collections::HashMap;
use std::sync::Arc;

use crate::config::PhotoConfig;
use crate::sources::{CatPhotoSource, DogPhotoSource, PhotoSource};

/// Looks up a photo for an animal type.
///
/// Keys are stored lower-cased, so `"Dog"`, `"DOG"` and `"dog"` all reach the
/// same source. Types with no registered source resolve to `None` without
/// any network traffic.
#[derive(Clone, Default)]
pub struct PhotoResolver {
    sources: HashMap<String, Arc<dyn PhotoSource>>,
}

impl PhotoResolver {
    /// An empty registry. Every lookup yields `None`.
    pub fn new() -> Self {
        Self::default()
    }

    /// Registry with the built-in dog and cat sources.
    ///
    /// Both sources share one HTTP client whose timeout bounds every call.
    pub fn from_config(config: &PhotoConfig) -> Result<Self, reqwest::Error> {
        let client = reqwest::Client::builder()
            .timeout(config.timeout)
            .build()?;

        Ok(Self::new()
            .with_source("dog", Arc::new(DogPhotoSource::new(client.clone(), &config.dog_url)))
            .with_source("cat", Arc::new(CatPhotoSource::new(client, &config.cat_url))))
    }

    /// Register (or replace) the source for `animal_type`.
    pub fn register(&mut self, animal_type: &str, source: Arc<dyn PhotoSource>) {
        self.sources.insert(normalize(animal_type), source);
    }

    /// Builder-style [`register`](Self::register).
    pub fn with_source(mut self, animal_type: &str, source: Arc<dyn PhotoSource>) -> Self {
        self.register(animal_type, source);
        self
    }

    /// Whether a source is registered for `animal_type`.
    pub fn supports(&self, animal_type: &str) -> bool {
        self.sources.contains_key(&normalize(animal_type))
    }

    /// Fetch a photo URL for `animal_type`.
    ///
    /// Returns `None` for unregistered types and for any source failure.
    pub async fn resolve(&self, animal_type: &str) -> Option<String> {
        let key = normalize(animal_type);
        let source = self.sources.get(&key)?;

        match source.fetch().await {
            Ok(url) => {
                tracing::debug!(animal_type = %key, source = source.name(), %url, "Resolved photo");
                Some(url)
            }
            Err(e) => {
                tracing::warn!(
                    animal_type = %key,
                    source = source.name(),
                    error = %e,
                    "Photo source failed, continuing without a photo"
                );
                None
            }
        }
    }
}

fn normalize(animal_type: &str) -> String {
    animal_type.trim().to_lowercase()
}
