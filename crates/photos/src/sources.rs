//! HTTP photo sources.
//!
//! Each source issues one GET to a fixed endpoint and pulls a single URL out
//! of the response body according to that API's shape.

use async_trait::async_trait;
use serde::Deserialize;

/// Errors from a single photo fetch. Never surfaced past the resolver.
#[derive(Debug, thiserror::Error)]
pub enum PhotoError {
    /// The HTTP request itself failed (network, DNS, TLS, timeout, body decode).
    #[error("HTTP request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// The source returned a non-2xx status code.
    #[error("Photo source returned HTTP {0}")]
    Status(u16),

    /// The body parsed but did not contain a usable URL.
    #[error("Malformed photo response: {0}")]
    Malformed(String),
}

/// Something that can produce a photo URL on demand.
#[async_trait]
pub trait PhotoSource: Send + Sync {
    /// Short label used in logs.
    fn name(&self) -> &str;

    async fn fetch(&self) -> Result<String, PhotoError>;
}

// ---------------------------------------------------------------------------
// Dog
// ---------------------------------------------------------------------------

#[derive(Debug, Deserialize)]
struct DogResponse {
    message: String,
}

/// Random dog photo; the URL is the top-level `message` field.
pub struct DogPhotoSource {
    client: reqwest::Client,
    url: String,
}

impl DogPhotoSource {
    pub fn new(client: reqwest::Client, url: impl Into<String>) -> Self {
        Self {
            client,
            url: url.into(),
        }
    }
}

#[async_trait]
impl PhotoSource for DogPhotoSource {
    fn name(&self) -> &str {
        "dog"
    }

    async fn fetch(&self) -> Result<String, PhotoError> {
        let body: DogResponse = get_json(&self.client, &self.url).await?;
        non_empty(body.message)
    }
}

// ---------------------------------------------------------------------------
// Cat
// ---------------------------------------------------------------------------

#[derive(Debug, Deserialize)]
struct CatImage {
    url: String,
}

/// Random cat photo; the URL is the `url` field of the first array element.
pub struct CatPhotoSource {
    client: reqwest::Client,
    url: String,
}

impl CatPhotoSource {
    pub fn new(client: reqwest::Client, url: impl Into<String>) -> Self {
        Self {
            client,
            url: url.into(),
        }
    }
}

#[async_trait]
impl PhotoSource for CatPhotoSource {
    fn name(&self) -> &str {
        "cat"
    }

    async fn fetch(&self) -> Result<String, PhotoError> {
        let images: Vec<CatImage> = get_json(&self.client, &self.url).await?;
        let first = images
            .into_iter()
            .next()
            .ok_or_else(|| PhotoError::Malformed("empty image list".to_string()))?;
        non_empty(first.url)
    }
}

// ---- private helpers ----

/// GET `url`, require a success status, and decode the JSON body.
async fn get_json<T: serde::de::DeserializeOwned>(
    client: &reqwest::Client,
    url: &str,
) -> Result<T, PhotoError> {
    let response = client.get(url).send().await?;
    let status = response.status();
    if !status.is_success() {
        return Err(PhotoError::Status(status.as_u16()));
    }
    Ok(response.json::<T>().await?)
}

fn non_empty(url: String) -> Result<String, PhotoError> {
    if url.trim().is_empty() {
        return Err(PhotoError::Malformed("empty url".to_string()));
    }
    Ok(url)
}
