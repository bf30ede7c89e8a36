use std::time::Duration;

/// Default endpoint returning `{"message": "<url>", "status": "success"}`.
pub const DEFAULT_DOG_PHOTO_URL: &str = "https://dog.ceo/api/breeds/image/random";

/// Default endpoint returning `[{"id": ..., "url": "<url>", ...}]`.
pub const DEFAULT_CAT_PHOTO_URL: &str = "https://api.thecatapi.com/v1/images/search";

/// Outbound photo source configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct PhotoConfig {
    pub dog_url: String,
    pub cat_url: String,
    /// Upper bound on a single outbound request, connect included.
    pub timeout: Duration,
}

impl PhotoConfig {
    /// Load configuration from environment variables with defaults.
    ///
    /// | Env Var              | Default                                      |
    /// |----------------------|----------------------------------------------|
    /// | `DOG_PHOTO_URL`      | `https://dog.ceo/api/breeds/image/random`    |
    /// | `CAT_PHOTO_URL`      | `https://api.thecatapi.com/v1/images/search` |
    /// | `PHOTO_TIMEOUT_SECS` | `5`                                          |
    pub fn from_env() -> Self {
        let dog_url =
            std::env::var("DOG_PHOTO_URL").unwrap_or_else(|_| DEFAULT_DOG_PHOTO_URL.into());
        let cat_url =
            std::env::var("CAT_PHOTO_URL").unwrap_or_else(|_| DEFAULT_CAT_PHOTO_URL.into());

        let timeout_secs: u64 = std::env::var("PHOTO_TIMEOUT_SECS")
            .unwrap_or_else(|_| "5".into())
            .parse()
            .expect("PHOTO_TIMEOUT_SECS must be a valid u64");

        Self {
            dog_url,
            cat_url,
            timeout: Duration::from_secs(timeout_secs),
        }
    }
}

impl Default for PhotoConfig {
    fn default() -> Self {
        Self {
            dog_url: DEFAULT_DOG_PHOTO_URL.to_string(),
            cat_url: DEFAULT_CAT_PHOTO_URL.to_string(),
            timeout: Duration::from_secs(5),
        }
    }
}
