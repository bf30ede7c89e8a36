#![allow(dead_code)]

use std::collections::BTreeMap;
use std::sync::atomic::{AtomicI64, AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use axum::body::Body;
use axum::http::{Method, Request, Response};
use axum::Router;
use http_body_util::BodyExt;
use tower::ServiceExt;

use shelter_api::config::ServerConfig;
use shelter_api::router::build_app_router;
use shelter_api::service::AnimalService;
use shelter_api::state::AppState;
use shelter_core::types::DbId;
use shelter_db::models::animal::{Animal, AnimalFields};
use shelter_db::store::AnimalStore;
use shelter_photos::{PhotoError, PhotoResolver, PhotoSource};

pub const DOG_URL: &str = "http://example.com/dog.jpg";
pub const CAT_URL: &str = "http://example.com/cat.jpg";

// ---------------------------------------------------------------------------
// In-memory store
// ---------------------------------------------------------------------------

/// [`AnimalStore`] over a map. Ids are assigned from a counter that never
/// goes backwards, matching BIGSERIAL.
#[derive(Default)]
pub struct MemoryStore {
    rows: Mutex<BTreeMap<DbId, Animal>>,
    last_id: AtomicI64,
    writes: AtomicUsize,
}

impl MemoryStore {
    pub fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }

    /// Number of successful create/update/delete calls.
    pub fn writes(&self) -> usize {
        self.writes.load(Ordering::SeqCst)
    }

    pub fn len(&self) -> usize {
        self.rows.lock().unwrap().len()
    }

    pub fn get(&self, id: DbId) -> Option<Animal> {
        self.rows.lock().unwrap().get(&id).cloned()
    }
}

#[async_trait]
impl AnimalStore for MemoryStore {
    async fn create(&self, input: &AnimalFields) -> Result<Animal, sqlx::Error> {
        let id = self.last_id.fetch_add(1, Ordering::SeqCst) + 1;
        let now = chrono::Utc::now();
        let animal = Animal {
            id,
            animal_type: input.animal_type.clone(),
            name: input.name.clone(),
            breed: input.breed.clone(),
            birth_date: input.birth_date,
            photo_url: input.photo_url.clone(),
            created_at: now,
            updated_at: now,
        };
        self.rows.lock().unwrap().insert(id, animal.clone());
        self.writes.fetch_add(1, Ordering::SeqCst);
        Ok(animal)
    }

    async fn list(&self) -> Result<Vec<Animal>, sqlx::Error> {
        Ok(self.rows.lock().unwrap().values().cloned().collect())
    }

    async fn find_by_id(&self, id: DbId) -> Result<Option<Animal>, sqlx::Error> {
        Ok(self.get(id))
    }

    async fn update(&self, id: DbId, input: &AnimalFields) -> Result<Option<Animal>, sqlx::Error> {
        let mut rows = self.rows.lock().unwrap();
        let Some(animal) = rows.get_mut(&id) else {
            return Ok(None);
        };
        animal.animal_type = input.animal_type.clone();
        animal.name = input.name.clone();
        animal.breed = input.breed.clone();
        animal.birth_date = input.birth_date;
        animal.photo_url = input.photo_url.clone();
        animal.updated_at = chrono::Utc::now();
        self.writes.fetch_add(1, Ordering::SeqCst);
        Ok(Some(animal.clone()))
    }

    async fn delete(&self, id: DbId) -> Result<bool, sqlx::Error> {
        let removed = self.rows.lock().unwrap().remove(&id).is_some();
        if removed {
            self.writes.fetch_add(1, Ordering::SeqCst);
        }
        Ok(removed)
    }
}

// ---------------------------------------------------------------------------
// Photo sources
// ---------------------------------------------------------------------------

/// Source returning a fixed URL (or failing) and counting calls.
pub struct StubSource {
    url: Option<&'static str>,
    calls: AtomicUsize,
}

impl StubSource {
    pub fn returning(url: &'static str) -> Arc<Self> {
        Arc::new(Self {
            url: Some(url),
            calls: AtomicUsize::new(0),
        })
    }

    pub fn failing() -> Arc<Self> {
        Arc::new(Self {
            url: None,
            calls: AtomicUsize::new(0),
        })
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl PhotoSource for StubSource {
    fn name(&self) -> &str {
        "stub"
    }

    async fn fetch(&self) -> Result<String, PhotoError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.url
            .map(str::to_string)
            .ok_or_else(|| PhotoError::Malformed("stub failure".to_string()))
    }
}

/// Everything a test needs to drive the app and inspect side effects.
pub struct TestApp {
    pub router: Router,
    pub store: Arc<MemoryStore>,
    pub dog: Arc<StubSource>,
    pub cat: Arc<StubSource>,
}

impl TestApp {
    /// App with dog and cat sources returning [`DOG_URL`] and [`CAT_URL`].
    pub fn new() -> Self {
        Self::with_sources(StubSource::returning(DOG_URL), StubSource::returning(CAT_URL))
    }

    pub fn with_sources(dog: Arc<StubSource>, cat: Arc<StubSource>) -> Self {
        let store = MemoryStore::new();
        let photos = PhotoResolver::new()
            .with_source("dog", dog.clone())
            .with_source("cat", cat.clone());
        let service = AnimalService::new(store.clone(), photos);
        Self {
            router: build_test_app(Arc::new(service)),
            store,
            dog,
            cat,
        }
    }

    /// Total photo source calls across both stubs.
    pub fn photo_calls(&self) -> usize {
        self.dog.calls() + self.cat.calls()
    }
}

// ---------------------------------------------------------------------------
// App construction
// ---------------------------------------------------------------------------

/// Build a test `ServerConfig` with safe defaults.
pub fn test_config() -> ServerConfig {
    ServerConfig {
        host: "127.0.0.1".to_string(),
        port: 0,
        cors_origins: vec!["http://localhost:5000".to_string()],
        request_timeout_secs: 30,
        shutdown_timeout_secs: 5,
        db_max_connections: 1,
        json_logs: false,
    }
}

/// Build the full application router with all middleware layers, using the
/// same builder as `main.rs`.
pub fn build_test_app(animals: Arc<AnimalService>) -> Router {
    let config = test_config();
    let state = AppState {
        config: Arc::new(config.clone()),
        animals,
    };
    build_app_router(state, &config)
}

/// A valid create/update body.
pub fn animal_body(animal_type: &str, name: &str) -> serde_json::Value {
    serde_json::json!({
        "animal_type": animal_type,
        "name": name,
        "breed": "Mixed",
        "birth_date": "2019-04-02"
    })
}

// ---------------------------------------------------------------------------
// Request helpers
// ---------------------------------------------------------------------------

pub async fn get(app: Router, uri: &str) -> Response<Body> {
    send(app, Method::GET, uri, Body::empty(), false).await
}

pub async fn delete(app: Router, uri: &str) -> Response<Body> {
    send(app, Method::DELETE, uri, Body::empty(), false).await
}

pub async fn post_json(app: Router, uri: &str, body: serde_json::Value) -> Response<Body> {
    send(app, Method::POST, uri, Body::from(body.to_string()), true).await
}

pub async fn put_json(app: Router, uri: &str, body: serde_json::Value) -> Response<Body> {
    send(app, Method::PUT, uri, Body::from(body.to_string()), true).await
}

/// POST a raw string body with a JSON content type.
pub async fn post_raw(app: Router, uri: &str, body: &'static str) -> Response<Body> {
    send(app, Method::POST, uri, Body::from(body), true).await
}

async fn send(app: Router, method: Method, uri: &str, body: Body, json: bool) -> Response<Body> {
    let mut builder = Request::builder().method(method).uri(uri);
    if json {
        builder = builder.header("content-type", "application/json");
    }
    app.oneshot(builder.body(body).unwrap()).await.unwrap()
}

pub async fn body_bytes(response: Response<Body>) -> Vec<u8> {
    response
        .into_body()
        .collect()
        .await
        .unwrap()
        .to_bytes()
        .to_vec()
}

pub async fn body_json(response: Response<Body>) -> serde_json::Value {
    serde_json::from_slice(&body_bytes(response).await).unwrap()
}
