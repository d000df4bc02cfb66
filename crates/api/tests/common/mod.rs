#![allow(dead_code)]

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use async_trait::async_trait;
use axum::body::Body;
use axum::http::header::{AUTHORIZATION, CONTENT_TYPE};
use axum::http::{Method, Request, Response, StatusCode};
use axum::Router;
use http_body_util::BodyExt;
use serde_json::{json, Value};
use tower::ServiceExt;

use wayfarer_api::auth::jwt::JwtConfig;
use wayfarer_api::config::{ProviderConfig, RateLimitConfig, ServerConfig};
use wayfarer_api::router::build_app_router;
use wayfarer_api::state::AppState;
use wayfarer_db::{MemoryStore, Store};
use wayfarer_providers::{ItineraryGenerator, ProviderError, WeatherProvider};

pub const TEST_PASSWORD: &str = "secret-pw";

/// Build a test `ServerConfig` with safe defaults.
pub fn test_config() -> ServerConfig {
    ServerConfig {
        host: "127.0.0.1".to_string(),
        port: 0,
        cors_origins: vec!["http://localhost:5173".to_string()],
        request_timeout_secs: 30,
        database_url: None,
        db_max_connections: 1,
        jwt: JwtConfig {
            secret: "test-secret-that-is-long-enough-for-hmac".to_string(),
            expiry_mins: 60,
        },
        providers: ProviderConfig {
            gemini_api_key: "test".to_string(),
            gemini_model: "test-model".to_string(),
            gemini_base_url: "http://localhost".to_string(),
            weather_api_key: "test".to_string(),
            weather_base_url: "http://localhost".to_string(),
        },
        ai_max_days: 14,
        rate_limit: RateLimitConfig {
            max_requests: 10_000,
            window_secs: 900,
        },
    }
}

// ---------------------------------------------------------------------------
// Provider stubs
// ---------------------------------------------------------------------------

/// Replies with fixed text, or fails when `reply` is `None`.
pub struct StubGenerator {
    reply: Option<String>,
}

#[async_trait]
impl ItineraryGenerator for StubGenerator {
    async fn generate(&self, _prompt: &str) -> Result<String, ProviderError> {
        self.reply
            .clone()
            .ok_or_else(|| ProviderError::Malformed("stub generator is down".to_string()))
    }
}

/// Echoes the coordinates back, or fails when `available` is false.
pub struct StubWeather {
    available: bool,
    pub calls: AtomicUsize,
}

#[async_trait]
impl WeatherProvider for StubWeather {
    async fn current(&self, lat: f64, lng: f64) -> Result<Value, ProviderError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        if !self.available {
            return Err(ProviderError::ApiError {
                status: 401,
                body: "invalid api key".to_string(),
            });
        }
        Ok(json!({
            "coord": { "lat": lat, "lon": lng },
            "main": { "temp": 29.5 },
            "weather": [{ "main": "Clouds" }]
        }))
    }
}

/// Three days' worth of places, fenced the way the model tends to reply.
pub const JAFFNA_ITINERARY: &str = r#"```json
[
  {"name": "Nallur Kandaswamy Temple", "address": "Jaffna, Sri Lanka", "summary": "Iconic Hindu temple."},
  {"name": "Jaffna Fort", "address": "Jaffna, Sri Lanka", "summary": "Dutch-era star fort."},
  {"name": "Casuarina Beach", "address": "Karainagar, Sri Lanka", "summary": "Shallow turquoise water."},
  {"name": "Jaffna Public Library", "address": "Jaffna, Sri Lanka", "summary": "Rebuilt landmark."},
  {"name": "Point Pedro", "address": "Point Pedro, Sri Lanka", "summary": "Northernmost tip."},
  {"name": "Keerimalai Springs", "address": "Keerimalai, Sri Lanka", "summary": "Freshwater springs by the sea."},
  {"name": "Delft Island", "address": "Delft, Sri Lanka", "summary": "Wild ponies and coral walls."}
]
```"#;

// ---------------------------------------------------------------------------
// Test application
// ---------------------------------------------------------------------------

/// The full router over an in-memory store, plus handles for the tests.
pub struct TestApp {
    pub router: Router,
    pub store: Arc<MemoryStore>,
    pub weather: Arc<StubWeather>,
}

pub struct TestAppBuilder {
    generator_reply: Option<String>,
    weather_available: bool,
    rate_limit_max: Option<u32>,
}

impl TestAppBuilder {
    pub fn generator_reply(mut self, reply: Option<&str>) -> Self {
        self.generator_reply = reply.map(str::to_string);
        self
    }

    pub fn weather_available(mut self, available: bool) -> Self {
        self.weather_available = available;
        self
    }

    pub fn rate_limit_max(mut self, max_requests: u32) -> Self {
        self.rate_limit_max = Some(max_requests);
        self
    }

    pub fn build(self) -> TestApp {
        let mut config = test_config();
        if let Some(max_requests) = self.rate_limit_max {
            config.rate_limit.max_requests = max_requests;
        }
        let store = Arc::new(MemoryStore::new());
        let weather = Arc::new(StubWeather {
            available: self.weather_available,
            calls: AtomicUsize::new(0),
        });

        let state = AppState {
            store: store.clone() as Arc<dyn Store>,
            config: Arc::new(config.clone()),
            generator: Arc::new(StubGenerator {
                reply: self.generator_reply,
            }),
            weather: weather.clone() as Arc<dyn WeatherProvider>,
        };

        TestApp {
            router: build_app_router(state, &config),
            store,
            weather,
        }
    }
}

impl TestApp {
    pub fn builder() -> TestAppBuilder {
        TestAppBuilder {
            generator_reply: Some(JAFFNA_ITINERARY.to_string()),
            weather_available: true,
            rate_limit_max: None,
        }
    }

    /// Default app: working generator and weather stubs.
    pub fn new() -> Self {
        Self::builder().build()
    }

    pub async fn send(
        &self,
        method: Method,
        uri: &str,
        token: Option<&str>,
        body: Option<Value>,
    ) -> Response<Body> {
        let mut request = Request::builder().method(method).uri(uri);
        if let Some(token) = token {
            request = request.header(AUTHORIZATION, format!("Bearer {token}"));
        }
        let request = match body {
            Some(body) => request
                .header(CONTENT_TYPE, "application/json")
                .body(Body::from(body.to_string())),
            None => request.body(Body::empty()),
        }
        .unwrap();

        self.router.clone().oneshot(request).await.unwrap()
    }

    pub async fn get(&self, uri: &str, token: Option<&str>) -> Response<Body> {
        self.send(Method::GET, uri, token, None).await
    }

    pub async fn post_json(&self, uri: &str, token: Option<&str>, body: Value) -> Response<Body> {
        self.send(Method::POST, uri, token, Some(body)).await
    }

    pub async fn put(&self, uri: &str, token: Option<&str>) -> Response<Body> {
        self.send(Method::PUT, uri, token, None).await
    }

    pub async fn delete(&self, uri: &str, token: Option<&str>) -> Response<Body> {
        self.send(Method::DELETE, uri, token, None).await
    }

    /// Register through the API and log in, returning `(token, user_id)`.
    pub async fn register_and_login(&self, email: &str) -> (String, i64) {
        let response = self
            .post_json(
                "/api/auth/register",
                None,
                json!({ "name": "Traveller", "email": email, "password": TEST_PASSWORD }),
            )
            .await;
        assert_eq!(response.status(), StatusCode::CREATED);

        let response = self
            .post_json(
                "/api/auth/login",
                None,
                json!({ "email": email, "password": TEST_PASSWORD }),
            )
            .await;
        assert_eq!(response.status(), StatusCode::OK);
        let json = body_json(response).await;

        let token = json["token"].as_str().expect("token in login response").to_string();
        let user_id = json["user"]["id"].as_i64().expect("user id in login response");
        (token, user_id)
    }
}

/// Collect a response body and parse it as JSON.
pub async fn body_json(response: Response<Body>) -> Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).expect("response body should be valid JSON")
}

/// Collect a response body as UTF-8 text.
pub async fn body_text(response: Response<Body>) -> String {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    String::from_utf8(bytes.to_vec()).expect("response body should be UTF-8")
}
