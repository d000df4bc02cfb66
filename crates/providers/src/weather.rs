//! Current-weather lookups against the OpenWeatherMap API.

use async_trait::async_trait;

use crate::error::{ensure_success, ProviderError};

/// Source of current weather conditions for a coordinate.
#[async_trait]
pub trait WeatherProvider: Send + Sync {
    /// Raw provider JSON for the given coordinate, in metric units.
    async fn current(&self, lat: f64, lng: f64) -> Result<serde_json::Value, ProviderError>;
}

/// HTTP client for the OpenWeatherMap `data/2.5/weather` endpoint.
pub struct OpenWeatherClient {
    client: reqwest::Client,
    base_url: String,
    api_key: String,
}

impl OpenWeatherClient {
    /// * `base_url` - e.g. `https://api.openweathermap.org`.
    pub fn new(client: reqwest::Client, base_url: String, api_key: String) -> Self {
        Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
            api_key,
        }
    }
}

#[async_trait]
impl WeatherProvider for OpenWeatherClient {
    async fn current(&self, lat: f64, lng: f64) -> Result<serde_json::Value, ProviderError> {
        if self.api_key.is_empty() {
            return Err(ProviderError::MissingApiKey("Weather"));
        }

        let response = self
            .client
            .get(format!("{}/data/2.5/weather", self.base_url))
            .query(&[
                ("lat", lat.to_string()),
                ("lon", lng.to_string()),
                ("units", "metric".to_string()),
                ("appid", self.api_key.clone()),
            ])
            .send()
            .await?;

        let response = ensure_success(response).await?;
        Ok(response.json().await?)
    }
}
