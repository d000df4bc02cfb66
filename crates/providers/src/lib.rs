//! Outbound HTTP collaborators.
//!
//! - [`generator`] -- Gemini-backed itinerary text generation.
//! - [`weather`] -- OpenWeatherMap current conditions.
//!
//! Both sit behind async traits so the API can be exercised with stubs.

pub mod error;
pub mod generator;
pub mod weather;

pub use error::ProviderError;
pub use generator::{GeminiClient, ItineraryGenerator};
pub use weather::{OpenWeatherClient, WeatherProvider};
