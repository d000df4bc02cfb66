use std::sync::Arc;

use wayfarer_db::Store;
use wayfarer_providers::{ItineraryGenerator, WeatherProvider};

use crate::config::ServerConfig;

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// This is cheaply cloneable (inner data is behind `Arc`).
#[derive(Clone)]
pub struct AppState {
    /// Persistence (PostgreSQL or in-memory).
    pub store: Arc<dyn Store>,
    /// Server configuration (accessed by middleware and handlers).
    pub config: Arc<ServerConfig>,
    /// Text generator behind the AI itinerary endpoints.
    pub generator: Arc<dyn ItineraryGenerator>,
    /// Weather data provider.
    pub weather: Arc<dyn WeatherProvider>,
}
