//! Service layer shared by the HTTP handlers.
//!
//! Services run against the [`wayfarer_db::Store`] ports, so the same code
//! is exercised by PostgreSQL in production and the in-memory store in
//! tests. Handlers stay thin: parse, validate, call a service, respond.

pub mod favorites;
pub mod itinerary;
pub mod notifications;
pub mod trips;

pub use favorites::FavoriteService;
pub use itinerary::{FailedPlace, ImportOutcome, ItineraryService};
pub use notifications::NotificationService;
pub use trips::TripService;
