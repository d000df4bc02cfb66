//! Pure domain logic for the wayfarer travel planner.
//!
//! Nothing in this crate performs I/O: storage lives in `wayfarer-db`,
//! outbound HTTP in `wayfarer-providers`, and the HTTP surface in
//! `wayfarer-api`.

pub mod error;
pub mod itinerary;
pub mod notification;
pub mod ownership;
pub mod trip;
pub mod types;
