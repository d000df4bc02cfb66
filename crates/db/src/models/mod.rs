//! Row models and DTOs. Responses serialize in camelCase to match the
//! REST contract consumed by the web client.

pub mod favorite;
pub mod notification;
pub mod trip;
pub mod user;
