//! Request extractors and middleware.
//!
//! - [`auth::AuthUser`] -- Extracts the authenticated user from a JWT Bearer token.
//! - [`rate_limit::limit_by_ip`] -- Per-client-IP request quota.

pub mod auth;
pub mod rate_limit;
