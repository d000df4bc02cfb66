use crate::types::DbId;

#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    #[error("Entity not found: {entity} with id {id}")]
    NotFound { entity: &'static str, id: DbId },

    #[error("Validation failed: {0}")]
    Validation(String),

    #[error("Conflict: {0}")]
    Conflict(String),

    #[error("Unauthorized: {0}")]
    Unauthorized(String),

    #[error("Forbidden: {0}")]
    Forbidden(String),

    /// An external provider failed. `message` is safe to show to clients,
    /// `detail` is only logged.
    #[error("Upstream failure ({message}): {detail}")]
    Upstream {
        message: &'static str,
        detail: String,
    },

    #[error("Internal error: {0}")]
    Internal(String),
}
