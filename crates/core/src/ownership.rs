//! Owner-match checks shared by every user-scoped resource.
//!
//! A mismatch is always a rejected operation, never a silent no-op. The
//! status the caller sees depends on the endpoint contract, so the caller
//! picks the rejection flavour.

use crate::error::CoreError;
use crate::types::DbId;

/// How an owner mismatch is reported to the client.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OwnerMismatch {
    /// 401, used by place-append and notification endpoints.
    Unauthorized,
    /// 403, used by trip reads and deletes.
    Forbidden,
}

/// Succeed only when `actor_id` owns the resource.
pub fn ensure_owner(
    entity: &'static str,
    owner_id: DbId,
    actor_id: DbId,
    mismatch: OwnerMismatch,
) -> Result<(), CoreError> {
    if owner_id == actor_id {
        return Ok(());
    }

    let message = format!("You do not have access to this {}", entity.to_lowercase());
    Err(match mismatch {
        OwnerMismatch::Unauthorized => CoreError::Unauthorized(message),
        OwnerMismatch::Forbidden => CoreError::Forbidden(message),
    })
}
