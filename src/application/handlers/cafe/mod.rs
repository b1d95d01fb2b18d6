//! Cafe handlers.
//!
//! Reads are public. Writes are gated: only owners create cafes and only
//! the owning owner updates or deletes one.

mod create_cafe;
mod delete_cafe;
mod get_cafe;
mod get_my_cafes;
mod list_cafes;
mod update_cafe;

pub use create_cafe::{CreateCafeCommand, CreateCafeHandler};
pub use delete_cafe::{DeleteCafeCommand, DeleteCafeHandler};
pub use get_cafe::GetCafeHandler;
pub use get_my_cafes::GetMyCafesHandler;
pub use list_cafes::ListCafesHandler;
pub use update_cafe::{UpdateCafeCommand, UpdateCafeHandler};

use crate::domain::foundation::{CafeId, DomainError, ErrorCode};

pub(crate) fn cafe_not_found(id: &CafeId) -> DomainError {
    DomainError::new(ErrorCode::CafeNotFound, "Cafe not found").with_detail("cafe_id", id.to_string())
}
