//! Domain model structs and DTOs.
//!
//! Each submodule contains:
//! - A `FromRow` + `Serialize` entity struct matching the database row
//! - A `Deserialize` create DTO for inserts
//! - A `Deserialize` update DTO (all `Option` fields) for patches

pub mod feedback;
pub mod message;
pub mod portfolio;
pub mod profile;
pub mod rating;
pub mod review;
pub mod session;
pub mod transaction;
