//! Request handlers.
//!
//! Each submodule provides async handler functions for a single resource.
//! Handlers validate input via `gladiator_core`, delegate to the
//! corresponding repository in `gladiator_db`, and map errors via
//! [`crate::error::AppError`].

pub mod auth;
pub mod directory;
pub mod feedback;
pub mod message;
pub mod portfolio;
pub mod profile;
pub mod review;
pub mod transaction;
