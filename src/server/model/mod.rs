//! Domain models and operation-specific parameter types.
//!
//! Domain models are produced by the data layer from entity models and converted to
//! DTOs by controllers. Parameter structs carry validated input from controllers
//! through services into repositories.

pub mod admin_user;
pub mod gallery;
pub mod game;
pub mod review;
pub mod schedule;
pub mod user;
pub mod waitlist;
