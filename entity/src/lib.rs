//! SeaORM entity models for the Elite Club datastore.
//!
//! Each module mirrors one table created by the `migration` crate.

pub mod prelude;

pub mod admin_user;
pub mod gallery;
pub mod game;
pub mod review;
pub mod schedule;
pub mod schedule_game;
pub mod user;
pub mod waitlist;
