//! Database repository layer for all domain entities.
//!
//! This module contains repository structs that handle database operations for each
//! domain in the application. Repositories use SeaORM entity models internally and return
//! domain models to keep the data layer separate from business logic. All queries,
//! inserts, updates and deletes go through these repositories.

pub mod admin_user;
pub mod gallery;
pub mod game;
pub mod review;
pub mod schedule;
pub mod user;
pub mod waitlist;

#[cfg(test)]
mod test;
