//! HTTP request handlers.
//!
//! Each handler extracts its inputs, converts DTOs into parameter models, calls the
//! matching service and converts the result back into a DTO. Errors are returned as
//! `AppError` and rendered by its `IntoResponse` implementation.

pub mod auth;
pub mod gallery;
pub mod game;
pub mod otp;
pub mod review;
pub mod schedule;
pub mod user;
pub mod waitlist;
