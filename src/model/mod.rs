//! Request and response DTOs exchanged over the HTTP API.
//!
//! All field names are serialized in camelCase to match the web client.

pub mod api;
pub mod auth;
pub mod gallery;
pub mod game;
pub mod otp;
pub mod review;
pub mod schedule;
pub mod user;
pub mod waitlist;
