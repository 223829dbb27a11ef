//! Application state shared across all request handlers.
//!
//! This module defines the `AppState` struct which holds all shared resources needed by
//! the application. The state is initialized once during startup and then cloned for each
//! request handler through Axum's state extraction.
//!
//! The state includes:
//! - Database connection pool for data persistence
//! - HTTP client for the SMS verification provider
//! - JWT signing key for admin tokens
//! - Upload storage for gallery images

use sea_orm::DatabaseConnection;

use crate::server::{config::TwilioConfig, util::upload::UploadStore};

/// Application state containing shared resources and dependencies.
///
/// All fields are cheap to clone: `DatabaseConnection` is a pool handle and
/// `reqwest::Client` is reference counted internally.
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool for accessing persistent storage.
    pub db: DatabaseConnection,

    /// HTTP client for making requests to Twilio Verify.
    pub http_client: reqwest::Client,

    /// Secret used to sign and verify admin JWTs.
    pub jwt_key: String,

    /// Twilio Verify credentials and endpoint.
    pub twilio: TwilioConfig,

    /// Where gallery uploads are written and how their public URLs are formed.
    pub uploads: UploadStore,
}

impl AppState {
    /// Creates a new application state with the provided dependencies.
    ///
    /// # Arguments
    /// - `db` - Database connection pool
    /// - `http_client` - HTTP client for external API requests
    /// - `jwt_key` - Secret for signing admin tokens
    /// - `twilio` - Twilio Verify configuration
    /// - `uploads` - Upload storage location
    pub fn new(
        db: DatabaseConnection,
        http_client: reqwest::Client,
        jwt_key: String,
        twilio: TwilioConfig,
        uploads: UploadStore,
    ) -> Self {
        Self {
            db,
            http_client,
            jwt_key,
            twilio,
            uploads,
        }
    }
}
