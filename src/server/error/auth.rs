use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::model::api::ErrorDto;

#[derive(Error, Debug)]
pub enum AuthError {
    /// Registration attempted with an email that already belongs to an admin.
    #[error("User already exists")]
    UserAlreadyExists,

    /// Login attempted with an unknown email or a wrong password.
    #[error("Invalid credentials")]
    InvalidCredentials,

    /// No bearer token was supplied on a protected route.
    #[error("Missing bearer token")]
    MissingToken,

    /// Bearer token failed signature or expiry validation.
    #[error("Invalid bearer token: {0}")]
    InvalidToken(String),

    /// Token was valid but the admin it names no longer exists.
    #[error("Admin user {0} not found")]
    UserNotInDatabase(String),
}

/// Converts authentication errors into HTTP responses.
///
/// - `UserAlreadyExists` / `InvalidCredentials` → 400 Bad Request
/// - `MissingToken` / `InvalidToken` / `UserNotInDatabase` → 401 Unauthorized
///
/// Token failures are logged at debug level while the client receives a generic message.
impl IntoResponse for AuthError {
    fn into_response(self) -> Response {
        match self {
            Self::UserAlreadyExists | Self::InvalidCredentials => (
                StatusCode::BAD_REQUEST,
                Json(ErrorDto {
                    error: self.to_string(),
                }),
            )
                .into_response(),
            Self::MissingToken | Self::InvalidToken(_) | Self::UserNotInDatabase(_) => {
                tracing::debug!("{}", self);

                (
                    StatusCode::UNAUTHORIZED,
                    Json(ErrorDto {
                        error: "Unauthorized".to_string(),
                    }),
                )
                    .into_response()
            }
        }
    }
}
