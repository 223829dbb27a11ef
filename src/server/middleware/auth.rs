use axum::http::{header::AUTHORIZATION, HeaderMap};
use sea_orm::DatabaseConnection;

use crate::server::{
    error::{auth::AuthError, AppError},
    model::admin_user::AdminUser,
    service::auth::AuthService,
};

const BEARER_PREFIX: &str = "Bearer ";

/// Resolves the admin behind an `Authorization: Bearer <token>` header.
pub struct AuthGuard<'a> {
    db: &'a DatabaseConnection,
    jwt_key: &'a str,
    headers: &'a HeaderMap,
}

impl<'a> AuthGuard<'a> {
    pub fn new(db: &'a DatabaseConnection, jwt_key: &'a str, headers: &'a HeaderMap) -> Self {
        Self {
            db,
            jwt_key,
            headers,
        }
    }

    /// Requires a valid token naming an existing admin.
    ///
    /// # Returns
    /// - `Ok(AdminUser)` - The authenticated admin
    /// - `Err(AppError::AuthErr)` - Header missing or malformed, token invalid or expired,
    ///   or the admin was deleted
    pub async fn require(&self) -> Result<AdminUser, AppError> {
        let token = bearer_token(self.headers).ok_or(AuthError::MissingToken)?;

        AuthService::new(self.db, self.jwt_key)
            .current_user(token)
            .await
    }
}

fn bearer_token(headers: &HeaderMap) -> Option<&str> {
    headers
        .get(AUTHORIZATION)?
        .to_str()
        .ok()?
        .strip_prefix(BEARER_PREFIX)
        .map(str::trim)
        .filter(|token| !token.is_empty())
}
