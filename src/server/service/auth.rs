//! Admin registration, login and token handling.
//!
//! Passwords are hashed with bcrypt on the blocking thread pool. Successful registration
//! and login both issue an HS256 JWT carrying the admin's ID and email, valid for one
//! hour. Protected routes decode the token with `AuthService::decode_token` and load the
//! admin it names.

use chrono::{Duration, Utc};
use jsonwebtoken::{DecodingKey, EncodingKey, Header, Validation};
use sea_orm::DatabaseConnection;

use crate::server::{
    data::admin_user::AdminUserRepository,
    error::{auth::AuthError, AppError},
    model::admin_user::{
        AdminClaims, AdminUser, AuthSession, CreateAdminUserParam, RegisterAdminParam,
    },
    util::db::is_unique_violation,
};

/// Bcrypt work factor for stored admin passwords.
const BCRYPT_COST: u32 = 10;

/// Lifetime of an issued admin token.
const TOKEN_TTL_MINUTES: i64 = 60;

pub struct AuthService<'a> {
    db: &'a DatabaseConnection,
    jwt_key: &'a str,
}

impl<'a> AuthService<'a> {
    /// Creates a new AuthService instance.
    ///
    /// # Arguments
    /// - `db` - Reference to the database connection
    /// - `jwt_key` - Secret used to sign and verify tokens
    pub fn new(db: &'a DatabaseConnection, jwt_key: &'a str) -> Self {
        Self { db, jwt_key }
    }

    /// Registers a new admin and signs them in.
    ///
    /// # Arguments
    /// - `param` - Name, email and plain-text password
    ///
    /// # Returns
    /// - `Ok(AuthSession)` - Token and the created admin
    /// - `Err(AppError::BadRequest)` - A field is empty
    /// - `Err(AppError::AuthErr(UserAlreadyExists))` - Email already registered
    /// - `Err(AppError)` - Hashing, signing or database failure
    pub async fn register(&self, param: RegisterAdminParam) -> Result<AuthSession, AppError> {
        if param.name.trim().is_empty()
            || param.email.trim().is_empty()
            || param.password.is_empty()
        {
            return Err(AppError::BadRequest(
                "Name, email and password are required".to_string(),
            ));
        }

        let repo = AdminUserRepository::new(self.db);

        if repo.find_by_email(&param.email).await?.is_some() {
            return Err(AuthError::UserAlreadyExists.into());
        }

        let password = param.password;
        let password_hash =
            tokio::task::spawn_blocking(move || bcrypt::hash(password, BCRYPT_COST)).await??;

        let user = repo
            .create(CreateAdminUserParam {
                name: param.name,
                email: param.email,
                password_hash,
            })
            .await
            .map_err(|err| -> AppError {
                // A concurrent registration can pass the lookup above.
                if is_unique_violation(&err) {
                    AuthError::UserAlreadyExists.into()
                } else {
                    err.into()
                }
            })?;

        let token = self.issue_token(&user)?;

        Ok(AuthSession { token, user })
    }

    /// Signs in an existing admin.
    ///
    /// Unknown emails and wrong passwords produce the same error.
    ///
    /// # Returns
    /// - `Ok(AuthSession)` - Token and the admin
    /// - `Err(AppError::AuthErr(InvalidCredentials))` - Email unknown or password wrong
    pub async fn login(&self, email: &str, password: &str) -> Result<AuthSession, AppError> {
        let repo = AdminUserRepository::new(self.db);

        let Some(user) = repo.find_by_email(email).await? else {
            return Err(AuthError::InvalidCredentials.into());
        };

        let password = password.to_string();
        let hash = user.password_hash.clone();
        let valid = tokio::task::spawn_blocking(move || bcrypt::verify(password, &hash)).await??;

        if !valid {
            return Err(AuthError::InvalidCredentials.into());
        }

        let token = self.issue_token(&user)?;

        Ok(AuthSession { token, user })
    }

    /// Loads the admin named by a bearer token.
    ///
    /// # Returns
    /// - `Ok(AdminUser)` - The authenticated admin
    /// - `Err(AppError::AuthErr)` - Token invalid or expired, or admin no longer exists
    pub async fn current_user(&self, token: &str) -> Result<AdminUser, AppError> {
        let claims = self.decode_token(token)?;

        let repo = AdminUserRepository::new(self.db);

        repo.find_by_id(&claims.id)
            .await?
            .ok_or_else(|| AuthError::UserNotInDatabase(claims.id).into())
    }

    /// Validates a token's signature and expiry and returns its claims.
    pub fn decode_token(&self, token: &str) -> Result<AdminClaims, AuthError> {
        jsonwebtoken::decode::<AdminClaims>(
            token,
            &DecodingKey::from_secret(self.jwt_key.as_bytes()),
            &Validation::default(),
        )
        .map(|data| data.claims)
        .map_err(|e| AuthError::InvalidToken(e.to_string()))
    }

    fn issue_token(&self, user: &AdminUser) -> Result<String, AppError> {
        let exp = (Utc::now() + Duration::minutes(TOKEN_TTL_MINUTES)).timestamp() as usize;
        let claims = AdminClaims {
            id: user.id.clone(),
            email: user.email.clone(),
            exp,
        };

        let token = jsonwebtoken::encode(
            &Header::default(),
            &claims,
            &EncodingKey::from_secret(self.jwt_key.as_bytes()),
        )?;

        Ok(token)
    }
}
