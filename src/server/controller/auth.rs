use axum::{
    extract::{rejection::JsonRejection, State},
    http::{HeaderMap, StatusCode},
    response::IntoResponse,
    Json,
};

use crate::{
    model::{
        api::ErrorDto,
        auth::{AdminUserDto, AuthResponseDto, LoginDto, RegisterDto},
    },
    server::{
        error::AppError,
        middleware::auth::AuthGuard,
        model::admin_user::{AuthSession, RegisterAdminParam},
        service::auth::AuthService,
        state::AppState,
    },
};

/// Tag for grouping auth endpoints in OpenAPI documentation
pub static AUTH_TAG: &str = "auth";

/// Register a new admin.
///
/// # Arguments
/// - `state` - Application state containing the database connection and JWT key
/// - `payload` - Name, email and password
///
/// # Returns
/// - `201 Created` - Token and admin details
/// - `400 Bad Request` - Empty field or email already registered
/// - `500 Internal Server Error` - Hashing, signing or database error
#[utoipa::path(
    post,
    path = "/api/register",
    tag = AUTH_TAG,
    request_body = RegisterDto,
    responses(
        (status = 201, description = "Admin registered", body = AuthResponseDto),
        (status = 400, description = "Invalid input or user already exists", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn register(
    State(state): State<AppState>,
    payload: Result<Json<RegisterDto>, JsonRejection>,
) -> Result<impl IntoResponse, AppError> {
    let Json(payload) = payload?;
    let service = AuthService::new(&state.db, &state.jwt_key);

    let session = service.register(RegisterAdminParam::from(payload)).await?;

    Ok((StatusCode::CREATED, Json(into_response_dto(session))))
}

/// Sign in an existing admin.
///
/// # Returns
/// - `200 OK` - Token and admin details
/// - `400 Bad Request` - Unknown email or wrong password
/// - `500 Internal Server Error` - Hashing, signing or database error
#[utoipa::path(
    post,
    path = "/api/login",
    tag = AUTH_TAG,
    request_body = LoginDto,
    responses(
        (status = 200, description = "Admin signed in", body = AuthResponseDto),
        (status = 400, description = "Invalid credentials", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn login(
    State(state): State<AppState>,
    payload: Result<Json<LoginDto>, JsonRejection>,
) -> Result<impl IntoResponse, AppError> {
    let Json(payload) = payload?;
    let service = AuthService::new(&state.db, &state.jwt_key);

    let session = service.login(&payload.email, &payload.password).await?;

    Ok((StatusCode::OK, Json(into_response_dto(session))))
}

/// Get the admin identified by the bearer token.
///
/// # Returns
/// - `200 OK` - The admin's details
/// - `401 Unauthorized` - Token missing, invalid or expired
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    get,
    path = "/api/auth/user",
    tag = AUTH_TAG,
    responses(
        (status = 200, description = "Current admin", body = AdminUserDto),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearer" = [])),
)]
pub async fn get_user(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<impl IntoResponse, AppError> {
    let auth_guard = AuthGuard::new(&state.db, &state.jwt_key, &headers);
    let user = auth_guard.require().await?;

    Ok((StatusCode::OK, Json(user.into_dto())))
}

fn into_response_dto(session: AuthSession) -> AuthResponseDto {
    AuthResponseDto {
        token: session.token,
        user: session.user.into_dto(),
    }
}
