use axum::{
    extract::{rejection::JsonRejection, Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};

use crate::{
    model::{
        api::{ErrorDto, MessageDto},
        user::{CreateUserDto, UserExistsDto},
    },
    server::{
        error::AppError, model::user::CreateUserParam, service::user::UserService,
        state::AppState,
    },
};

/// Tag for grouping verified user endpoints in OpenAPI documentation
pub static USER_TAG: &str = "user";

/// Check whether a phone number already belongs to a verified user.
///
/// Lets the client skip the OTP step for returning patrons.
#[utoipa::path(
    get,
    path = "/api/verify/{phone}",
    tag = USER_TAG,
    params(
        ("phone" = String, Path, description = "Phone number")
    ),
    responses(
        (status = 200, description = "Whether the user exists", body = UserExistsDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn verify_user(
    State(state): State<AppState>,
    Path(phone): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let service = UserService::new(&state.db);

    let exists = service.exists(&phone).await?;

    Ok((StatusCode::OK, Json(UserExistsDto { user: exists })))
}

/// Save a patron after successful phone verification.
#[utoipa::path(
    post,
    path = "/api/users",
    tag = USER_TAG,
    request_body = CreateUserDto,
    responses(
        (status = 201, description = "User saved", body = MessageDto),
        (status = 400, description = "Invalid input or user already exists", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_user(
    State(state): State<AppState>,
    payload: Result<Json<CreateUserDto>, JsonRejection>,
) -> Result<impl IntoResponse, AppError> {
    let Json(payload) = payload?;
    let service = UserService::new(&state.db);

    service.save(CreateUserParam::from(payload)).await?;

    Ok((
        StatusCode::CREATED,
        Json(MessageDto {
            message: "User saved successfully".to_string(),
        }),
    ))
}
