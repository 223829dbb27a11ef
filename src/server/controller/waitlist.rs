use axum::{
    extract::{rejection::JsonRejection, Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};

use crate::{
    model::{
        api::ErrorDto,
        waitlist::{CreateWaitlistEntryDto, UpdateWaitlistEntryDto, WaitlistEntryDto},
    },
    server::{
        error::AppError,
        model::waitlist::{CreateWaitlistEntryParam, UpdateWaitlistEntryParam},
        service::waitlist::WaitlistService,
        state::AppState,
    },
};

/// Tag for grouping waitlist endpoints in OpenAPI documentation
pub static WAITLIST_TAG: &str = "waitlist";

/// List every waitlist entry.
///
/// # Returns
/// - `200 OK` - All entries, unordered
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    get,
    path = "/api/waitlist",
    tag = WAITLIST_TAG,
    responses(
        (status = 200, description = "All waitlist entries", body = Vec<WaitlistEntryDto>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_waitlist(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    let service = WaitlistService::new(&state.db);

    let entries = service.list().await?;
    let entries_dto: Vec<WaitlistEntryDto> = entries.into_iter().map(|e| e.into_dto()).collect();

    Ok((StatusCode::OK, Json(entries_dto)))
}

/// Add a patron to the waitlist.
///
/// The first name is trimmed and the last initial upper-cased before storing. A phone
/// number may only appear once on the waitlist.
///
/// # Arguments
/// - `state` - Application state containing the database connection
/// - `payload` - Entry fields; `smsUpdates` defaults to false
///
/// # Returns
/// - `201 Created` - The created entry
/// - `400 Bad Request` - Malformed body, empty field, or phone already on the waitlist
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    post,
    path = "/api/waitlist",
    tag = WAITLIST_TAG,
    request_body = CreateWaitlistEntryDto,
    responses(
        (status = 201, description = "Entry created", body = WaitlistEntryDto),
        (status = 400, description = "Invalid entry or duplicate phone", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_waitlist_entry(
    State(state): State<AppState>,
    payload: Result<Json<CreateWaitlistEntryDto>, JsonRejection>,
) -> Result<impl IntoResponse, AppError> {
    let Json(payload) = payload?;
    let service = WaitlistService::new(&state.db);

    let entry = service
        .enqueue(CreateWaitlistEntryParam::from_dto(payload))
        .await?;

    Ok((StatusCode::CREATED, Json(entry.into_dto())))
}

/// Replace a waitlist entry's fields.
///
/// Updating always clears the entry's SMS opt-in and check-in, so a checked-in patron
/// who is edited becomes subject to expiry again.
///
/// # Returns
/// - `201 Created` - The updated entry
/// - `400 Bad Request` - Malformed body, empty field, or phone taken by another entry
/// - `404 Not Found` - No entry with that ID
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    put,
    path = "/api/waitlist/{id}",
    tag = WAITLIST_TAG,
    params(
        ("id" = String, Path, description = "Waitlist entry ID")
    ),
    request_body = UpdateWaitlistEntryDto,
    responses(
        (status = 201, description = "Entry updated", body = WaitlistEntryDto),
        (status = 400, description = "Invalid entry or duplicate phone", body = ErrorDto),
        (status = 404, description = "Entry not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_waitlist_entry(
    State(state): State<AppState>,
    Path(id): Path<String>,
    payload: Result<Json<UpdateWaitlistEntryDto>, JsonRejection>,
) -> Result<impl IntoResponse, AppError> {
    let Json(payload) = payload?;
    let service = WaitlistService::new(&state.db);

    let entry = service
        .update(UpdateWaitlistEntryParam::from_dto(id, payload))
        .await?;

    Ok((StatusCode::CREATED, Json(entry.into_dto())))
}

/// Remove a waitlist entry.
///
/// # Returns
/// - `204 No Content` - Entry removed
/// - `404 Not Found` - No entry with that ID
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    delete,
    path = "/api/waitlist/{id}",
    tag = WAITLIST_TAG,
    params(
        ("id" = String, Path, description = "Waitlist entry ID")
    ),
    responses(
        (status = 204, description = "Entry removed"),
        (status = 404, description = "Entry not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_waitlist_entry(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let service = WaitlistService::new(&state.db);

    service.remove(&id).await?;

    Ok(StatusCode::NO_CONTENT)
}

/// Check a patron in. Checked-in entries never expire.
///
/// # Returns
/// - `200 OK` - The checked-in entry
/// - `404 Not Found` - No entry with that ID
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    put,
    path = "/api/waitlist/checkin/{id}",
    tag = WAITLIST_TAG,
    params(
        ("id" = String, Path, description = "Waitlist entry ID")
    ),
    responses(
        (status = 200, description = "Entry checked in", body = WaitlistEntryDto),
        (status = 404, description = "Entry not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn check_in_waitlist_entry(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let service = WaitlistService::new(&state.db);

    let entry = service.check_in(&id).await?;

    Ok((StatusCode::OK, Json(entry.into_dto())))
}

/// Clear an entry's SMS opt-in and check-in without changing anything else.
///
/// # Returns
/// - `200 OK` - The updated entry
/// - `404 Not Found` - No entry with that ID
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    put,
    path = "/api/waitlist/reset/{id}",
    tag = WAITLIST_TAG,
    params(
        ("id" = String, Path, description = "Waitlist entry ID")
    ),
    responses(
        (status = 200, description = "Flags cleared", body = WaitlistEntryDto),
        (status = 404, description = "Entry not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn reset_waitlist_entry(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let service = WaitlistService::new(&state.db);

    let entry = service.reset_flags(&id).await?;

    Ok((StatusCode::OK, Json(entry.into_dto())))
}
