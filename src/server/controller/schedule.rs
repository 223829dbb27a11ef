use axum::{
    extract::{rejection::JsonRejection, Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};

use crate::{
    model::{
        api::ErrorDto,
        schedule::{ScheduleDto, ScheduleGameDto, ScheduleRequestDto},
    },
    server::{
        error::AppError, model::schedule::SaveScheduleParam, service::schedule::ScheduleService,
        state::AppState,
    },
};

/// Tag for grouping schedule endpoints in OpenAPI documentation
pub static SCHEDULE_TAG: &str = "schedule";

/// List every schedule with its games.
#[utoipa::path(
    get,
    path = "/api/schedule",
    tag = SCHEDULE_TAG,
    responses(
        (status = 200, description = "All schedules", body = Vec<ScheduleDto>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_schedules(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    let service = ScheduleService::new(&state.db);

    let schedules = service.list().await?;
    let schedules_dto: Vec<ScheduleDto> = schedules.into_iter().map(|s| s.into_dto()).collect();

    Ok((StatusCode::OK, Json(schedules_dto)))
}

/// List the games of every schedule as one flat list.
#[utoipa::path(
    get,
    path = "/api/schedule/games",
    tag = SCHEDULE_TAG,
    responses(
        (status = 200, description = "All schedule games", body = Vec<ScheduleGameDto>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_schedule_games(
    State(state): State<AppState>,
) -> Result<impl IntoResponse, AppError> {
    let service = ScheduleService::new(&state.db);

    let games = service.list_games().await?;
    let games_dto: Vec<ScheduleGameDto> = games.into_iter().map(|g| g.into_dto()).collect();

    Ok((StatusCode::OK, Json(games_dto)))
}

/// Get one schedule with its games.
#[utoipa::path(
    get,
    path = "/api/schedule/{id}",
    tag = SCHEDULE_TAG,
    params(
        ("id" = String, Path, description = "Schedule ID")
    ),
    responses(
        (status = 200, description = "The schedule", body = ScheduleDto),
        (status = 404, description = "Schedule not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_schedule(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let service = ScheduleService::new(&state.db);

    let schedule = service.get(&id).await?;

    Ok((StatusCode::OK, Json(schedule.into_dto())))
}

/// Create a schedule with its games.
#[utoipa::path(
    post,
    path = "/api/schedule",
    tag = SCHEDULE_TAG,
    request_body = ScheduleRequestDto,
    responses(
        (status = 201, description = "Schedule created", body = ScheduleDto),
        (status = 400, description = "Malformed request body", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_schedule(
    State(state): State<AppState>,
    payload: Result<Json<ScheduleRequestDto>, JsonRejection>,
) -> Result<impl IntoResponse, AppError> {
    let Json(payload) = payload?;
    let service = ScheduleService::new(&state.db);

    let schedule = service.create(SaveScheduleParam::from_dto(payload)).await?;

    Ok((StatusCode::CREATED, Json(schedule.into_dto())))
}

/// Replace a schedule and its whole game list.
///
/// # Returns
/// - `200 OK` - The updated schedule with exactly the submitted games
/// - `400 Bad Request` - Malformed request body
/// - `404 Not Found` - No schedule with that ID
/// - `500 Internal Server Error` - Database error; nothing was changed
#[utoipa::path(
    put,
    path = "/api/schedule/{id}",
    tag = SCHEDULE_TAG,
    params(
        ("id" = String, Path, description = "Schedule ID")
    ),
    request_body = ScheduleRequestDto,
    responses(
        (status = 200, description = "Schedule updated", body = ScheduleDto),
        (status = 400, description = "Malformed request body", body = ErrorDto),
        (status = 404, description = "Schedule not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_schedule(
    State(state): State<AppState>,
    Path(id): Path<String>,
    payload: Result<Json<ScheduleRequestDto>, JsonRejection>,
) -> Result<impl IntoResponse, AppError> {
    let Json(payload) = payload?;
    let service = ScheduleService::new(&state.db);

    let schedule = service
        .update(&id, SaveScheduleParam::from_dto(payload))
        .await?;

    Ok((StatusCode::OK, Json(schedule.into_dto())))
}

/// Delete a schedule and its games.
#[utoipa::path(
    delete,
    path = "/api/schedule/{id}",
    tag = SCHEDULE_TAG,
    params(
        ("id" = String, Path, description = "Schedule ID")
    ),
    responses(
        (status = 204, description = "Schedule deleted"),
        (status = 404, description = "Schedule not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_schedule(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let service = ScheduleService::new(&state.db);

    service.delete(&id).await?;

    Ok(StatusCode::NO_CONTENT)
}
