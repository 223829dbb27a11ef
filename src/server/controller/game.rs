use axum::{
    extract::{rejection::JsonRejection, Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};

use crate::{
    model::{
        api::ErrorDto,
        game::{GameDto, GameRequestDto},
    },
    server::{error::AppError, service::game::GameService, state::AppState},
};

/// Tag for grouping game catalogue endpoints in OpenAPI documentation
pub static GAME_TAG: &str = "game";

#[utoipa::path(
    get,
    path = "/api/game",
    tag = GAME_TAG,
    responses(
        (status = 200, description = "All catalogue games", body = Vec<GameDto>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_games(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    let service = GameService::new(&state.db);

    let games = service.list().await?;
    let games_dto: Vec<GameDto> = games.into_iter().map(|g| g.into_dto()).collect();

    Ok((StatusCode::OK, Json(games_dto)))
}

#[utoipa::path(
    post,
    path = "/api/game",
    tag = GAME_TAG,
    request_body = GameRequestDto,
    responses(
        (status = 201, description = "Game created", body = GameDto),
        (status = 400, description = "Malformed request body", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_game(
    State(state): State<AppState>,
    payload: Result<Json<GameRequestDto>, JsonRejection>,
) -> Result<impl IntoResponse, AppError> {
    let Json(payload) = payload?;
    let service = GameService::new(&state.db);

    let game = service.create(payload.into()).await?;

    Ok((StatusCode::CREATED, Json(game.into_dto())))
}

#[utoipa::path(
    put,
    path = "/api/game/{id}",
    tag = GAME_TAG,
    params(
        ("id" = String, Path, description = "Game ID")
    ),
    request_body = GameRequestDto,
    responses(
        (status = 200, description = "Game updated", body = GameDto),
        (status = 400, description = "Malformed request body", body = ErrorDto),
        (status = 404, description = "Game not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_game(
    State(state): State<AppState>,
    Path(id): Path<String>,
    payload: Result<Json<GameRequestDto>, JsonRejection>,
) -> Result<impl IntoResponse, AppError> {
    let Json(payload) = payload?;
    let service = GameService::new(&state.db);

    let game = service.update(&id, payload.into()).await?;

    Ok((StatusCode::OK, Json(game.into_dto())))
}

#[utoipa::path(
    delete,
    path = "/api/game/{id}",
    tag = GAME_TAG,
    params(
        ("id" = String, Path, description = "Game ID")
    ),
    responses(
        (status = 204, description = "Game deleted"),
        (status = 404, description = "Game not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_game(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let service = GameService::new(&state.db);

    service.delete(&id).await?;

    Ok(StatusCode::NO_CONTENT)
}
