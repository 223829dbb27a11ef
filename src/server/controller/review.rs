use axum::{
    extract::{rejection::JsonRejection, Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};

use crate::{
    model::{
        api::ErrorDto,
        review::{ReviewDto, ReviewRequestDto},
    },
    server::{error::AppError, service::review::ReviewService, state::AppState},
};

/// Tag for grouping review endpoints in OpenAPI documentation
pub static REVIEW_TAG: &str = "reviews";

#[utoipa::path(
    get,
    path = "/api/reviews",
    tag = REVIEW_TAG,
    responses(
        (status = 200, description = "All reviews", body = Vec<ReviewDto>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_reviews(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    let service = ReviewService::new(&state.db);

    let reviews = service.list().await?;
    let reviews_dto: Vec<ReviewDto> = reviews.into_iter().map(|r| r.into_dto()).collect();

    Ok((StatusCode::OK, Json(reviews_dto)))
}

#[utoipa::path(
    post,
    path = "/api/reviews",
    tag = REVIEW_TAG,
    request_body = ReviewRequestDto,
    responses(
        (status = 201, description = "Review created", body = ReviewDto),
        (status = 400, description = "Malformed body or rating outside 1 to 5", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_review(
    State(state): State<AppState>,
    payload: Result<Json<ReviewRequestDto>, JsonRejection>,
) -> Result<impl IntoResponse, AppError> {
    let Json(payload) = payload?;
    let service = ReviewService::new(&state.db);

    let review = service.create(payload.into()).await?;

    Ok((StatusCode::CREATED, Json(review.into_dto())))
}

#[utoipa::path(
    put,
    path = "/api/reviews/{id}",
    tag = REVIEW_TAG,
    params(
        ("id" = String, Path, description = "Review ID")
    ),
    request_body = ReviewRequestDto,
    responses(
        (status = 200, description = "Review updated", body = ReviewDto),
        (status = 400, description = "Malformed body or rating outside 1 to 5", body = ErrorDto),
        (status = 404, description = "Review not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_review(
    State(state): State<AppState>,
    Path(id): Path<String>,
    payload: Result<Json<ReviewRequestDto>, JsonRejection>,
) -> Result<impl IntoResponse, AppError> {
    let Json(payload) = payload?;
    let service = ReviewService::new(&state.db);

    let review = service.update(&id, payload.into()).await?;

    Ok((StatusCode::OK, Json(review.into_dto())))
}

#[utoipa::path(
    delete,
    path = "/api/reviews/{id}",
    tag = REVIEW_TAG,
    params(
        ("id" = String, Path, description = "Review ID")
    ),
    responses(
        (status = 204, description = "Review deleted"),
        (status = 404, description = "Review not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_review(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let service = ReviewService::new(&state.db);

    service.delete(&id).await?;

    Ok(StatusCode::NO_CONTENT)
}
