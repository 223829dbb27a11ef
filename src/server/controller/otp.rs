use axum::{
    extract::{rejection::JsonRejection, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};

use crate::{
    model::{
        api::ErrorDto,
        otp::{OtpResponseDto, SendOtpDto, VerifyOtpDto},
    },
    server::{error::AppError, service::otp::OtpService, state::AppState},
};

/// Tag for grouping OTP endpoints in OpenAPI documentation
pub static OTP_TAG: &str = "otp";

/// Text a one-time verification code to a phone number.
///
/// # Returns
/// - `200 OK` - The provider accepted the request
/// - `400 Bad Request` - Missing phone number
/// - `500 Internal Server Error` - The provider failed or was unreachable
#[utoipa::path(
    post,
    path = "/api/send-otp",
    tag = OTP_TAG,
    request_body = SendOtpDto,
    responses(
        (status = 200, description = "OTP sent", body = OtpResponseDto),
        (status = 400, description = "Missing phone number", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn send_otp(
    State(state): State<AppState>,
    payload: Result<Json<SendOtpDto>, JsonRejection>,
) -> Result<impl IntoResponse, AppError> {
    let Json(payload) = payload?;
    let service = OtpService::new(&state.http_client, &state.twilio);

    service.send(&payload.phone_number).await?;

    Ok((
        StatusCode::OK,
        Json(OtpResponseDto {
            success: true,
            message: "OTP Sent".to_string(),
        }),
    ))
}

/// Check a one-time code entered by the patron.
///
/// # Returns
/// - `200 OK` - Code approved
/// - `400 Bad Request` - Code rejected, or missing phone number or code
/// - `500 Internal Server Error` - The provider failed or was unreachable
#[utoipa::path(
    post,
    path = "/api/verify-otp",
    tag = OTP_TAG,
    request_body = VerifyOtpDto,
    responses(
        (status = 200, description = "OTP verified", body = OtpResponseDto),
        (status = 400, description = "Invalid OTP", body = OtpResponseDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn verify_otp(
    State(state): State<AppState>,
    payload: Result<Json<VerifyOtpDto>, JsonRejection>,
) -> Result<impl IntoResponse, AppError> {
    let Json(payload) = payload?;
    let service = OtpService::new(&state.http_client, &state.twilio);

    let approved = service.verify(&payload.phone_number, &payload.otp).await?;

    let response = if approved {
        (
            StatusCode::OK,
            Json(OtpResponseDto {
                success: true,
                message: "OTP Verified".to_string(),
            }),
        )
    } else {
        (
            StatusCode::BAD_REQUEST,
            Json(OtpResponseDto {
                success: false,
                message: "Invalid OTP".to_string(),
            }),
        )
    };

    Ok(response)
}
