use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Serialize, Deserialize, Clone, Debug, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct SendOtpDto {
    pub phone_number: String,
}

#[derive(Serialize, Deserialize, Clone, Debug, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct VerifyOtpDto {
    pub phone_number: String,
    pub otp: String,
}

#[derive(Serialize, Deserialize, Clone, Debug, ToSchema)]
pub struct OtpResponseDto {
    pub success: bool,
    pub message: String,
}
