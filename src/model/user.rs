use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Serialize, Deserialize, Clone, Debug, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateUserDto {
    pub first_name: String,
    pub last_initial: String,
    pub phone: String,
    #[serde(default)]
    pub sms_updates: Option<bool>,
}

#[derive(Serialize, Deserialize, Clone, Debug, ToSchema)]
pub struct UserExistsDto {
    pub user: bool,
}
