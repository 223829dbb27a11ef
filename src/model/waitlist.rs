use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct WaitlistEntryDto {
    pub id: String,
    pub first_name: String,
    pub last_initial: String,
    pub phone: String,
    pub game_type: String,
    pub sms_updates: bool,
    pub checked_in: bool,
    pub created_at: DateTime<Utc>,
}

#[derive(Serialize, Deserialize, Clone, Debug, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateWaitlistEntryDto {
    pub first_name: String,
    pub last_initial: String,
    pub phone: String,
    pub game_type: String,
    /// Defaults to `false` when omitted or null.
    #[serde(default)]
    pub sms_updates: Option<bool>,
}

/// Full replacement of an entry's identifying fields.
///
/// Any `smsUpdates` value sent by the client is ignored; updating an entry always
/// clears both its SMS opt-in and its check-in.
#[derive(Serialize, Deserialize, Clone, Debug, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdateWaitlistEntryDto {
    pub first_name: String,
    pub last_initial: String,
    pub phone: String,
    pub game_type: String,
}
