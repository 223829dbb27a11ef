use crate::server::{
    data::waitlist::WaitlistRepository,
    model::waitlist::{CreateWaitlistEntryParam, UpdateWaitlistEntryParam},
};
use chrono::{Duration, Utc};
use sea_orm::{DatabaseConnection, DbErr, EntityTrait};
use test_utils::{builder::TestBuilder, factory};

mod check_in;
mod create;
mod delete;
mod delete_unconfirmed_created_before;
mod reset_flags;
mod update;

fn create_param(phone: &str) -> CreateWaitlistEntryParam {
    CreateWaitlistEntryParam {
        first_name: "Ann".to_string(),
        last_initial: "B".to_string(),
        phone: phone.to_string(),
        game_type: "NLH".to_string(),
        sms_updates: true,
    }
}

async fn find_stored(
    db: &DatabaseConnection,
    id: &str,
) -> Result<Option<entity::waitlist::Model>, DbErr> {
    entity::prelude::Waitlist::find_by_id(id.to_string())
        .one(db)
        .await
}
