//! Verified user factory.

use crate::factory::helpers::{new_uuid, next_id};
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

pub struct UserFactory<'a> {
    db: &'a DatabaseConnection,
    first_name: String,
    last_initial: String,
    phone: String,
    sms_updates: bool,
}

impl<'a> UserFactory<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        let id = next_id();
        Self {
            db,
            first_name: format!("Patron {}", id),
            last_initial: "Q".to_string(),
            phone: format!("+1555{:07}", id),
            sms_updates: false,
        }
    }

    pub fn phone(mut self, phone: impl Into<String>) -> Self {
        self.phone = phone.into();
        self
    }

    pub fn sms_updates(mut self, sms_updates: bool) -> Self {
        self.sms_updates = sms_updates;
        self
    }

    pub async fn build(self) -> Result<entity::user::Model, DbErr> {
        entity::user::ActiveModel {
            id: ActiveValue::Set(new_uuid()),
            first_name: ActiveValue::Set(self.first_name),
            last_initial: ActiveValue::Set(self.last_initial),
            phone: ActiveValue::Set(self.phone),
            sms_updates: ActiveValue::Set(self.sms_updates),
        }
        .insert(self.db)
        .await
    }
}

pub async fn create_user(db: &DatabaseConnection) -> Result<entity::user::Model, DbErr> {
    UserFactory::new(db).build().await
}
