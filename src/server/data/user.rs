//! Verified user data repository.
//!
//! Users are patrons who completed phone verification; the front end looks them up by
//! phone to skip the OTP step on later visits.

use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    PaginatorTrait, QueryFilter,
};

use crate::server::model::user::{CreateUserParam, User};

pub struct UserRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> UserRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Inserts a verified user.
    ///
    /// # Returns
    /// - `Ok(User)` - The created user
    /// - `Err(DbErr)` - Database error, including a unique violation on `phone`
    pub async fn create(&self, param: CreateUserParam) -> Result<User, DbErr> {
        let entity = entity::user::ActiveModel {
            id: ActiveValue::Set(uuid::Uuid::new_v4().to_string()),
            first_name: ActiveValue::Set(param.first_name),
            last_initial: ActiveValue::Set(param.last_initial),
            phone: ActiveValue::Set(param.phone),
            sms_updates: ActiveValue::Set(param.sms_updates),
        }
        .insert(self.db)
        .await?;

        Ok(User::from_entity(entity))
    }

    /// Checks whether a user with the given phone number exists.
    pub async fn exists_by_phone(&self, phone: &str) -> Result<bool, DbErr> {
        let count = entity::prelude::User::find()
            .filter(entity::user::Column::Phone.eq(phone))
            .count(self.db)
            .await?;

        Ok(count > 0)
    }
}
