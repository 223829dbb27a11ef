//! Admin user factory.
//!
//! The stored password is used verbatim; tests that need a verifiable bcrypt hash
//! should go through the auth service instead.

use crate::factory::helpers::{new_uuid, next_id};
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

pub struct AdminUserFactory<'a> {
    db: &'a DatabaseConnection,
    name: String,
    email: String,
    password: String,
}

impl<'a> AdminUserFactory<'a> {
    /// Defaults: name `"Admin {id}"`, email `"admin{id}@eliteclub.test"`.
    pub fn new(db: &'a DatabaseConnection) -> Self {
        let id = next_id();
        Self {
            db,
            name: format!("Admin {}", id),
            email: format!("admin{}@eliteclub.test", id),
            password: "not-a-hash".to_string(),
        }
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    pub fn email(mut self, email: impl Into<String>) -> Self {
        self.email = email.into();
        self
    }

    pub fn password(mut self, password: impl Into<String>) -> Self {
        self.password = password.into();
        self
    }

    pub async fn build(self) -> Result<entity::admin_user::Model, DbErr> {
        entity::admin_user::ActiveModel {
            id: ActiveValue::Set(new_uuid()),
            name: ActiveValue::Set(self.name),
            email: ActiveValue::Set(self.email),
            password: ActiveValue::Set(self.password),
        }
        .insert(self.db)
        .await
    }
}

pub async fn create_admin_user(
    db: &DatabaseConnection,
) -> Result<entity::admin_user::Model, DbErr> {
    AdminUserFactory::new(db).build().await
}
