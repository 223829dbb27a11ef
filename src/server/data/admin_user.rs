//! Admin user data repository.

use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    QueryFilter,
};

use crate::server::model::admin_user::{AdminUser, CreateAdminUserParam};

/// Repository providing database operations for admin accounts.
pub struct AdminUserRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> AdminUserRepository<'a> {
    /// Creates a new AdminUserRepository instance.
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Inserts an admin whose password has already been hashed.
    ///
    /// # Returns
    /// - `Ok(AdminUser)` - The created admin
    /// - `Err(DbErr)` - Database error, including a unique violation on `email`
    pub async fn create(&self, param: CreateAdminUserParam) -> Result<AdminUser, DbErr> {
        let entity = entity::admin_user::ActiveModel {
            id: ActiveValue::Set(uuid::Uuid::new_v4().to_string()),
            name: ActiveValue::Set(param.name),
            email: ActiveValue::Set(param.email),
            password: ActiveValue::Set(param.password_hash),
        }
        .insert(self.db)
        .await?;

        Ok(AdminUser::from_entity(entity))
    }

    /// Finds an admin by email address.
    ///
    /// # Returns
    /// - `Ok(Some(AdminUser))` - Admin found
    /// - `Ok(None)` - No admin registered with that email
    /// - `Err(DbErr)` - Database error during query
    pub async fn find_by_email(&self, email: &str) -> Result<Option<AdminUser>, DbErr> {
        let entity = entity::prelude::AdminUser::find()
            .filter(entity::admin_user::Column::Email.eq(email))
            .one(self.db)
            .await?;

        Ok(entity.map(AdminUser::from_entity))
    }

    /// Finds an admin by ID.
    pub async fn find_by_id(&self, id: &str) -> Result<Option<AdminUser>, DbErr> {
        let entity = entity::prelude::AdminUser::find_by_id(id.to_string())
            .one(self.db)
            .await?;

        Ok(entity.map(AdminUser::from_entity))
    }
}
