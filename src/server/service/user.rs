//! Phone-verified patrons.

use sea_orm::DatabaseConnection;

use crate::server::{
    data::user::UserRepository,
    error::AppError,
    model::user::{CreateUserParam, User},
    util::db::is_unique_violation,
};

pub struct UserService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> UserService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Checks whether a patron with this phone already verified.
    pub async fn exists(&self, phone: &str) -> Result<bool, AppError> {
        let repo = UserRepository::new(self.db);

        Ok(repo.exists_by_phone(phone).await?)
    }

    /// Saves a newly verified patron.
    ///
    /// # Returns
    /// - `Ok(User)` - The stored user
    /// - `Err(AppError::BadRequest)` - A required field is empty
    /// - `Err(AppError::Conflict)` - A user with this phone already exists
    pub async fn save(&self, param: CreateUserParam) -> Result<User, AppError> {
        let first_name = param.first_name.trim();
        let last_initial = param.last_initial.trim();

        if first_name.is_empty() || last_initial.is_empty() || param.phone.trim().is_empty() {
            return Err(AppError::BadRequest(
                "First name, last initial and phone are required".to_string(),
            ));
        }

        let repo = UserRepository::new(self.db);
        let result = repo
            .create(CreateUserParam {
                first_name: first_name.to_string(),
                last_initial: last_initial.to_uppercase(),
                phone: param.phone,
                sms_updates: param.sms_updates,
            })
            .await;

        result.map_err(|err| {
            if is_unique_violation(&err) {
                AppError::Conflict("User already exists".to_string())
            } else {
                AppError::DbErr(err)
            }
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_utils::builder::TestBuilder;

    fn param() -> CreateUserParam {
        CreateUserParam {
            first_name: "Ann".to_string(),
            last_initial: "b".to_string(),
            phone: "+15550100".to_string(),
            sms_updates: false,
        }
    }

    #[tokio::test]
    async fn test_save_then_exists() {
        let test = TestBuilder::new()
            .with_table(entity::prelude::User)
            .build()
            .await
            .unwrap();
        let service = UserService::new(test.db.as_ref().unwrap());

        assert!(!service.exists("+15550100").await.unwrap());

        let user = service.save(param()).await.unwrap();

        assert_eq!(user.last_initial, "B");
        assert!(service.exists("+15550100").await.unwrap());
    }

    #[tokio::test]
    async fn test_save_duplicate_phone_is_conflict() {
        let test = TestBuilder::new()
            .with_table(entity::prelude::User)
            .build()
            .await
            .unwrap();
        let service = UserService::new(test.db.as_ref().unwrap());

        service.save(param()).await.unwrap();
        let result = service.save(param()).await;

        assert!(matches!(result, Err(AppError::Conflict(_))));
    }
}
