use sea_orm::DatabaseConnection;

use crate::server::{
    data::game::GameRepository,
    error::AppError,
    model::game::{Game, SaveGameParam},
};

pub struct GameService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> GameService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn list(&self) -> Result<Vec<Game>, AppError> {
        let repo = GameRepository::new(self.db);

        Ok(repo.get_all().await?)
    }

    pub async fn create(&self, param: SaveGameParam) -> Result<Game, AppError> {
        let repo = GameRepository::new(self.db);

        Ok(repo.create(param).await?)
    }

    pub async fn update(&self, id: &str, param: SaveGameParam) -> Result<Game, AppError> {
        let repo = GameRepository::new(self.db);

        repo.update(id, param).await?.ok_or_else(not_found)
    }

    pub async fn delete(&self, id: &str) -> Result<(), AppError> {
        let repo = GameRepository::new(self.db);

        if !repo.delete(id).await? {
            return Err(not_found());
        }

        Ok(())
    }
}

fn not_found() -> AppError {
    AppError::NotFound("Game not found".to_string())
}
