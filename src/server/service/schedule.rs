use sea_orm::DatabaseConnection;

use crate::server::{
    data::schedule::ScheduleRepository,
    error::AppError,
    model::schedule::{SaveScheduleParam, Schedule, ScheduleGame},
};

pub struct ScheduleService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> ScheduleService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Gets every schedule with its games
    pub async fn list(&self) -> Result<Vec<Schedule>, AppError> {
        let repo = ScheduleRepository::new(self.db);

        Ok(repo.get_all().await?)
    }

    /// Gets every game of every schedule as a flat list
    pub async fn list_games(&self) -> Result<Vec<ScheduleGame>, AppError> {
        let repo = ScheduleRepository::new(self.db);

        Ok(repo.get_all_games().await?)
    }

    /// Gets a single schedule with its games
    pub async fn get(&self, id: &str) -> Result<Schedule, AppError> {
        let repo = ScheduleRepository::new(self.db);

        repo.find_by_id(id).await?.ok_or_else(not_found)
    }

    /// Creates a schedule together with its games
    pub async fn create(&self, param: SaveScheduleParam) -> Result<Schedule, AppError> {
        let repo = ScheduleRepository::new(self.db);

        Ok(repo.create(param).await?)
    }

    /// Replaces a schedule and its full game list in one transaction
    pub async fn update(&self, id: &str, param: SaveScheduleParam) -> Result<Schedule, AppError> {
        let repo = ScheduleRepository::new(self.db);

        repo.update(id, param).await?.ok_or_else(not_found)
    }

    /// Deletes a schedule and its games
    pub async fn delete(&self, id: &str) -> Result<(), AppError> {
        let repo = ScheduleRepository::new(self.db);

        if !repo.delete(id).await? {
            return Err(not_found());
        }

        Ok(())
    }
}

fn not_found() -> AppError {
    AppError::NotFound("Schedule not found".to_string())
}
