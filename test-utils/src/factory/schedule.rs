//! Schedule factory for creating schedules together with their games.

use crate::factory::helpers::{new_uuid, next_id};
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating schedules with an optional list of games.
///
/// # Example
///
/// ```rust,ignore
/// let (schedule, games) = ScheduleFactory::new(&db)
///     .day("Friday")
///     .game("PLO", "1/2")
///     .build()
///     .await?;
/// ```
pub struct ScheduleFactory<'a> {
    db: &'a DatabaseConnection,
    day: String,
    time: String,
    description: Option<String>,
    games: Vec<(String, String)>,
}

impl<'a> ScheduleFactory<'a> {
    /// Creates a new ScheduleFactory with default values and no games.
    pub fn new(db: &'a DatabaseConnection) -> Self {
        let id = next_id();
        Self {
            db,
            day: format!("Day {}", id),
            time: "7:00 PM".to_string(),
            description: None,
            games: Vec::new(),
        }
    }

    pub fn day(mut self, day: impl Into<String>) -> Self {
        self.day = day.into();
        self
    }

    pub fn time(mut self, time: impl Into<String>) -> Self {
        self.time = time.into();
        self
    }

    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Appends a game to be created under the schedule.
    pub fn game(mut self, game_type: impl Into<String>, limit: impl Into<String>) -> Self {
        self.games.push((game_type.into(), limit.into()));
        self
    }

    /// Builds and inserts the schedule and its games.
    ///
    /// # Returns
    /// - `Ok((schedule, games))` - Created schedule and game entities
    /// - `Err(DbErr)` - Database error during insert
    pub async fn build(
        self,
    ) -> Result<(entity::schedule::Model, Vec<entity::schedule_game::Model>), DbErr> {
        let schedule = entity::schedule::ActiveModel {
            id: ActiveValue::Set(new_uuid()),
            day: ActiveValue::Set(self.day),
            time: ActiveValue::Set(self.time),
            description: ActiveValue::Set(self.description),
        }
        .insert(self.db)
        .await?;

        let mut games = Vec::with_capacity(self.games.len());
        for (game_type, limit) in self.games {
            let game = entity::schedule_game::ActiveModel {
                id: ActiveValue::Set(new_uuid()),
                schedule_id: ActiveValue::Set(schedule.id.clone()),
                game_type: ActiveValue::Set(game_type),
                limit: ActiveValue::Set(limit),
            }
            .insert(self.db)
            .await?;
            games.push(game);
        }

        Ok((schedule, games))
    }
}

/// Creates a schedule with a single default game.
pub async fn create_schedule(
    db: &DatabaseConnection,
) -> Result<(entity::schedule::Model, Vec<entity::schedule_game::Model>), DbErr> {
    ScheduleFactory::new(db).game("NLH", "1/2").build().await
}
