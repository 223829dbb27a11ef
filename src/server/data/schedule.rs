//! Schedule data repository.
//!
//! A schedule and its games are always read together and written together. Create and
//! update run inside a single transaction so a failure part way through the game list
//! leaves the previous state untouched.

use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DatabaseTransaction, DbErr,
    EntityTrait, QueryFilter, TransactionTrait,
};

use crate::server::model::schedule::{
    SaveScheduleParam, Schedule, ScheduleGame, ScheduleGameParam,
};

/// Repository providing database operations for schedules and their games.
pub struct ScheduleRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> ScheduleRepository<'a> {
    /// Creates a new ScheduleRepository instance.
    ///
    /// # Arguments
    /// - `db` - Reference to the database connection
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Gets every schedule with its games embedded.
    ///
    /// # Returns
    /// - `Ok(Vec<Schedule>)` - All schedules, each carrying its full game list
    /// - `Err(DbErr)` - Database error during query
    pub async fn get_all(&self) -> Result<Vec<Schedule>, DbErr> {
        let rows = entity::prelude::Schedule::find()
            .find_with_related(entity::prelude::ScheduleGame)
            .all(self.db)
            .await?;

        Ok(rows
            .into_iter()
            .map(|(schedule, games)| Schedule::from_entity(schedule, games))
            .collect())
    }

    /// Gets every schedule game row across all schedules.
    pub async fn get_all_games(&self) -> Result<Vec<ScheduleGame>, DbErr> {
        let entities = entity::prelude::ScheduleGame::find().all(self.db).await?;

        Ok(entities.into_iter().map(ScheduleGame::from_entity).collect())
    }

    /// Finds a schedule by ID with its games embedded.
    ///
    /// # Returns
    /// - `Ok(Some(Schedule))` - Schedule found
    /// - `Ok(None)` - No schedule with that ID
    /// - `Err(DbErr)` - Database error during query
    pub async fn find_by_id(&self, id: &str) -> Result<Option<Schedule>, DbErr> {
        let rows = entity::prelude::Schedule::find_by_id(id.to_string())
            .find_with_related(entity::prelude::ScheduleGame)
            .all(self.db)
            .await?;

        Ok(rows
            .into_iter()
            .next()
            .map(|(schedule, games)| Schedule::from_entity(schedule, games)))
    }

    /// Creates a schedule together with its games.
    ///
    /// # Arguments
    /// - `param` - Schedule fields and the full game list
    ///
    /// # Returns
    /// - `Ok(Schedule)` - The created schedule with its games
    /// - `Err(DbErr)` - Database error; nothing is persisted
    pub async fn create(&self, param: SaveScheduleParam) -> Result<Schedule, DbErr> {
        let txn = self.db.begin().await?;

        let schedule = entity::schedule::ActiveModel {
            id: ActiveValue::Set(uuid::Uuid::new_v4().to_string()),
            day: ActiveValue::Set(param.day),
            time: ActiveValue::Set(param.time),
            description: ActiveValue::Set(param.description),
        }
        .insert(&txn)
        .await?;

        let games = Self::insert_games(&txn, &schedule.id, param.games).await?;

        txn.commit().await?;

        Ok(Schedule::from_entity(schedule, games))
    }

    /// Replaces a schedule's fields and its entire game list.
    ///
    /// Existing games are deleted and the supplied list inserted in their place.
    ///
    /// # Returns
    /// - `Ok(Some(Schedule))` - The updated schedule with its new games
    /// - `Ok(None)` - No schedule with that ID; nothing is modified
    /// - `Err(DbErr)` - Database error; the transaction is rolled back
    pub async fn update(
        &self,
        id: &str,
        param: SaveScheduleParam,
    ) -> Result<Option<Schedule>, DbErr> {
        let txn = self.db.begin().await?;

        let Some(existing) = entity::prelude::Schedule::find_by_id(id.to_string())
            .one(&txn)
            .await?
        else {
            txn.rollback().await?;
            return Ok(None);
        };

        let mut active_model: entity::schedule::ActiveModel = existing.into();
        active_model.day = ActiveValue::Set(param.day);
        active_model.time = ActiveValue::Set(param.time);
        active_model.description = ActiveValue::Set(param.description);
        let schedule = active_model.update(&txn).await?;

        entity::prelude::ScheduleGame::delete_many()
            .filter(entity::schedule_game::Column::ScheduleId.eq(id))
            .exec(&txn)
            .await?;

        let games = Self::insert_games(&txn, &schedule.id, param.games).await?;

        txn.commit().await?;

        Ok(Some(Schedule::from_entity(schedule, games)))
    }

    /// Deletes a schedule and its games.
    ///
    /// # Returns
    /// - `Ok(true)` - Schedule deleted
    /// - `Ok(false)` - No schedule with that ID
    /// - `Err(DbErr)` - Database error during delete
    pub async fn delete(&self, id: &str) -> Result<bool, DbErr> {
        let txn = self.db.begin().await?;

        entity::prelude::ScheduleGame::delete_many()
            .filter(entity::schedule_game::Column::ScheduleId.eq(id))
            .exec(&txn)
            .await?;

        let result = entity::prelude::Schedule::delete_by_id(id.to_string())
            .exec(&txn)
            .await?;

        txn.commit().await?;

        Ok(result.rows_affected > 0)
    }

    async fn insert_games(
        txn: &DatabaseTransaction,
        schedule_id: &str,
        games: Vec<ScheduleGameParam>,
    ) -> Result<Vec<entity::schedule_game::Model>, DbErr> {
        let mut inserted = Vec::with_capacity(games.len());

        for game in games {
            let model = entity::schedule_game::ActiveModel {
                id: ActiveValue::Set(uuid::Uuid::new_v4().to_string()),
                schedule_id: ActiveValue::Set(schedule_id.to_string()),
                game_type: ActiveValue::Set(game.game_type),
                limit: ActiveValue::Set(game.limit),
            }
            .insert(txn)
            .await?;

            inserted.push(model);
        }

        Ok(inserted)
    }
}
