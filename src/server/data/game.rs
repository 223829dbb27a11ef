use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr, EntityTrait};

use crate::server::{
    model::game::{Game, SaveGameParam},
    util::db::updated_or_none,
};

pub struct GameRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> GameRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Gets every game in the catalogue
    pub async fn get_all(&self) -> Result<Vec<Game>, DbErr> {
        let entities = entity::prelude::Game::find().all(self.db).await?;

        Ok(entities.into_iter().map(Game::from_entity).collect())
    }

    /// Creates a new catalogue game
    pub async fn create(&self, param: SaveGameParam) -> Result<Game, DbErr> {
        let entity = entity::game::ActiveModel {
            id: ActiveValue::Set(uuid::Uuid::new_v4().to_string()),
            game_type: ActiveValue::Set(param.game_type),
            limit: ActiveValue::Set(param.limit),
        }
        .insert(self.db)
        .await?;

        Ok(Game::from_entity(entity))
    }

    /// Updates a game's type and limit, `None` if it doesn't exist
    pub async fn update(&self, id: &str, param: SaveGameParam) -> Result<Option<Game>, DbErr> {
        let Some(entity) = entity::prelude::Game::find_by_id(id.to_string())
            .one(self.db)
            .await?
        else {
            return Ok(None);
        };

        let mut active_model: entity::game::ActiveModel = entity.into();
        active_model.game_type = ActiveValue::Set(param.game_type);
        active_model.limit = ActiveValue::Set(param.limit);

        let updated = updated_or_none(active_model.update(self.db).await)?;

        Ok(updated.map(Game::from_entity))
    }

    /// Deletes a game, returns false if it didn't exist
    pub async fn delete(&self, id: &str) -> Result<bool, DbErr> {
        let result = entity::prelude::Game::delete_by_id(id.to_string())
            .exec(self.db)
            .await?;

        Ok(result.rows_affected > 0)
    }
}
