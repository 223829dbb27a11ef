use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr, EntityTrait};

use crate::server::{
    model::review::{Review, SaveReviewParam},
    util::db::updated_or_none,
};

pub struct ReviewRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> ReviewRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Gets every review
    pub async fn get_all(&self) -> Result<Vec<Review>, DbErr> {
        let entities = entity::prelude::Review::find().all(self.db).await?;

        Ok(entities.into_iter().map(Review::from_entity).collect())
    }

    /// Creates a new review
    pub async fn create(&self, param: SaveReviewParam) -> Result<Review, DbErr> {
        let entity = entity::review::ActiveModel {
            id: ActiveValue::Set(uuid::Uuid::new_v4().to_string()),
            name: ActiveValue::Set(param.name),
            review: ActiveValue::Set(param.review),
            rating: ActiveValue::Set(param.rating),
            created_at: ActiveValue::Set(Utc::now()),
        }
        .insert(self.db)
        .await?;

        Ok(Review::from_entity(entity))
    }

    /// Updates a review, `None` if it doesn't exist
    pub async fn update(&self, id: &str, param: SaveReviewParam) -> Result<Option<Review>, DbErr> {
        let Some(entity) = entity::prelude::Review::find_by_id(id.to_string())
            .one(self.db)
            .await?
        else {
            return Ok(None);
        };

        let mut active_model: entity::review::ActiveModel = entity.into();
        active_model.name = ActiveValue::Set(param.name);
        active_model.review = ActiveValue::Set(param.review);
        active_model.rating = ActiveValue::Set(param.rating);

        let updated = updated_or_none(active_model.update(self.db).await)?;

        Ok(updated.map(Review::from_entity))
    }

    /// Deletes a review, returns false if it didn't exist
    pub async fn delete(&self, id: &str) -> Result<bool, DbErr> {
        let result = entity::prelude::Review::delete_by_id(id.to_string())
            .exec(self.db)
            .await?;

        Ok(result.rows_affected > 0)
    }
}
