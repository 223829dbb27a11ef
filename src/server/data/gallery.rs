//! Gallery data repository.

use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr, EntityTrait};

use crate::server::{
    model::gallery::{GalleryItem, SaveGalleryItemParam},
    util::db::updated_or_none,
};

pub struct GalleryRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> GalleryRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Gets every gallery item.
    pub async fn get_all(&self) -> Result<Vec<GalleryItem>, DbErr> {
        let entities = entity::prelude::Gallery::find().all(self.db).await?;

        Ok(entities.into_iter().map(GalleryItem::from_entity).collect())
    }

    /// Finds a gallery item by ID.
    pub async fn find_by_id(&self, id: &str) -> Result<Option<GalleryItem>, DbErr> {
        let entity = entity::prelude::Gallery::find_by_id(id.to_string())
            .one(self.db)
            .await?;

        Ok(entity.map(GalleryItem::from_entity))
    }

    /// Inserts a new gallery item.
    pub async fn create(&self, param: SaveGalleryItemParam) -> Result<GalleryItem, DbErr> {
        let entity = entity::gallery::ActiveModel {
            id: ActiveValue::Set(uuid::Uuid::new_v4().to_string()),
            title: ActiveValue::Set(param.title),
            description: ActiveValue::Set(param.description),
            image: ActiveValue::Set(param.image),
            created_at: ActiveValue::Set(Utc::now()),
        }
        .insert(self.db)
        .await?;

        Ok(GalleryItem::from_entity(entity))
    }

    /// Replaces a gallery item's title, description and image.
    ///
    /// # Returns
    /// - `Ok(Some(GalleryItem))` - The updated item
    /// - `Ok(None)` - No item with that ID
    pub async fn update(
        &self,
        id: &str,
        param: SaveGalleryItemParam,
    ) -> Result<Option<GalleryItem>, DbErr> {
        let Some(entity) = entity::prelude::Gallery::find_by_id(id.to_string())
            .one(self.db)
            .await?
        else {
            return Ok(None);
        };

        let mut active_model: entity::gallery::ActiveModel = entity.into();
        active_model.title = ActiveValue::Set(param.title);
        active_model.description = ActiveValue::Set(param.description);
        active_model.image = ActiveValue::Set(param.image);

        let updated = updated_or_none(active_model.update(self.db).await)?;

        Ok(updated.map(GalleryItem::from_entity))
    }

    /// Deletes a gallery item, returning whether a row was removed.
    pub async fn delete(&self, id: &str) -> Result<bool, DbErr> {
        let result = entity::prelude::Gallery::delete_by_id(id.to_string())
            .exec(self.db)
            .await?;

        Ok(result.rows_affected > 0)
    }
}
