use sea_orm::DatabaseConnection;

use crate::server::{
    data::gallery::GalleryRepository,
    error::AppError,
    model::gallery::{GalleryForm, GalleryImage, GalleryItem, SaveGalleryItemParam},
    util::upload::UploadStore,
};

pub struct GalleryService<'a> {
    db: &'a DatabaseConnection,
    uploads: &'a UploadStore,
}

impl<'a> GalleryService<'a> {
    pub fn new(db: &'a DatabaseConnection, uploads: &'a UploadStore) -> Self {
        Self { db, uploads }
    }

    /// Gets every gallery item
    pub async fn list(&self) -> Result<Vec<GalleryItem>, AppError> {
        let repo = GalleryRepository::new(self.db);

        Ok(repo.get_all().await?)
    }

    /// Stores the uploaded image and creates a gallery item pointing at it
    ///
    /// A new item always requires a file upload. The stored file is removed again if
    /// the insert fails.
    pub async fn create(&self, form: GalleryForm) -> Result<GalleryItem, AppError> {
        let Some(GalleryImage::Upload { file_name, bytes }) = form.image else {
            return Err(AppError::BadRequest("No image uploaded".to_string()));
        };

        let image = self.uploads.save(&file_name, &bytes).await?;

        let repo = GalleryRepository::new(self.db);
        let result = repo
            .create(SaveGalleryItemParam {
                title: form.title,
                description: form.description,
                image: image.clone(),
            })
            .await;

        if result.is_err() {
            self.uploads.discard(&image).await;
        }

        Ok(result?)
    }

    /// Updates a gallery item
    ///
    /// An uploaded file takes precedence over an image URL sent as a text field. A file
    /// stored for an update that does not land is removed again.
    pub async fn update(&self, id: &str, form: GalleryForm) -> Result<GalleryItem, AppError> {
        let repo = GalleryRepository::new(self.db);

        if repo.find_by_id(id).await?.is_none() {
            return Err(not_found());
        }

        let (image, uploaded) = match form.image {
            Some(GalleryImage::Upload { file_name, bytes }) => {
                (self.uploads.save(&file_name, &bytes).await?, true)
            }
            Some(GalleryImage::Url(url)) => (url, false),
            None => return Err(AppError::BadRequest("No image provided".to_string())),
        };

        let result = repo
            .update(
                id,
                SaveGalleryItemParam {
                    title: form.title,
                    description: form.description,
                    image: image.clone(),
                },
            )
            .await;

        if uploaded && !matches!(result, Ok(Some(_))) {
            self.uploads.discard(&image).await;
        }

        result?.ok_or_else(not_found)
    }

    /// Deletes a gallery item
    pub async fn delete(&self, id: &str) -> Result<(), AppError> {
        let repo = GalleryRepository::new(self.db);

        if !repo.delete(id).await? {
            return Err(not_found());
        }

        Ok(())
    }
}

fn not_found() -> AppError {
    AppError::NotFound("Gallery item not found".to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_utils::builder::TestBuilder;

    fn store() -> UploadStore {
        UploadStore::new(std::env::temp_dir(), "http://club.test")
    }

    #[tokio::test]
    async fn test_create_requires_file() {
        let test = TestBuilder::new()
            .with_table(entity::prelude::Gallery)
            .build()
            .await
            .unwrap();
        let uploads = store();
        let service = GalleryService::new(test.db.as_ref().unwrap(), &uploads);

        let result = service
            .create(GalleryForm {
                title: "Night".to_string(),
                description: None,
                image: Some(GalleryImage::Url("http://elsewhere/x.png".to_string())),
            })
            .await;

        match result {
            Err(AppError::BadRequest(msg)) => assert_eq!(msg, "No image uploaded"),
            other => panic!("expected bad request, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_update_with_url_and_without_image() {
        let test = TestBuilder::new()
            .with_table(entity::prelude::Gallery)
            .build()
            .await
            .unwrap();
        let db = test.db.as_ref().unwrap();
        let uploads = store();
        let service = GalleryService::new(db, &uploads);
        let item = GalleryRepository::new(db)
            .create(SaveGalleryItemParam {
                title: "Night".to_string(),
                description: None,
                image: "http://club.test/uploads/a.png".to_string(),
            })
            .await
            .unwrap();

        let updated = service
            .update(
                &item.id,
                GalleryForm {
                    title: "Day".to_string(),
                    description: Some("Sunny".to_string()),
                    image: Some(GalleryImage::Url("http://club.test/uploads/b.png".to_string())),
                },
            )
            .await
            .unwrap();
        assert_eq!(updated.title, "Day");
        assert_eq!(updated.image, "http://club.test/uploads/b.png");

        let result = service
            .update(
                &item.id,
                GalleryForm {
                    title: "Day".to_string(),
                    ..Default::default()
                },
            )
            .await;
        match result {
            Err(AppError::BadRequest(msg)) => assert_eq!(msg, "No image provided"),
            other => panic!("expected bad request, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_failed_insert_discards_upload() {
        // No gallery table, so the insert fails after the file is written.
        let test = TestBuilder::new()
            .with_table(entity::prelude::Game)
            .build()
            .await
            .unwrap();
        let dir = std::env::temp_dir().join(format!("gallery-{}", uuid::Uuid::new_v4()));
        tokio::fs::create_dir_all(&dir).await.unwrap();
        let uploads = UploadStore::new(&dir, "http://club.test");
        let service = GalleryService::new(test.db.as_ref().unwrap(), &uploads);

        let result = service
            .create(GalleryForm {
                title: "Night".to_string(),
                description: None,
                image: Some(GalleryImage::Upload {
                    file_name: "night.png".to_string(),
                    bytes: b"png".to_vec(),
                }),
            })
            .await;

        assert!(matches!(result, Err(AppError::DbErr(_))));
        let mut entries = tokio::fs::read_dir(&dir).await.unwrap();
        assert!(entries.next_entry().await.unwrap().is_none());

        tokio::fs::remove_dir_all(&dir).await.unwrap();
    }

    #[tokio::test]
    async fn test_update_unknown_id_is_not_found() {
        let test = TestBuilder::new()
            .with_table(entity::prelude::Gallery)
            .build()
            .await
            .unwrap();
        let uploads = store();
        let service = GalleryService::new(test.db.as_ref().unwrap(), &uploads);

        let result = service
            .update(
                "missing",
                GalleryForm {
                    title: "Day".to_string(),
                    description: None,
                    image: Some(GalleryImage::Url("http://x/y.png".to_string())),
                },
            )
            .await;

        assert!(matches!(result, Err(AppError::NotFound(_))));
    }
}
