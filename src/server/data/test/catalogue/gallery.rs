use super::*;
use crate::server::{data::gallery::GalleryRepository, model::gallery::SaveGalleryItemParam};

fn param(title: &str) -> SaveGalleryItemParam {
    SaveGalleryItemParam {
        title: title.to_string(),
        description: None,
        image: "http://localhost:3000/uploads/image-1-2.png".to_string(),
    }
}

/// Tests the create, update, delete lifecycle of a gallery item.
///
/// Expected: each step reflected in the stored rows
#[tokio::test]
async fn create_update_delete() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Gallery)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = GalleryRepository::new(db);
    let item = repo.create(param("Final table")).await?;
    assert_eq!(repo.get_all().await?.len(), 1);

    let updated = repo
        .update(
            &item.id,
            SaveGalleryItemParam {
                description: Some("Heads up".to_string()),
                ..param("Champion")
            },
        )
        .await?
        .unwrap();
    assert_eq!(updated.title, "Champion");
    assert_eq!(updated.description.as_deref(), Some("Heads up"));
    assert_eq!(updated.created_at, item.created_at);

    assert!(repo.delete(&item.id).await?);
    assert!(repo.get_all().await?.is_empty());

    Ok(())
}

/// Tests update and delete against an unknown ID.
///
/// Expected: Ok(None) and Ok(false)
#[tokio::test]
async fn unknown_id_is_reported() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Gallery)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = GalleryRepository::new(db);

    assert!(repo.update("missing", param("x")).await?.is_none());
    assert!(!repo.delete("missing").await?);

    Ok(())
}
