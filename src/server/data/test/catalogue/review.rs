use super::*;
use crate::server::{data::review::ReviewRepository, model::review::SaveReviewParam};

/// Tests the create, update, delete lifecycle of a review.
///
/// Expected: each step reflected in the stored rows
#[tokio::test]
async fn create_update_delete() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Review)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = ReviewRepository::new(db);
    let review = repo
        .create(SaveReviewParam {
            name: "Sam".to_string(),
            review: "Great dealers".to_string(),
            rating: 5,
        })
        .await?;

    let updated = repo
        .update(
            &review.id,
            SaveReviewParam {
                name: "Sam".to_string(),
                review: "Good dealers".to_string(),
                rating: 4,
            },
        )
        .await?
        .unwrap();
    assert_eq!(updated.rating, 4);
    assert_eq!(updated.review, "Good dealers");

    assert!(repo.delete(&review.id).await?);
    assert!(repo.get_all().await?.is_empty());

    Ok(())
}
