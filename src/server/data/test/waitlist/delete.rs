use super::*;

/// Tests deleting an existing entry.
///
/// Expected: Ok(true) and the entry is gone
#[tokio::test]
async fn deletes_existing_entry() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Waitlist)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let existing = factory::create_waitlist_entry(db).await?;

    let repo = WaitlistRepository::new(db);

    assert!(repo.delete(&existing.id).await?);
    assert!(find_stored(db, &existing.id).await?.is_none());

    Ok(())
}

/// Tests deleting an unknown ID.
///
/// Expected: Ok(false) and other entries untouched
#[tokio::test]
async fn returns_false_for_unknown_id() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Waitlist)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::create_waitlist_entry(db).await?;

    let repo = WaitlistRepository::new(db);

    assert!(!repo.delete("missing").await?);
    assert_eq!(repo.get_all().await?.len(), 1);

    Ok(())
}
