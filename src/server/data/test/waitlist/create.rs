use super::*;
use crate::server::util::db::is_unique_violation;

/// Tests inserting a new waitlist entry.
///
/// Verifies that the entry is stored with the given fields, a generated ID, and
/// `checked_in` false.
///
/// Expected: Ok with entry persisted
#[tokio::test]
async fn creates_entry_not_checked_in() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Waitlist)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = WaitlistRepository::new(db);
    let entry = repo.create(create_param("555-0100"), Utc::now()).await?;

    assert!(!entry.id.is_empty());
    assert_eq!(entry.first_name, "Ann");
    assert_eq!(entry.phone, "555-0100");
    assert!(entry.sms_updates);
    assert!(!entry.checked_in);

    let stored = find_stored(db, &entry.id).await?.unwrap();
    assert_eq!(stored.phone, entry.phone);
    assert!(!stored.checked_in);

    Ok(())
}

/// Tests inserting a second entry with a phone already on the waitlist.
///
/// Expected: Err with a unique constraint violation, only one row stored
#[tokio::test]
async fn rejects_duplicate_phone() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Waitlist)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = WaitlistRepository::new(db);
    repo.create(create_param("555-0100"), Utc::now()).await?;

    let result = repo.create(create_param("555-0100"), Utc::now()).await;

    let err = result.unwrap_err();
    assert!(is_unique_violation(&err));
    assert_eq!(repo.get_all().await?.len(), 1);

    Ok(())
}
