use super::*;

/// Tests checking in an existing entry.
///
/// Expected: Ok(Some) with `checked_in` true and other fields untouched
#[tokio::test]
async fn marks_entry_checked_in() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Waitlist)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let existing = factory::waitlist::WaitlistEntryFactory::new(db)
        .sms_updates(true)
        .build()
        .await?;

    let repo = WaitlistRepository::new(db);
    let entry = repo.check_in(&existing.id).await?.unwrap();

    assert!(entry.checked_in);
    assert!(entry.sms_updates);
    assert_eq!(entry.phone, existing.phone);
    assert_eq!(entry.created_at, existing.created_at);

    Ok(())
}

/// Tests that checking in twice is idempotent.
///
/// Expected: Ok(Some) with `checked_in` still true
#[tokio::test]
async fn check_in_is_idempotent() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Waitlist)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let existing = factory::waitlist::WaitlistEntryFactory::new(db)
        .checked_in(true)
        .build()
        .await?;

    let repo = WaitlistRepository::new(db);
    let entry = repo.check_in(&existing.id).await?.unwrap();

    assert!(entry.checked_in);

    Ok(())
}

/// Tests checking in an unknown ID.
///
/// Expected: Ok(None)
#[tokio::test]
async fn returns_none_for_unknown_id() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Waitlist)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = WaitlistRepository::new(db);
    let result = repo.check_in("missing").await?;

    assert!(result.is_none());

    Ok(())
}
