use super::*;

/// Tests clearing both flags on an entry.
///
/// Expected: Ok(Some) with both flags false and other fields untouched
#[tokio::test]
async fn clears_both_flags() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Waitlist)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let existing = factory::waitlist::WaitlistEntryFactory::new(db)
        .first_name("Eve")
        .sms_updates(true)
        .checked_in(true)
        .build()
        .await?;

    let repo = WaitlistRepository::new(db);
    let entry = repo.reset_flags(&existing.id).await?.unwrap();

    assert!(!entry.sms_updates);
    assert!(!entry.checked_in);
    assert_eq!(entry.first_name, "Eve");
    assert_eq!(entry.phone, existing.phone);

    Ok(())
}

/// Tests resetting an unknown ID.
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

    assert!(repo.reset_flags("missing").await?.is_none());

    Ok(())
}
