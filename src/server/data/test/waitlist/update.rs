use super::*;
use crate::server::util::db::is_unique_violation;

fn update_param(id: &str, phone: &str) -> UpdateWaitlistEntryParam {
    UpdateWaitlistEntryParam {
        id: id.to_string(),
        first_name: "Cara".to_string(),
        last_initial: "D".to_string(),
        phone: phone.to_string(),
        game_type: "PLO".to_string(),
    }
}

/// Tests updating an entry's fields.
///
/// Verifies that the new fields are stored and that both flags are cleared even when
/// they were set before the update.
///
/// Expected: Ok(Some) with new fields and both flags false
#[tokio::test]
async fn replaces_fields_and_clears_flags() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Waitlist)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let existing = factory::waitlist::WaitlistEntryFactory::new(db)
        .sms_updates(true)
        .checked_in(true)
        .build()
        .await?;

    let repo = WaitlistRepository::new(db);
    let entry = repo
        .update(update_param(&existing.id, "555-0200"))
        .await?
        .unwrap();

    assert_eq!(entry.first_name, "Cara");
    assert_eq!(entry.last_initial, "D");
    assert_eq!(entry.phone, "555-0200");
    assert_eq!(entry.game_type, "PLO");
    assert!(!entry.sms_updates);
    assert!(!entry.checked_in);
    assert_eq!(entry.created_at, existing.created_at);

    Ok(())
}

/// Tests updating an unknown ID.
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
    let result = repo.update(update_param("missing", "555-0200")).await?;

    assert!(result.is_none());

    Ok(())
}

/// Tests updating an entry to a phone that belongs to another entry.
///
/// Expected: Err with a unique constraint violation, original row unchanged
#[tokio::test]
async fn rejects_phone_of_other_entry() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Waitlist)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let first = factory::waitlist::WaitlistEntryFactory::new(db)
        .phone("555-0001")
        .build()
        .await?;
    factory::waitlist::WaitlistEntryFactory::new(db)
        .phone("555-0002")
        .build()
        .await?;

    let repo = WaitlistRepository::new(db);
    let result = repo.update(update_param(&first.id, "555-0002")).await;

    assert!(is_unique_violation(&result.unwrap_err()));
    let stored = find_stored(db, &first.id).await?.unwrap();
    assert_eq!(stored.phone, "555-0001");

    Ok(())
}
