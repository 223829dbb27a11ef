use super::*;

/// Tests that only stale, unconfirmed entries are removed.
///
/// Creates a stale unconfirmed entry, a stale checked-in entry and a fresh unconfirmed
/// entry, then deletes with a cutoff one hour in the past.
///
/// Expected: Ok(1), only the stale unconfirmed entry removed
#[tokio::test]
async fn deletes_only_stale_unconfirmed_entries() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Waitlist)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let now = Utc::now();
    let stale = factory::waitlist::WaitlistEntryFactory::new(db)
        .created_at(now - Duration::minutes(61))
        .build()
        .await?;
    let checked_in = factory::waitlist::WaitlistEntryFactory::new(db)
        .created_at(now - Duration::hours(3))
        .checked_in(true)
        .build()
        .await?;
    let fresh = factory::waitlist::WaitlistEntryFactory::new(db)
        .created_at(now - Duration::minutes(59))
        .build()
        .await?;

    let repo = WaitlistRepository::new(db);
    let deleted = repo
        .delete_unconfirmed_created_before(now - Duration::hours(1))
        .await?;

    assert_eq!(deleted, 1);
    assert!(find_stored(db, &stale.id).await?.is_none());
    assert!(find_stored(db, &checked_in.id).await?.is_some());
    assert!(find_stored(db, &fresh.id).await?.is_some());

    Ok(())
}

/// Tests that an entry created exactly at the cutoff is removed.
///
/// Expected: Ok(1)
#[tokio::test]
async fn cutoff_is_inclusive() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Waitlist)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let cutoff = Utc::now() - Duration::hours(1);
    factory::waitlist::WaitlistEntryFactory::new(db)
        .created_at(cutoff)
        .build()
        .await?;

    let repo = WaitlistRepository::new(db);

    assert_eq!(repo.delete_unconfirmed_created_before(cutoff).await?, 1);

    Ok(())
}

/// Tests deleting from an empty waitlist.
///
/// Expected: Ok(0)
#[tokio::test]
async fn returns_zero_when_nothing_matches() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Waitlist)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = WaitlistRepository::new(db);

    assert_eq!(
        repo.delete_unconfirmed_created_before(Utc::now()).await?,
        0
    );

    Ok(())
}
