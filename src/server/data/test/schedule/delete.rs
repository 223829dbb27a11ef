use super::*;

/// Tests deleting a schedule removes its games too.
///
/// Expected: Ok(true), schedule and games gone
#[tokio::test]
async fn deletes_schedule_and_games() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_schedule_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (existing, _) = factory::create_schedule(db).await?;

    let repo = ScheduleRepository::new(db);

    assert!(repo.delete(&existing.id).await?);
    assert!(repo.find_by_id(&existing.id).await?.is_none());
    assert!(repo.get_all_games().await?.is_empty());

    Ok(())
}

/// Tests deleting an unknown schedule.
///
/// Expected: Ok(false)
#[tokio::test]
async fn returns_false_for_unknown_id() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_schedule_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = ScheduleRepository::new(db);

    assert!(!repo.delete("missing").await?);

    Ok(())
}
