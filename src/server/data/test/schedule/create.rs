use super::*;

/// Tests creating a schedule with games.
///
/// Expected: Ok with the schedule and both games persisted under its ID
#[tokio::test]
async fn creates_schedule_with_games() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_schedule_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = ScheduleRepository::new(db);
    let schedule = repo
        .create(save_param("Friday", &[("NLH", "1/2"), ("PLO", "2/5")]))
        .await?;

    assert_eq!(schedule.day, "Friday");
    assert_eq!(schedule.games.len(), 2);
    assert!(schedule.games.iter().all(|g| g.schedule_id == schedule.id));

    let stored = repo.find_by_id(&schedule.id).await?.unwrap();
    assert_eq!(stored.games.len(), 2);

    Ok(())
}

/// Tests creating a schedule without games.
///
/// Expected: Ok with an empty game list
#[tokio::test]
async fn creates_schedule_without_games() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_schedule_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = ScheduleRepository::new(db);
    let schedule = repo.create(save_param("Monday", &[])).await?;

    assert!(schedule.games.is_empty());
    assert!(repo.get_all_games().await?.is_empty());

    Ok(())
}
