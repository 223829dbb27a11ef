use super::*;

/// Tests replacing a schedule's fields and games.
///
/// Verifies that the old games are removed and only the new list remains.
///
/// Expected: Ok(Some) with the new fields and exactly the new games
#[tokio::test]
async fn replaces_fields_and_games() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_schedule_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (existing, _) = factory::schedule::ScheduleFactory::new(db)
        .game("NLH", "1/2")
        .game("NLH", "2/5")
        .build()
        .await?;

    let repo = ScheduleRepository::new(db);
    let schedule = repo
        .update(&existing.id, save_param("Saturday", &[("PLO", "5/10")]))
        .await?
        .unwrap();

    assert_eq!(schedule.day, "Saturday");
    assert_eq!(schedule.games.len(), 1);
    assert_eq!(schedule.games[0].game_type, "PLO");

    let all_games = repo.get_all_games().await?;
    assert_eq!(all_games.len(), 1);
    assert_eq!(all_games[0].limit, "5/10");

    Ok(())
}

/// Tests that updating one schedule leaves another schedule's games alone.
///
/// Expected: Ok(Some), other schedule still has its game
#[tokio::test]
async fn leaves_other_schedules_untouched() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_schedule_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (first, _) = factory::create_schedule(db).await?;
    let (second, _) = factory::create_schedule(db).await?;

    let repo = ScheduleRepository::new(db);
    repo.update(&first.id, save_param("Sunday", &[])).await?;

    let other = repo.find_by_id(&second.id).await?.unwrap();
    assert_eq!(other.games.len(), 1);

    Ok(())
}

/// Tests updating an unknown schedule.
///
/// Expected: Ok(None) and no games inserted
#[tokio::test]
async fn returns_none_for_unknown_id() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_schedule_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = ScheduleRepository::new(db);
    let result = repo
        .update("missing", save_param("Sunday", &[("NLH", "1/2")]))
        .await?;

    assert!(result.is_none());
    assert!(repo.get_all_games().await?.is_empty());

    Ok(())
}
