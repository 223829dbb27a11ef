use super::*;

/// Tests that every schedule is returned with its own games embedded.
///
/// Expected: Ok with two schedules, each carrying only its own games
#[tokio::test]
async fn embeds_games_per_schedule() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_schedule_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (friday, _) = factory::schedule::ScheduleFactory::new(db)
        .day("Friday")
        .game("NLH", "1/2")
        .game("PLO", "1/2")
        .build()
        .await?;
    factory::schedule::ScheduleFactory::new(db)
        .day("Tuesday")
        .build()
        .await?;

    let repo = ScheduleRepository::new(db);
    let schedules = repo.get_all().await?;

    assert_eq!(schedules.len(), 2);
    let stored_friday = schedules.iter().find(|s| s.id == friday.id).unwrap();
    assert_eq!(stored_friday.games.len(), 2);
    let stored_tuesday = schedules.iter().find(|s| s.day == "Tuesday").unwrap();
    assert!(stored_tuesday.games.is_empty());

    Ok(())
}
