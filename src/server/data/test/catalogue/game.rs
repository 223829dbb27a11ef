use super::*;
use crate::server::{data::game::GameRepository, model::game::SaveGameParam};

fn param(game_type: &str, limit: &str) -> SaveGameParam {
    SaveGameParam {
        game_type: game_type.to_string(),
        limit: limit.to_string(),
    }
}

/// Tests the create, update, delete lifecycle of a catalogue game.
///
/// Expected: each step reflected in the stored rows
#[tokio::test]
async fn create_update_delete() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Game)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = GameRepository::new(db);
    let game = repo.create(param("NLH", "1/2")).await?;

    let updated = repo
        .update(&game.id, param("PLO", "2/5"))
        .await?
        .unwrap();
    assert_eq!(updated.game_type, "PLO");
    assert_eq!(updated.limit, "2/5");
    assert_eq!(repo.get_all().await?, vec![updated]);

    assert!(repo.delete(&game.id).await?);
    assert!(!repo.delete(&game.id).await?);

    Ok(())
}

/// Tests updating an unknown game.
///
/// Expected: Ok(None)
#[tokio::test]
async fn update_returns_none_for_unknown_id() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Game)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = GameRepository::new(db);

    assert!(repo.update("missing", param("NLH", "1/2")).await?.is_none());

    Ok(())
}
