use crate::server::{data::user::UserRepository, model::user::CreateUserParam};
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

/// Tests creating a verified user.
///
/// Expected: Ok with user persisted and discoverable by phone
#[tokio::test]
async fn creates_user() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = UserRepository::new(db);
    let user = repo
        .create(CreateUserParam {
            first_name: "Ann".to_string(),
            last_initial: "B".to_string(),
            phone: "+15550100".to_string(),
            sms_updates: true,
        })
        .await?;

    assert_eq!(user.phone, "+15550100");
    assert!(user.sms_updates);
    assert!(repo.exists_by_phone("+15550100").await?);

    Ok(())
}

/// Tests the phone existence check.
///
/// Expected: true for a stored phone, false for any other
#[tokio::test]
async fn checks_existence_by_phone() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::user::UserFactory::new(db)
        .phone("+15550111")
        .build()
        .await?;

    let repo = UserRepository::new(db);

    assert!(repo.exists_by_phone("+15550111").await?);
    assert!(!repo.exists_by_phone("+15550999").await?);

    Ok(())
}
