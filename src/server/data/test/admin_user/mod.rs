use crate::server::{
    data::admin_user::AdminUserRepository, model::admin_user::CreateAdminUserParam,
    util::db::is_unique_violation,
};
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

/// Tests creating an admin and finding them again by email and ID.
///
/// Expected: Ok with the same admin returned by both lookups
#[tokio::test]
async fn creates_and_finds_admin() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::AdminUser)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = AdminUserRepository::new(db);
    let admin = repo
        .create(CreateAdminUserParam {
            name: "Dealer".to_string(),
            email: "dealer@club.test".to_string(),
            password_hash: "hash".to_string(),
        })
        .await?;

    let by_email = repo.find_by_email("dealer@club.test").await?;
    let by_id = repo.find_by_id(&admin.id).await?;

    assert_eq!(by_email.as_ref(), Some(&admin));
    assert_eq!(by_id, Some(admin));

    Ok(())
}

/// Tests looking up an email nobody registered.
///
/// Expected: Ok(None)
#[tokio::test]
async fn returns_none_for_unknown_email() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::AdminUser)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::create_admin_user(db).await?;

    let repo = AdminUserRepository::new(db);

    assert!(repo.find_by_email("nobody@club.test").await?.is_none());

    Ok(())
}

/// Tests that the email column is unique.
///
/// Expected: Err with a unique constraint violation
#[tokio::test]
async fn rejects_duplicate_email() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::AdminUser)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let existing = factory::create_admin_user(db).await?;

    let repo = AdminUserRepository::new(db);
    let result = repo
        .create(CreateAdminUserParam {
            name: "Other".to_string(),
            email: existing.email,
            password_hash: "hash".to_string(),
        })
        .await;

    assert!(is_unique_violation(&result.unwrap_err()));

    Ok(())
}
