use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Waitlist::Table)
                    .if_not_exists()
                    .col(string(Waitlist::Id).primary_key())
                    .col(string(Waitlist::FirstName))
                    .col(string(Waitlist::LastInitial))
                    .col(string_uniq(Waitlist::Phone))
                    .col(string(Waitlist::GameType))
                    .col(boolean(Waitlist::SmsUpdates).default(false))
                    .col(boolean(Waitlist::CheckedIn).default(false))
                    .col(
                        timestamp_with_time_zone(Waitlist::CreatedAt)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .to_owned(),
            )
            .await?;

        // The sweep filters on both columns every minute
        manager
            .create_index(
                Index::create()
                    .name("idx_waitlist_checked_in_created_at")
                    .table(Waitlist::Table)
                    .col(Waitlist::CheckedIn)
                    .col(Waitlist::CreatedAt)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Waitlist::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Waitlist {
    Table,
    Id,
    FirstName,
    LastInitial,
    Phone,
    GameType,
    SmsUpdates,
    CheckedIn,
    CreatedAt,
}
