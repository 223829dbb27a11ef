use sea_orm_migration::{prelude::*, schema::*};

use super::m20250601_000003_create_schedule_table::Schedule;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(ScheduleGame::Table)
                    .if_not_exists()
                    .col(string(ScheduleGame::Id).primary_key())
                    .col(string(ScheduleGame::ScheduleId))
                    .col(string(ScheduleGame::GameType))
                    .col(string(ScheduleGame::Limit))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_schedule_game_schedule_id")
                            .from(ScheduleGame::Table, ScheduleGame::ScheduleId)
                            .to(Schedule::Table, Schedule::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(ScheduleGame::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum ScheduleGame {
    Table,
    Id,
    ScheduleId,
    GameType,
    Limit,
}
