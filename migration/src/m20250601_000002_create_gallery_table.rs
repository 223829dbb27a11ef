use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Gallery::Table)
                    .if_not_exists()
                    .col(string(Gallery::Id).primary_key())
                    .col(string(Gallery::Title))
                    .col(text_null(Gallery::Description))
                    .col(string(Gallery::Image))
                    .col(
                        timestamp_with_time_zone(Gallery::CreatedAt)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Gallery::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Gallery {
    Table,
    Id,
    Title,
    Description,
    Image,
    CreatedAt,
}
