//! Create `market` table.
//!
//! One row per classified ad. `id` and `creation_time` are assigned by the
//! store; `owner` is capped at 255 characters by the column type.
use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Market::Table)
                    .if_not_exists()
                    .col(pk_auto(Market::Id))
                    .col(string(Market::Title).not_null())
                    .col(text(Market::Description).not_null())
                    .col(
                        timestamp_with_time_zone(Market::CreationTime)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .col(string_len(Market::Owner, 255).not_null())
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager.drop_table(Table::drop().table(Market::Table).to_owned()).await
    }
}

#[derive(DeriveIden)]
pub(crate) enum Market {
    Table,
    Id,
    Title,
    Description,
    CreationTime,
    Owner,
}
