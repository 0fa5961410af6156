use sea_orm_migration::prelude::*;

use crate::m20240101_000001_create_market::Market;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_index(
                Index::create()
                    .name("idx_market_title")
                    .table(Market::Table)
                    .col(Market::Title)
                    .if_not_exists()
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_market_owner")
                    .table(Market::Table)
                    .col(Market::Owner)
                    .if_not_exists()
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_index(Index::drop().name("idx_market_owner").table(Market::Table).to_owned())
            .await?;
        manager
            .drop_index(Index::drop().name("idx_market_title").table(Market::Table).to_owned())
            .await
    }
}
