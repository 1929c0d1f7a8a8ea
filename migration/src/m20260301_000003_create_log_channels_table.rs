use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(LogChannels::Table)
                    .if_not_exists()
                    .col(string(LogChannels::GuildId).primary_key())
                    .col(string(LogChannels::ChannelId))
                    .col(string(LogChannels::LogTypes).default("ALL"))
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(LogChannels::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum LogChannels {
    Table,
    GuildId,
    ChannelId,
    LogTypes,
}
