use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Invites::Table)
                    .if_not_exists()
                    .col(pk_auto(Invites::Id))
                    .col(string_uniq(Invites::Code))
                    .col(string(Invites::GuildId))
                    .col(string(Invites::ChannelId))
                    .col(string(Invites::ChannelName))
                    .col(string(Invites::PrimarySource))
                    .col(string(Invites::SecondarySource))
                    .col(string_null(Invites::Description))
                    .col(integer(Invites::Uses).default(0))
                    .col(integer_null(Invites::MaxUses))
                    .col(timestamp(Invites::CreatedAt))
                    .col(string(Invites::CreatedBy))
                    .to_owned(),
            )
            .await?;

        // Guild listings and top-N queries filter on guild_id
        manager
            .create_index(
                Index::create()
                    .name("idx_invites_guild")
                    .table(Invites::Table)
                    .col(Invites::GuildId)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_index(
                Index::drop()
                    .name("idx_invites_guild")
                    .table(Invites::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(Invites::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Invites {
    Table,
    Id,
    Code,
    GuildId,
    ChannelId,
    ChannelName,
    PrimarySource,
    SecondarySource,
    Description,
    Uses,
    MaxUses,
    CreatedAt,
    CreatedBy,
}
