use sea_orm_migration::{prelude::*, schema::*};

use super::m20260301_000001_create_invites_table::Invites;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(InviteUses::Table)
                    .if_not_exists()
                    .col(pk_auto(InviteUses::Id))
                    .col(integer(InviteUses::InviteId))
                    .col(string(InviteUses::UserId))
                    .col(string(InviteUses::Username))
                    .col(timestamp(InviteUses::UsedAt))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_invite_uses_invite_id")
                            .from(InviteUses::Table, InviteUses::InviteId)
                            .to(Invites::Table, Invites::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_invite_uses_invite")
                    .table(InviteUses::Table)
                    .col(InviteUses::InviteId)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_index(
                Index::drop()
                    .name("idx_invite_uses_invite")
                    .table(InviteUses::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(InviteUses::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum InviteUses {
    Table,
    Id,
    InviteId,
    UserId,
    Username,
    UsedAt,
}
