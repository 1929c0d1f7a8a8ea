use serenity::{
    all::{GuildId, Http},
    async_trait,
};

use crate::{error::AppError, model::snapshot::InviteCount};

/// Source of a guild's current invite list with use counts.
///
/// Implemented for serenity's `Http` client; tests provide in-memory fakes.
#[async_trait]
pub trait InviteSource: Send + Sync {
    /// Lists every invite of the guild in the platform's order.
    async fn list_guild_invites(&self, guild_id: u64) -> Result<Vec<InviteCount>, AppError>;
}

#[async_trait]
impl InviteSource for Http {
    async fn list_guild_invites(&self, guild_id: u64) -> Result<Vec<InviteCount>, AppError> {
        let invites = self.get_guild_invites(GuildId::new(guild_id)).await?;

        Ok(invites.iter().map(InviteCount::from_rich_invite).collect())
    }
}
