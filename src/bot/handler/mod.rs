use serenity::all::{
    Context, EventHandler, Guild, Interaction, InviteCreateEvent, InviteDeleteEvent, Member,
    Ready,
};
use serenity::async_trait;

use crate::state::BotState;

pub mod guild;
pub mod interaction;
pub mod invite;
pub mod member;
pub mod ready;

/// Discord bot event handler
pub struct Handler {
    pub state: BotState,
}

impl Handler {
    pub fn new(state: BotState) -> Self {
        Self { state }
    }
}

#[async_trait]
impl EventHandler for Handler {
    /// Called when the bot is ready and connected to Discord
    async fn ready(&self, ctx: Context, ready: Ready) {
        ready::handle_ready(&self.state, ctx, ready).await;
    }

    /// Called when a guild becomes available or the bot joins a new guild
    async fn guild_create(&self, ctx: Context, guild: Guild, is_new: Option<bool>) {
        guild::handle_guild_create(&self.state, ctx, guild, is_new).await;
    }

    /// Called when a member joins a guild
    async fn guild_member_addition(&self, ctx: Context, new_member: Member) {
        member::handle_guild_member_addition(&self.state, ctx, new_member).await;
    }

    /// Called when an invite is created anywhere in a guild
    async fn invite_create(&self, ctx: Context, data: InviteCreateEvent) {
        invite::handle_invite_create(&self.state, ctx, data).await;
    }

    /// Called when an invite is deleted or expires
    async fn invite_delete(&self, ctx: Context, data: InviteDeleteEvent) {
        invite::handle_invite_delete(&self.state, ctx, data).await;
    }

    /// Called for slash commands and autocomplete requests
    async fn interaction_create(&self, ctx: Context, interaction: Interaction) {
        interaction::handle_interaction(&self.state, ctx, interaction).await;
    }
}
