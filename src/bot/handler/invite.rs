use serenity::all::{Context, InviteCreateEvent, InviteDeleteEvent};

use crate::state::BotState;

/// Handles the invite_create event
///
/// Every new invite is cached, including ones created outside the bot, so a join through
/// it can be diffed against a known starting count.
pub async fn handle_invite_create(state: &BotState, _ctx: Context, data: InviteCreateEvent) {
    let Some(guild_id) = data.guild_id else {
        return;
    };

    tracing::debug!("Invite {} created in guild {}", data.code, guild_id);

    state
        .invite_cache
        .record_created(guild_id.get(), data.code, data.uses)
        .await;
}

/// Handles the invite_delete event
pub async fn handle_invite_delete(state: &BotState, _ctx: Context, data: InviteDeleteEvent) {
    let Some(guild_id) = data.guild_id else {
        return;
    };

    tracing::debug!("Invite {} deleted in guild {}", data.code, guild_id);

    state
        .invite_cache
        .record_deleted(guild_id.get(), &data.code)
        .await;
}
