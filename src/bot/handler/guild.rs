use serenity::all::{Context, Guild, Http};

use crate::state::BotState;

/// Handles the guild_create event
///
/// Guilds that were already present at startup are cached by the ready handler; only a
/// guild the bot was just added to needs its invites snapshotted here.
pub async fn handle_guild_create(
    state: &BotState,
    ctx: Context,
    guild: Guild,
    is_new: Option<bool>,
) {
    if is_new != Some(true) {
        return;
    }

    tracing::info!("Joined guild {} ({})", guild.name, guild.id);

    let http: &Http = &ctx.http;
    state
        .invite_cache
        .initialize_for_guild(guild.id.get(), http)
        .await;
}
