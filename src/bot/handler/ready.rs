use serenity::all::{ActivityData, Context, Http, Ready};

use crate::bot::command;
use crate::state::BotState;

/// Handles the ready event when the bot connects to Discord
///
/// Registers the global slash commands, then snapshots the invites of every guild in
/// the ready payload so joins can be attributed from the first one onwards.
pub async fn handle_ready(state: &BotState, ctx: Context, ready: Ready) {
    tracing::info!("{} is connected to Discord!", ready.user.name);

    ctx.set_activity(Some(ActivityData::watching("invite links")));

    match command::register_commands(&ctx.http).await {
        Ok(count) => tracing::info!("Registered {} global commands", count),
        Err(e) => tracing::error!("Failed to register global commands: {}", e),
    }

    let http: &Http = &ctx.http;
    let mut cached = 0;
    for guild in &ready.guilds {
        if state
            .invite_cache
            .initialize_for_guild(guild.id.get(), http)
            .await
        {
            cached += 1;
        }
    }

    tracing::info!(
        "Cached invites for {} of {} guilds",
        cached,
        ready.guilds.len()
    );
}
