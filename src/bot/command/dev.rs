//! Owner-only bot information and statistics.
//!
//! The owner is the application owner, or any member of the owning team, as reported
//! by Discord's application info.

use std::time::Duration;

use serenity::all::{
    Cache, CommandInteraction, CommandOptionType, Context, CreateCommand, CreateCommandOption,
    CreateEmbed, CreateInteractionResponse, CreateInteractionResponseMessage, Timestamp,
};

use crate::bot::command::{COMMANDS, EMBED_COLOR};
use crate::error::AppError;
use crate::state::BotState;

pub const NAME: &str = "dev";
pub const DESCRIPTION: &str = "Developer information and bot stats";

pub fn register() -> CreateCommand {
    CreateCommand::new(NAME)
        .description(DESCRIPTION)
        .add_option(CreateCommandOption::new(
            CommandOptionType::SubCommand,
            "info",
            "Shows bot information",
        ))
        .add_option(CreateCommandOption::new(
            CommandOptionType::SubCommand,
            "stats",
            "Shows bot statistics",
        ))
}

fn is_owner(owner_ids: &[u64], user_id: u64) -> bool {
    owner_ids.contains(&user_id)
}

/// Formats an uptime with its two or three most significant units, e.g. `2d 3h 4m`.
fn format_uptime(uptime: Duration) -> String {
    let seconds = uptime.as_secs();
    let minutes = seconds / 60;
    let hours = minutes / 60;
    let days = hours / 24;

    if days > 0 {
        format!("{}d {}h {}m", days, hours % 24, minutes % 60)
    } else if hours > 0 {
        format!("{}h {}m {}s", hours, minutes % 60, seconds % 60)
    } else if minutes > 0 {
        format!("{}m {}s", minutes, seconds % 60)
    } else {
        format!("{}s", seconds)
    }
}

struct CacheStats {
    guilds: usize,
    users: u64,
    channels: usize,
}

fn cache_stats(cache: &Cache) -> CacheStats {
    let guild_ids = cache.guilds();
    let (users, channels) = guild_ids
        .iter()
        .filter_map(|id| cache.guild(*id).map(|g| (g.member_count, g.channels.len())))
        .fold((0, 0), |(users, channels), (u, c)| (users + u, channels + c));

    CacheStats {
        guilds: guild_ids.len(),
        users,
        channels,
    }
}

async fn owner_ids(ctx: &Context) -> Result<Vec<u64>, AppError> {
    let info = ctx.http.get_current_application_info().await?;

    let mut ids: Vec<u64> = info.owner.iter().map(|owner| owner.id.get()).collect();
    if let Some(team) = info.team {
        ids.extend(team.members.iter().map(|member| member.user.id.get()));
    }

    Ok(ids)
}

fn info_embed(ctx: &Context, state: &BotState) -> CreateEmbed {
    let (bot_name, bot_id) = {
        let user = ctx.cache.current_user();
        (user.name.clone(), user.id.get())
    };

    CreateEmbed::new()
        .color(EMBED_COLOR)
        .title("🤖 Bot Information")
        .description("Developer information about this bot")
        .field("Bot Name", bot_name, true)
        .field("Bot ID", bot_id.to_string(), true)
        .field("Version", env!("CARGO_PKG_VERSION"), true)
        .field("Framework", "serenity", true)
        .field("Uptime", format_uptime(state.started_at.elapsed()), true)
        .field("Guilds", ctx.cache.guild_count().to_string(), true)
        .timestamp(Timestamp::now())
}

async fn stats_embed(ctx: &Context, state: &BotState) -> CreateEmbed {
    let stats = cache_stats(&ctx.cache);
    let tracked = state.invite_cache.guild_count().await;

    CreateEmbed::new()
        .color(EMBED_COLOR)
        .title("📊 Bot Statistics")
        .field("Total Guilds", stats.guilds.to_string(), true)
        .field("Total Users", stats.users.to_string(), true)
        .field("Total Channels", stats.channels.to_string(), true)
        .field("Cached Invite Guilds", tracked.to_string(), true)
        // `/dev` itself is not listed in `/help`
        .field("Commands Loaded", (COMMANDS.len() + 1).to_string(), true)
        .timestamp(Timestamp::now())
}

pub async fn run(state: &BotState, ctx: &Context, cmd: &CommandInteraction) -> Result<(), AppError> {
    if !is_owner(&owner_ids(ctx).await?, cmd.user.id.get()) {
        return Err(AppError::BadRequest(
            "❌ This command is only available to the bot owner.".to_string(),
        ));
    }

    let embed = match cmd.data.options.first().map(|option| option.name.as_str()) {
        Some("info") => info_embed(ctx, state),
        Some("stats") => stats_embed(ctx, state).await,
        _ => return Err(AppError::BadRequest("Unknown subcommand.".to_string())),
    };

    cmd.create_response(
        &ctx.http,
        CreateInteractionResponse::Message(
            CreateInteractionResponseMessage::new()
                .embed(embed)
                .ephemeral(true),
        ),
    )
    .await?;

    Ok(())
}
