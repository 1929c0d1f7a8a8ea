use serenity::all::{
    ChannelType, CommandInteraction, CommandOptionType, Context, CreateCommand, CreateCommandOption,
    CreateEmbed, Permissions, Timestamp,
};

use crate::bot::command::{options::CommandOptions, reply_embed, require_guild, EMBED_COLOR};
use crate::data::log_channel::LogChannelRepository;
use crate::error::AppError;
use crate::model::log_channel::LogType;
use crate::state::BotState;
use crate::util::channel::{is_log_channel, LOG_CHANNEL_TYPES};

pub const NAME: &str = "setchannel";
pub const DESCRIPTION: &str = "Set the log channel for invite actions";

pub fn register() -> CreateCommand {
    CreateCommand::new(NAME)
        .description(DESCRIPTION)
        .default_member_permissions(Permissions::MANAGE_GUILD)
        .add_option(
            CreateCommandOption::new(
                CommandOptionType::Channel,
                "channel",
                "The channel to send invite logs to",
            )
            .required(true)
            .channel_types(LOG_CHANNEL_TYPES.to_vec()),
        )
}

fn check_log_channel(kind: ChannelType) -> Result<(), AppError> {
    if !is_log_channel(kind) {
        return Err(AppError::BadRequest(
            "Please select a text channel.".to_string(),
        ));
    }

    Ok(())
}

pub async fn run(state: &BotState, ctx: &Context, cmd: &CommandInteraction) -> Result<(), AppError> {
    let guild_id = require_guild(cmd)?;
    let channel = CommandOptions::new(cmd)
        .channel("channel")
        .ok_or_else(|| AppError::BadRequest("Please select a channel.".to_string()))?;

    check_log_channel(channel.kind)?;

    let config = LogChannelRepository::new(&state.db)
        .upsert(guild_id, channel.id.get(), LogType::All)
        .await?;

    tracing::info!(
        "Log channel of guild {} set to {}",
        guild_id,
        config.channel_id
    );

    let embed = CreateEmbed::new()
        .color(EMBED_COLOR)
        .title("✅ Log Channel Set!")
        .field("Channel", format!("<#{}>", config.channel_id), true)
        .timestamp(Timestamp::now());

    reply_embed(ctx, cmd, embed).await
}
