//! Slash commands.
//!
//! Each command lives in its own module exposing `NAME`, `DESCRIPTION`, a `register`
//! builder and a `run` function. `run` returns `AppError` on failure; the dispatcher
//! turns it into an ephemeral reply with `AppError::user_message`.

use serenity::all::{
    Command, CommandInteraction, Context, CreateCommand, CreateEmbed, CreateInteractionResponse,
    CreateInteractionResponseMessage, GuildId, Http,
};

use crate::error::AppError;
use crate::state::BotState;

pub mod autocomplete;
pub mod create;
pub mod delete;
pub mod dev;
pub mod edit;
pub mod help;
pub mod links;
pub mod lookup;
pub mod options;
pub mod ping;
pub mod setchannel;
pub mod top;

/// Default embed color for command replies.
pub const EMBED_COLOR: u32 = 0x5865F2;

/// Name and description of every command, in the order shown by `/help`.
pub const COMMANDS: [(&str, &str); 9] = [
    (create::NAME, create::DESCRIPTION),
    (delete::NAME, delete::DESCRIPTION),
    (edit::NAME, edit::DESCRIPTION),
    (lookup::NAME, lookup::DESCRIPTION),
    (links::NAME, links::DESCRIPTION),
    (top::NAME, top::DESCRIPTION),
    (setchannel::NAME, setchannel::DESCRIPTION),
    (ping::NAME, ping::DESCRIPTION),
    (help::NAME, help::DESCRIPTION),
];

/// Builds every slash command definition.
pub fn all_commands() -> Vec<CreateCommand> {
    vec![
        create::register(),
        delete::register(),
        edit::register(),
        lookup::register(),
        links::register(),
        top::register(),
        setchannel::register(),
        ping::register(),
        help::register(),
        dev::register(),
    ]
}

/// Overwrites the application's global commands with the current definitions.
///
/// # Returns
/// - `Ok(usize)` - Number of registered commands
/// - `Err(AppError)` - Discord rejected the registration
pub async fn register_commands(http: &Http) -> Result<usize, AppError> {
    let commands = Command::set_global_commands(http, all_commands()).await?;

    Ok(commands.len())
}

/// Runs a slash command and replies with an error message if it fails.
pub async fn handle_command(state: &BotState, ctx: &Context, cmd: &CommandInteraction) {
    let result = match cmd.data.name.as_str() {
        create::NAME => create::run(state, ctx, cmd).await,
        delete::NAME => delete::run(state, ctx, cmd).await,
        edit::NAME => edit::run(state, ctx, cmd).await,
        lookup::NAME => lookup::run(state, ctx, cmd).await,
        links::NAME => links::run(state, ctx, cmd).await,
        top::NAME => top::run(state, ctx, cmd).await,
        setchannel::NAME => setchannel::run(state, ctx, cmd).await,
        ping::NAME => ping::run(ctx, cmd).await,
        help::NAME => help::run(ctx, cmd).await,
        dev::NAME => dev::run(state, ctx, cmd).await,
        other => {
            tracing::warn!("Received unknown command /{}", other);
            return;
        }
    };

    if let Err(e) = result {
        let response = CreateInteractionResponseMessage::new()
            .content(e.user_message())
            .ephemeral(true);

        if let Err(e) = cmd
            .create_response(&ctx.http, CreateInteractionResponse::Message(response))
            .await
        {
            tracing::error!("Failed to send error reply for /{}: {}", cmd.data.name, e);
        }
    }
}

/// Returns the guild the command was used in.
///
/// # Returns
/// - `Ok(u64)` - Guild ID
/// - `Err(AppError::BadRequest)` - The command was used in a DM
pub fn require_guild(cmd: &CommandInteraction) -> Result<u64, AppError> {
    cmd.guild_id
        .map(|id| id.get())
        .ok_or_else(|| AppError::BadRequest("This command can only be used in a server.".to_string()))
}

/// Replies to a command with a single embed.
pub async fn reply_embed(
    ctx: &Context,
    cmd: &CommandInteraction,
    embed: CreateEmbed,
) -> Result<(), AppError> {
    cmd.create_response(
        &ctx.http,
        CreateInteractionResponse::Message(CreateInteractionResponseMessage::new().embed(embed)),
    )
    .await?;

    Ok(())
}

/// Fetches the guild's name for embed titles, falling back to "this server".
pub async fn guild_name(ctx: &Context, guild_id: u64) -> String {
    match ctx.http.get_guild(GuildId::new(guild_id)).await {
        Ok(guild) => guild.name,
        Err(e) => {
            tracing::debug!("Failed to fetch name of guild {}: {}", guild_id, e);
            "this server".to_string()
        }
    }
}

/// Mention of the command user, used as the actor in log messages.
pub fn actor_mention(cmd: &CommandInteraction) -> String {
    format!("<@{}>", cmd.user.id)
}
