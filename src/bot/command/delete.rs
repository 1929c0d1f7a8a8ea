use serenity::all::{
    CommandInteraction, CommandOptionType, Context, CreateCommand, CreateCommandOption,
    CreateEmbed, Permissions, Timestamp,
};

use crate::bot::command::{
    actor_mention, options::CommandOptions, reply_embed, require_guild, EMBED_COLOR,
};
use crate::error::AppError;
use crate::model::log_event::InviteLogEvent;
use crate::service::invite::InviteService;
use crate::service::invite_log::{DiscordInviteLogger, InviteLogSink};
use crate::state::BotState;

pub const NAME: &str = "delete";
pub const DESCRIPTION: &str = "Delete a tracked invite link";

pub fn register() -> CreateCommand {
    CreateCommand::new(NAME)
        .description(DESCRIPTION)
        .default_member_permissions(Permissions::MANAGE_GUILD)
        .add_option(
            CreateCommandOption::new(
                CommandOptionType::String,
                "code",
                "The invite code to delete (e.g., 8eqeQmTtKY)",
            )
            .required(true)
            .set_autocomplete(true),
        )
}

pub async fn run(state: &BotState, ctx: &Context, cmd: &CommandInteraction) -> Result<(), AppError> {
    let guild_id = require_guild(cmd)?;
    let code = CommandOptions::new(cmd).required_string("code")?;

    let service = InviteService::new(&state.db, &state.autocomplete);
    let invite = service.delete(guild_id, code).await?;

    tracing::info!("Deleted invite {} in guild {}", invite.code, guild_id);

    let embed = CreateEmbed::new()
        .color(EMBED_COLOR)
        .title("✅ Invite Deleted")
        .description(format!(
            "Successfully deleted invite `.gg/{}`",
            invite.code
        ))
        .field("Primary Source", &invite.primary_source, true)
        .field("Secondary Source", &invite.secondary_source, true)
        .field("Total Uses", invite.uses.to_string(), true)
        .timestamp(Timestamp::now());

    reply_embed(ctx, cmd, embed).await?;

    DiscordInviteLogger::new(&state.db, &ctx.http)
        .log_action(
            guild_id,
            InviteLogEvent::Deleted {
                code: invite.code,
                primary_source: invite.primary_source,
                secondary_source: invite.secondary_source,
                uses: invite.uses,
                actor: actor_mention(cmd),
            },
        )
        .await;

    Ok(())
}
