use serenity::all::{
    CommandInteraction, CommandOptionType, Context, CreateCommand, CreateCommandOption,
    CreateEmbed, Permissions, Timestamp,
};

use crate::bot::command::{
    actor_mention, options::CommandOptions, reply_embed, require_guild, EMBED_COLOR,
};
use crate::error::AppError;
use crate::model::{
    invite::{Invite, UpdateInviteParam},
    log_event::InviteLogEvent,
};
use crate::service::invite::InviteService;
use crate::service::invite_log::{DiscordInviteLogger, InviteLogSink};
use crate::state::BotState;

pub const NAME: &str = "edit";
pub const DESCRIPTION: &str = "Edit an existing invite link";

/// Description value that removes the stored description.
const CLEAR_DESCRIPTION: &str = "none";

pub fn register() -> CreateCommand {
    CreateCommand::new(NAME)
        .description(DESCRIPTION)
        .default_member_permissions(Permissions::MANAGE_GUILD)
        .add_option(
            CreateCommandOption::new(CommandOptionType::String, "code", "The invite code to edit")
                .required(true)
                .set_autocomplete(true),
        )
        .add_option(
            CreateCommandOption::new(
                CommandOptionType::String,
                "primary_source",
                "New primary source (optional)",
            )
            .set_autocomplete(true),
        )
        .add_option(
            CreateCommandOption::new(
                CommandOptionType::String,
                "secondary_source",
                "New secondary source (optional)",
            )
            .set_autocomplete(true),
        )
        .add_option(CreateCommandOption::new(
            CommandOptionType::String,
            "description",
            "New description (optional, use \"none\" to remove)",
        ))
        .add_option(
            CreateCommandOption::new(
                CommandOptionType::Integer,
                "max_uses",
                "New max uses (optional, use 0 to remove limit)",
            )
            .min_int_value(0)
            .max_int_value(100),
        )
}

/// Builds the update from the provided options.
fn update_param(options: &CommandOptions<'_>) -> Result<UpdateInviteParam, AppError> {
    let max_uses = options
        .integer("max_uses")
        .map(|n| InviteService::validate_max_uses(Some(n)))
        .transpose()?;

    Ok(UpdateInviteParam {
        primary_source: options.string("primary_source").map(str::to_string),
        secondary_source: options.string("secondary_source").map(str::to_string),
        description: options
            .string("description")
            .map(|d| (d != CLEAR_DESCRIPTION).then(|| d.to_string())),
        max_uses,
    })
}

fn updated_embed(invite: &Invite) -> CreateEmbed {
    let max_uses = invite
        .max_uses
        .map(|n| n.to_string())
        .unwrap_or_else(|| "Unlimited".to_string());

    let embed = CreateEmbed::new()
        .color(EMBED_COLOR)
        .title("✅ Invite Updated")
        .description(format!("Successfully updated invite `.gg/{}`", invite.code))
        .field("Primary Source", &invite.primary_source, true)
        .field("Secondary Source", &invite.secondary_source, true)
        .field("Channel", format!("<#{}>", invite.channel_id), true)
        .field("Total Uses", invite.uses.to_string(), true)
        .field("Max Uses", max_uses, true)
        .timestamp(Timestamp::now());

    match &invite.description {
        Some(description) => embed.field("Description", description, false),
        None => embed,
    }
}

pub async fn run(state: &BotState, ctx: &Context, cmd: &CommandInteraction) -> Result<(), AppError> {
    let guild_id = require_guild(cmd)?;
    let options = CommandOptions::new(cmd);
    let code = options.required_string("code")?;
    let param = update_param(&options)?;

    let service = InviteService::new(&state.db, &state.autocomplete);
    let invite = service.edit(guild_id, code, param).await?;

    tracing::info!("Edited invite {} in guild {}", invite.code, guild_id);

    reply_embed(ctx, cmd, updated_embed(&invite)).await?;

    DiscordInviteLogger::new(&state.db, &ctx.http)
        .log_action(
            guild_id,
            InviteLogEvent::Created {
                code: invite.code,
                channel_id: invite.channel_id,
                primary_source: invite.primary_source,
                secondary_source: invite.secondary_source,
                description: invite.description,
                actor: format!("{} (edited)", actor_mention(cmd)),
            },
        )
        .await;

    Ok(())
}
