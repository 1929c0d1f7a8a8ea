use serenity::all::{
    ChannelId, ChannelType, CommandInteraction, CommandOptionType, Context, CreateCommand,
    CreateCommandOption, CreateEmbed, CreateEmbedFooter, CreateInteractionResponse,
    CreateInteractionResponseMessage, CreateInvite, GuildId, PartialChannel, Permissions,
    Timestamp,
};

use crate::bot::command::{actor_mention, options::CommandOptions, require_guild, EMBED_COLOR};
use crate::error::AppError;
use crate::model::{invite::CreateInviteParam, log_event::InviteLogEvent};
use crate::service::invite::InviteService;
use crate::service::invite_log::{DiscordInviteLogger, InviteLogSink};
use crate::state::BotState;
use crate::util::channel::{is_invite_channel, INVITE_CHANNEL_TYPES};

pub const NAME: &str = "create";
pub const DESCRIPTION: &str = "Create a new invite link with tracking";

const SHARE_NOTICE: &str =
    "To make the most of Redirectomator, only share this link on the platform you have designated below.";

pub fn register() -> CreateCommand {
    CreateCommand::new(NAME)
        .description(DESCRIPTION)
        .default_member_permissions(Permissions::MANAGE_GUILD)
        .add_option(
            CreateCommandOption::new(
                CommandOptionType::String,
                "primary_source",
                "Primary source (e.g., Instagram, Twitter, YouTube)",
            )
            .required(true)
            .set_autocomplete(true),
        )
        .add_option(
            CreateCommandOption::new(
                CommandOptionType::String,
                "secondary_source",
                "Secondary source (e.g., Bio, Post, Story)",
            )
            .required(true)
            .set_autocomplete(true),
        )
        .add_option(
            CreateCommandOption::new(
                CommandOptionType::Channel,
                "channel",
                "The channel to create the invite for",
            )
            .channel_types(INVITE_CHANNEL_TYPES.to_vec()),
        )
        .add_option(CreateCommandOption::new(
            CommandOptionType::String,
            "description",
            "Optional description for this invite",
        ))
        .add_option(
            CreateCommandOption::new(
                CommandOptionType::Integer,
                "max_uses",
                "Maximum number of uses (0 for unlimited)",
            )
            .min_int_value(0)
            .max_int_value(100),
        )
}

/// Channel the platform invite points at.
struct TargetChannel {
    id: ChannelId,
    name: String,
    kind: ChannelType,
}

impl TargetChannel {
    fn from_partial(channel: &PartialChannel) -> Self {
        Self {
            id: channel.id,
            name: channel.name.clone().unwrap_or_else(|| "Unknown".to_string()),
            kind: channel.kind,
        }
    }
}

/// Picks the invite's channel: the selected one, else the rules channel, else the first
/// text, announcement or forum channel of the guild.
async fn resolve_target_channel(
    ctx: &Context,
    guild_id: u64,
    selected: Option<&PartialChannel>,
) -> Result<TargetChannel, AppError> {
    if let Some(selected) = selected {
        return Ok(TargetChannel::from_partial(selected));
    }

    let guild_id = GuildId::new(guild_id);
    let guild = ctx.http.get_guild(guild_id).await?;

    if let Some(rules_channel_id) = guild.rules_channel_id {
        match ctx.http.get_channel(rules_channel_id).await {
            Ok(channel) => {
                if let Some(channel) = channel.guild() {
                    return Ok(TargetChannel {
                        id: channel.id,
                        name: channel.name,
                        kind: channel.kind,
                    });
                }
            }
            Err(e) => {
                tracing::debug!("Rules channel of guild {} is not accessible: {}", guild_id, e);
            }
        }
    }

    ctx.http
        .get_channels(guild_id)
        .await?
        .into_iter()
        .find(|channel| is_invite_channel(channel.kind))
        .map(|channel| TargetChannel {
            id: channel.id,
            name: channel.name,
            kind: channel.kind,
        })
        .ok_or_else(|| AppError::NotFound("No text channels found in this server.".to_string()))
}

pub async fn run(state: &BotState, ctx: &Context, cmd: &CommandInteraction) -> Result<(), AppError> {
    let guild_id = require_guild(cmd)?;
    let options = CommandOptions::new(cmd);

    let primary_source = options.required_string("primary_source")?;
    let secondary_source = options.required_string("secondary_source")?;
    let description = options.string("description").map(str::to_string);
    let max_uses = InviteService::validate_max_uses(options.integer("max_uses"))?;

    let channel = resolve_target_channel(ctx, guild_id, options.channel("channel")).await?;
    if !is_invite_channel(channel.kind) {
        return Err(AppError::BadRequest("Please select a text channel.".to_string()));
    }

    let platform_invite = channel
        .id
        .create_invite(
            &ctx.http,
            CreateInvite::new()
                .max_age(0)
                .max_uses(max_uses.unwrap_or(0) as u8)
                .unique(true),
        )
        .await?;

    let service = InviteService::new(&state.db, &state.autocomplete);
    let (invite, total) = service
        .create(CreateInviteParam {
            code: platform_invite.code,
            guild_id,
            channel_id: channel.id.get(),
            channel_name: channel.name,
            primary_source: primary_source.to_string(),
            secondary_source: secondary_source.to_string(),
            description,
            max_uses,
            created_by: cmd.user.id.get(),
        })
        .await?;

    tracing::info!(
        "Created invite {} ({}) in guild {}",
        invite.code,
        invite.source_label(),
        guild_id
    );

    let mut embed = CreateEmbed::new()
        .color(EMBED_COLOR)
        .title("✅ Invite Created!")
        .field(
            "Invite Link",
            format!("https://discord.gg/{}", invite.code),
            false,
        )
        .field("Primary Source", &invite.primary_source, true)
        .field("Secondary Source", &invite.secondary_source, true)
        .field("Channel", format!("<#{}>", invite.channel_id), true)
        .footer(CreateEmbedFooter::new(format!("{} total links", total)))
        .timestamp(Timestamp::now());
    if let Some(description) = &invite.description {
        embed = embed.description(description);
    }

    cmd.create_response(
        &ctx.http,
        CreateInteractionResponse::Message(
            CreateInteractionResponseMessage::new()
                .content(SHARE_NOTICE)
                .embed(embed),
        ),
    )
    .await?;

    DiscordInviteLogger::new(&state.db, &ctx.http)
        .log_action(
            guild_id,
            InviteLogEvent::Created {
                code: invite.code,
                channel_id: invite.channel_id,
                primary_source: invite.primary_source,
                secondary_source: invite.secondary_source,
                description: invite.description,
                actor: actor_mention(cmd),
            },
        )
        .await;

    Ok(())
}
