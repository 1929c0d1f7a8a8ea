//! Delivery of invite activity to a guild's configured log channel.
//!
//! Logging is a side effect: a guild without a log channel, a deleted channel or a
//! missing permission never affects the action being logged. Failures are reported
//! through `tracing` only.

use sea_orm::DatabaseConnection;
use serenity::{
    all::{Channel, ChannelId, CreateEmbed, CreateMessage, Http, Timestamp},
    async_trait,
};

use crate::{
    data::log_channel::LogChannelRepository,
    error::AppError,
    model::log_event::InviteLogEvent,
    util::channel::is_log_channel,
};

const COLOR_CREATED: u32 = 0x5865F2;
const COLOR_DELETED: u32 = 0xED4245;
const COLOR_USER_JOINED: u32 = 0x57F287;

/// Destination for invite log events.
#[async_trait]
pub trait InviteLogSink: Send + Sync {
    /// Delivers one log message for the guild. Never fails from the caller's view.
    async fn log_action(&self, guild_id: u64, event: InviteLogEvent);
}

/// Posts log events as embeds to the channel configured with `/setchannel`.
pub struct DiscordInviteLogger<'a> {
    db: &'a DatabaseConnection,
    http: &'a Http,
}

impl<'a> DiscordInviteLogger<'a> {
    pub fn new(db: &'a DatabaseConnection, http: &'a Http) -> Self {
        Self { db, http }
    }

    async fn send(&self, guild_id: u64, event: &InviteLogEvent) -> Result<(), AppError> {
        let Some(config) = LogChannelRepository::new(self.db)
            .get_by_guild(guild_id)
            .await?
        else {
            return Ok(());
        };

        let channel_id = ChannelId::new(config.channel_id);
        let Channel::Guild(channel) = self.http.get_channel(channel_id).await? else {
            return Ok(());
        };
        if !is_log_channel(channel.kind) {
            tracing::debug!(
                "Log channel {} of guild {} cannot receive messages",
                channel_id,
                guild_id
            );
            return Ok(());
        }

        channel_id
            .send_message(self.http, CreateMessage::new().embed(build_log_embed(event)))
            .await?;

        Ok(())
    }
}

#[async_trait]
impl<'a> InviteLogSink for DiscordInviteLogger<'a> {
    async fn log_action(&self, guild_id: u64, event: InviteLogEvent) {
        if let Err(e) = self.send(guild_id, &event).await {
            tracing::error!(
                "Failed to log {} action for guild {}: {}",
                event.action().as_str(),
                guild_id,
                e
            );
        }
    }
}

/// Builds the embed posted for a log event.
pub fn build_log_embed(event: &InviteLogEvent) -> CreateEmbed {
    let embed = match event {
        InviteLogEvent::Created {
            code,
            channel_id,
            primary_source,
            secondary_source,
            description,
            actor,
        } => {
            let embed = CreateEmbed::new()
                .color(COLOR_CREATED)
                .title("✅ Invite Created")
                .description(format!("The invite `{}` was created by {}.", code, actor))
                .field("Primary Source", primary_source, true)
                .field("Secondary Source", secondary_source, true)
                .field("Channel", format!("<#{}>", channel_id), true);

            match description {
                Some(description) => embed.field("Description", description, false),
                None => embed,
            }
        }
        InviteLogEvent::Deleted {
            code,
            primary_source,
            secondary_source,
            uses,
            actor,
        } => CreateEmbed::new()
            .color(COLOR_DELETED)
            .title("🗑️ Invite Deleted")
            .description(format!("The invite `{}` was deleted by {}.", code, actor))
            .field("Primary Source", primary_source, true)
            .field("Secondary Source", secondary_source, true)
            .field("Total Uses", uses.to_string(), true),
        InviteLogEvent::UserJoined {
            user_id,
            code,
            uses,
            primary_source,
            secondary_source,
        } => CreateEmbed::new()
            .color(COLOR_USER_JOINED)
            .title("👤 User Joined")
            .field("User Mention", format!("<@{}>", user_id), true)
            .field("User ID", user_id.to_string(), true)
            .field("Invite", format!("`.gg/{}` ({} uses)", code, uses), false)
            .field("Primary Source", primary_source, true)
            .field("Secondary Source", secondary_source, true),
    };

    embed.timestamp(Timestamp::now())
}
