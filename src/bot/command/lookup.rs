use serenity::all::{
    CommandInteraction, CommandOptionType, Context, CreateCommand, CreateCommandOption,
    CreateEmbed, Timestamp,
};

use crate::bot::command::{options::CommandOptions, reply_embed, require_guild, EMBED_COLOR};
use crate::error::AppError;
use crate::model::invite_use::InviteUse;
use crate::service::invite::InviteService;
use crate::state::BotState;
use crate::util::text::{truncate, EMBED_FIELD_LIMIT};

pub const NAME: &str = "lookup";
pub const DESCRIPTION: &str = "Check usage statistics for an invite";

pub fn register() -> CreateCommand {
    CreateCommand::new(NAME).description(DESCRIPTION).add_option(
        CreateCommandOption::new(CommandOptionType::String, "code", "The invite code to look up")
            .required(true)
            .set_autocomplete(true),
    )
}

/// Formats recent uses as one line per join with a relative timestamp.
///
/// Returns `None` when there are no uses.
fn format_recent_uses(uses: &[InviteUse]) -> Option<String> {
    if uses.is_empty() {
        return None;
    }

    let list = uses
        .iter()
        .map(|u| {
            format!(
                "• <@{}> ({}) - <t:{}:R>",
                u.user_id,
                u.username,
                u.used_at.timestamp()
            )
        })
        .collect::<Vec<_>>()
        .join("\n");

    Some(truncate(&list, EMBED_FIELD_LIMIT))
}

pub async fn run(state: &BotState, ctx: &Context, cmd: &CommandInteraction) -> Result<(), AppError> {
    let guild_id = require_guild(cmd)?;
    let code = CommandOptions::new(cmd).required_string("code")?;

    let service = InviteService::new(&state.db, &state.autocomplete);
    let (invite, uses) = service.lookup(guild_id, code).await?;

    let max_uses = invite
        .max_uses
        .map(|n| n.to_string())
        .unwrap_or_else(|| "Unlimited".to_string());

    let mut embed = CreateEmbed::new()
        .color(EMBED_COLOR)
        .title("🔍 Invite Lookup")
        .field("Invite Code", format!("`.gg/{}`", invite.code), true)
        .field("Total Uses", invite.uses.to_string(), true)
        .field("Max Uses", max_uses, true)
        .field("Primary Source", &invite.primary_source, true)
        .field("Secondary Source", &invite.secondary_source, true)
        .field("Channel", format!("<#{}>", invite.channel_id), true)
        .timestamp(Timestamp::now());

    if let Some(description) = &invite.description {
        embed = embed.description(description);
    }
    if let Some(recent) = format_recent_uses(&uses) {
        embed = embed.field("Recent Uses", recent, false);
    }

    reply_embed(ctx, cmd, embed).await
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};

    fn invite_use(user_id: u64, username: &str) -> InviteUse {
        InviteUse {
            id: 1,
            invite_id: 1,
            user_id,
            username: username.to_string(),
            used_at: Utc.with_ymd_and_hms(2026, 3, 1, 12, 0, 0).unwrap(),
        }
    }

    #[test]
    fn no_uses_yields_no_field() {
        assert!(format_recent_uses(&[]).is_none());
    }

    #[test]
    fn lists_uses_with_relative_timestamps() {
        let text = format_recent_uses(&[invite_use(1, "alice"), invite_use(2, "bob")]).unwrap();

        assert_eq!(
            text,
            "• <@1> (alice) - <t:1772366400:R>\n• <@2> (bob) - <t:1772366400:R>"
        );
    }

    #[test]
    fn long_lists_fit_in_one_field() {
        let uses: Vec<InviteUse> = (0..10)
            .map(|i| invite_use(i, &"x".repeat(100)))
            .collect();

        let text = format_recent_uses(&uses).unwrap();

        assert_eq!(text.chars().count(), EMBED_FIELD_LIMIT);
        assert!(text.ends_with("..."));
    }
}
