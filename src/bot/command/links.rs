use serenity::all::{
    CommandInteraction, Context, CreateCommand, CreateEmbed, CreateEmbedFooter, Timestamp,
};

use crate::bot::command::{guild_name, reply_embed, require_guild, EMBED_COLOR};
use crate::error::AppError;
use crate::model::invite::Invite;
use crate::service::invite::InviteService;
use crate::state::BotState;
use crate::util::text::{truncate, EMBED_DESCRIPTION_LIMIT};

pub const NAME: &str = "links";
pub const DESCRIPTION: &str = "View all invite links for this server";

pub const NO_INVITES_MESSAGE: &str =
    "No invites have been created yet. Use `/create` to create your first invite!";

pub fn register() -> CreateCommand {
    CreateCommand::new(NAME).description(DESCRIPTION)
}

fn format_links(invites: &[Invite]) -> String {
    let list = invites
        .iter()
        .map(|invite| {
            format!(
                "**{}**\n`.gg/{}` - <#{}> ({} uses)",
                invite.source_label(),
                invite.code,
                invite.channel_id,
                invite.uses
            )
        })
        .collect::<Vec<_>>()
        .join("\n\n");

    truncate(
        &format!("You are using a total of {} links\n\n{}", invites.len(), list),
        EMBED_DESCRIPTION_LIMIT,
    )
}

pub async fn run(state: &BotState, ctx: &Context, cmd: &CommandInteraction) -> Result<(), AppError> {
    let guild_id = require_guild(cmd)?;

    let service = InviteService::new(&state.db, &state.autocomplete);
    let invites = service.list(guild_id).await?;

    let embed = CreateEmbed::new()
        .color(EMBED_COLOR)
        .title(format!("📋 Invites for {}", guild_name(ctx, guild_id).await))
        .timestamp(Timestamp::now());

    let embed = if invites.is_empty() {
        embed.description(NO_INVITES_MESSAGE)
    } else {
        embed
            .description(format_links(&invites))
            .footer(CreateEmbedFooter::new(
                "Use the /lookup command to check invite uses.",
            ))
    };

    reply_embed(ctx, cmd, embed).await
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    fn invite(code: &str, description: Option<&str>, uses: i32) -> Invite {
        Invite {
            id: 1,
            code: code.to_string(),
            guild_id: 1,
            channel_id: 55,
            channel_name: "welcome".to_string(),
            primary_source: "YouTube".to_string(),
            secondary_source: "Video".to_string(),
            description: description.map(str::to_string),
            uses,
            max_uses: None,
            created_at: Utc::now(),
            created_by: 2,
        }
    }

    #[test]
    fn formats_each_link_with_source_and_uses() {
        let text = format_links(&[invite("abc", Some("launch"), 4), invite("def", None, 0)]);

        assert_eq!(
            text,
            "You are using a total of 2 links\n\n\
             **YouTube → Video (launch)**\n`.gg/abc` - <#55> (4 uses)\n\n\
             **YouTube → Video**\n`.gg/def` - <#55> (0 uses)"
        );
    }
}
