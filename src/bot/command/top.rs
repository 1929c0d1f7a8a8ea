use serenity::all::{
    CommandInteraction, CommandOptionType, Context, CreateCommand, CreateCommandOption,
    CreateEmbed, CreateEmbedFooter, Timestamp,
};

use crate::bot::command::{
    guild_name, links::NO_INVITES_MESSAGE, options::CommandOptions, reply_embed, require_guild,
    EMBED_COLOR,
};
use crate::error::AppError;
use crate::model::invite::Invite;
use crate::service::invite::InviteService;
use crate::state::BotState;
use crate::util::text::{truncate, EMBED_DESCRIPTION_LIMIT};

pub const NAME: &str = "top";
pub const DESCRIPTION: &str = "View top invite links by usage";

pub fn register() -> CreateCommand {
    CreateCommand::new(NAME).description(DESCRIPTION).add_option(
        CreateCommandOption::new(
            CommandOptionType::Integer,
            "limit",
            "Number of invites to show (default: 10, max: 25)",
        )
        .min_int_value(1)
        .max_int_value(25),
    )
}

fn rank_marker(index: usize) -> String {
    match index {
        0 => "🥇".to_string(),
        1 => "🥈".to_string(),
        2 => "🥉".to_string(),
        n => format!("{}.", n + 1),
    }
}

fn format_ranking(invites: &[Invite]) -> String {
    let list = invites
        .iter()
        .enumerate()
        .map(|(index, invite)| {
            format!(
                "{} **{}**\n`.gg/{}` - <#{}> - **{}** uses",
                rank_marker(index),
                invite.source_label(),
                invite.code,
                invite.channel_id,
                invite.uses
            )
        })
        .collect::<Vec<_>>()
        .join("\n\n");

    truncate(&list, EMBED_DESCRIPTION_LIMIT)
}

pub async fn run(state: &BotState, ctx: &Context, cmd: &CommandInteraction) -> Result<(), AppError> {
    let guild_id = require_guild(cmd)?;
    let limit = CommandOptions::new(cmd).integer("limit");

    let service = InviteService::new(&state.db, &state.autocomplete);
    let invites = service.top(guild_id, limit).await?;

    let embed = CreateEmbed::new()
        .color(EMBED_COLOR)
        .title(format!("🏆 Top Invites for {}", guild_name(ctx, guild_id).await))
        .timestamp(Timestamp::now());

    let embed = if invites.is_empty() {
        embed.description(NO_INVITES_MESSAGE)
    } else {
        embed
            .description(format_ranking(&invites))
            .footer(CreateEmbedFooter::new(format!(
                "Showing top {} invites by usage",
                invites.len()
            )))
    };

    reply_embed(ctx, cmd, embed).await
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn medals_for_the_podium() {
        assert_eq!(rank_marker(0), "🥇");
        assert_eq!(rank_marker(1), "🥈");
        assert_eq!(rank_marker(2), "🥉");
        assert_eq!(rank_marker(3), "4.");
        assert_eq!(rank_marker(24), "25.");
    }
}
