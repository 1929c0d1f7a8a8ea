//! Autocomplete responses for command options.

use serenity::all::{
    CommandInteraction, Context, CreateAutocompleteResponse, CreateInteractionResponse,
};

use crate::bot::command::lookup;
use crate::error::AppError;
use crate::model::invite::Invite;
use crate::service::autocomplete::{
    invite_choice_name, suggest_invites, suggest_sources, PRIMARY_SOURCES, SECONDARY_SOURCES,
};
use crate::service::invite::InviteService;
use crate::state::BotState;
use crate::util::text::{truncate, CHOICE_NAME_LIMIT};

/// A single `(name, value)` autocomplete choice.
type Choice = (String, String);

fn placeholder(name: &str, value: &str) -> Vec<Choice> {
    vec![(name.to_string(), value.to_string())]
}

/// Builds invite code choices from the guild's tracked invites.
fn invite_choices(invites: Vec<Invite>, input: &str, with_uses: bool) -> Vec<Choice> {
    if invites.is_empty() {
        return placeholder("No invites found. Create one with /create", "no_invites");
    }

    let choices: Vec<Choice> = suggest_invites(invites, input)
        .iter()
        .map(|invite| {
            (
                truncate(&invite_choice_name(invite, with_uses), CHOICE_NAME_LIMIT),
                invite.code.clone(),
            )
        })
        .collect();

    if choices.is_empty() {
        return placeholder("No matching invites found", "no_match");
    }

    choices
}

async fn code_choices(
    state: &BotState,
    cmd: &CommandInteraction,
    input: &str,
) -> Result<Vec<Choice>, AppError> {
    let Some(guild_id) = cmd.guild_id else {
        return Ok(placeholder(
            "This command can only be used in a server",
            "no_guild",
        ));
    };

    let invites = InviteService::new(&state.db, &state.autocomplete)
        .autocomplete_invites(guild_id.get())
        .await?;

    Ok(invite_choices(
        invites,
        input,
        cmd.data.name == lookup::NAME,
    ))
}

fn source_choices(sources: &[&str], input: &str) -> Vec<Choice> {
    suggest_sources(sources, input)
        .into_iter()
        .map(|source| (source.clone(), source))
        .collect()
}

/// Responds to an autocomplete request for the focused option.
pub async fn handle_autocomplete(state: &BotState, ctx: &Context, cmd: &CommandInteraction) {
    let Some(focused) = cmd.data.autocomplete() else {
        return;
    };

    let choices = match focused.name {
        "primary_source" => source_choices(PRIMARY_SOURCES, focused.value),
        "secondary_source" => source_choices(SECONDARY_SOURCES, focused.value),
        "code" => match code_choices(state, cmd, focused.value).await {
            Ok(choices) => choices,
            Err(e) => {
                tracing::error!("Failed to load invite suggestions: {}", e);
                Vec::new()
            }
        },
        _ => return,
    };

    let response = choices
        .into_iter()
        .fold(CreateAutocompleteResponse::new(), |response, (name, value)| {
            response.add_string_choice(name, value)
        });

    if let Err(e) = cmd
        .create_response(&ctx.http, CreateInteractionResponse::Autocomplete(response))
        .await
    {
        tracing::debug!("Failed to send autocomplete response: {}", e);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    fn invite(code: &str, primary: &str, secondary: &str, uses: i32) -> Invite {
        Invite {
            id: 1,
            code: code.to_string(),
            guild_id: 1,
            channel_id: 2,
            channel_name: "general".to_string(),
            primary_source: primary.to_string(),
            secondary_source: secondary.to_string(),
            description: None,
            uses,
            max_uses: None,
            created_at: Utc::now(),
            created_by: 3,
        }
    }

    #[test]
    fn placeholder_when_guild_has_no_invites() {
        assert_eq!(
            invite_choices(Vec::new(), "", false),
            placeholder("No invites found. Create one with /create", "no_invites")
        );
    }

    #[test]
    fn placeholder_when_nothing_matches() {
        let invites = vec![invite("abc", "Instagram", "Story", 0)];

        assert_eq!(
            invite_choices(invites, "zzz", false),
            placeholder("No matching invites found", "no_match")
        );
    }

    #[test]
    fn matches_code_and_sources() {
        let invites = vec![
            invite("abc", "Instagram", "Story", 3),
            invite("xyz", "YouTube", "Video", 7),
        ];

        let choices = invite_choices(invites, "youtube", true);

        assert_eq!(
            choices,
            vec![(
                "YouTube → Video (.gg/xyz) - 7 uses".to_string(),
                "xyz".to_string()
            )]
        );
    }

    #[test]
    fn source_choices_use_name_as_value() {
        let choices = source_choices(PRIMARY_SOURCES, "insta");

        assert_eq!(
            choices,
            vec![("Instagram".to_string(), "Instagram".to_string())]
        );
    }
}
