use serenity::all::{Context, Interaction};

use crate::bot::command;
use crate::state::BotState;

/// Routes slash commands and autocomplete requests
pub async fn handle_interaction(state: &BotState, ctx: Context, interaction: Interaction) {
    match interaction {
        Interaction::Command(cmd) => command::handle_command(state, &ctx, &cmd).await,
        Interaction::Autocomplete(ac) => {
            command::autocomplete::handle_autocomplete(state, &ctx, &ac).await
        }
        _ => {}
    }
}
