use serenity::all::{Command, CommandInteraction, Context, CreateCommand, CreateEmbed, Timestamp};

use crate::bot::command::{reply_embed, COMMANDS, EMBED_COLOR};
use crate::error::AppError;

pub const NAME: &str = "help";
pub const DESCRIPTION: &str = "Shows a list of available commands";

pub fn register() -> CreateCommand {
    CreateCommand::new(NAME).description(DESCRIPTION)
}

/// Lists every command, as a clickable mention when its registered ID is known.
///
/// # Arguments
/// - `registered` - Name and ID of each command registered with Discord
fn format_help(registered: &[(String, u64)]) -> String {
    COMMANDS
        .iter()
        .map(|(name, description)| {
            let mention = registered
                .iter()
                .find(|(registered_name, _)| registered_name == name)
                .map(|(_, id)| format!("</{}:{}>", name, id))
                .unwrap_or_else(|| format!("`/{}`", name));
            format!("{} - {}", mention, description)
        })
        .collect::<Vec<_>>()
        .join("\n\n")
}

pub async fn run(ctx: &Context, cmd: &CommandInteraction) -> Result<(), AppError> {
    let registered: Vec<(String, u64)> = match Command::get_global_commands(&ctx.http).await {
        Ok(commands) => commands
            .into_iter()
            .map(|command| (command.name, command.id.get()))
            .collect(),
        Err(e) => {
            tracing::warn!("Failed to fetch global commands: {}", e);
            Vec::new()
        }
    };

    let embed = CreateEmbed::new()
        .color(EMBED_COLOR)
        .title("Available Commands")
        .description(format_help(&registered))
        .timestamp(Timestamp::now());

    reply_embed(ctx, cmd, embed).await
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mentions_registered_commands() {
        let help = format_help(&[("create".to_string(), 123)]);

        assert!(help.starts_with("</create:123> - Create a new invite link with tracking"));
        assert!(help.contains("`/ping` - Replies with Pong! Shows bot latency."));
        assert_eq!(help.split("\n\n").count(), COMMANDS.len());
    }
}
