use std::time::Instant;

use serenity::all::{
    CommandInteraction, Context, CreateCommand, CreateEmbed, CreateInteractionResponse,
    CreateInteractionResponseMessage, EditInteractionResponse, Timestamp,
};

use crate::bot::command::EMBED_COLOR;
use crate::error::AppError;

pub const NAME: &str = "ping";
pub const DESCRIPTION: &str = "Replies with Pong! Shows bot latency.";

pub fn register() -> CreateCommand {
    CreateCommand::new(NAME).description(DESCRIPTION)
}

/// Replies, then edits the reply with the measured round trip.
pub async fn run(ctx: &Context, cmd: &CommandInteraction) -> Result<(), AppError> {
    let started = Instant::now();
    cmd.create_response(
        &ctx.http,
        CreateInteractionResponse::Message(
            CreateInteractionResponseMessage::new().content("Pinging..."),
        ),
    )
    .await?;
    let roundtrip = started.elapsed().as_millis();

    let embed = CreateEmbed::new()
        .color(EMBED_COLOR)
        .title("🏓 Pong!")
        .field("Roundtrip Latency", format!("{}ms", roundtrip), true)
        .timestamp(Timestamp::now());

    cmd.edit_response(
        &ctx.http,
        EditInteractionResponse::new().content("").embed(embed),
    )
    .await?;

    Ok(())
}
