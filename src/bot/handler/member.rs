use serenity::all::{Context, Http, Member};

use crate::model::member::JoiningMember;
use crate::service::attribution::{AttributionOutcome, JoinAttributionService};
use crate::service::invite_log::DiscordInviteLogger;
use crate::state::BotState;

/// Handles the guild_member_addition event when a member joins a guild
///
/// Attribution is best effort: failures are logged and the join is otherwise ignored.
pub async fn handle_guild_member_addition(state: &BotState, ctx: Context, new_member: Member) {
    let guild_id = new_member.guild_id.get();
    let member = JoiningMember::from_member(&new_member);

    let http: &Http = &ctx.http;
    let logger = DiscordInviteLogger::new(&state.db, http);
    let service = JoinAttributionService::new(&state.db, &state.invite_cache, http, &logger);

    match service.attribute_join(guild_id, &member).await {
        Ok(AttributionOutcome::Attributed(_)) | Ok(AttributionOutcome::CapReached(_)) => {}
        Ok(AttributionOutcome::Untracked(code)) => {
            tracing::debug!(
                "{} joined guild {} through untracked invite {}",
                member.username,
                guild_id,
                code
            );
        }
        Ok(AttributionOutcome::NoMatch) => {
            tracing::debug!(
                "Could not attribute join of {} in guild {}",
                member.username,
                guild_id
            );
        }
        Err(e) => {
            tracing::error!(
                "Failed to attribute join of {} in guild {}: {}",
                member.username,
                guild_id,
                e
            );
        }
    }
}
