//! Join attribution: linking a joining member to the invite they used.
//!
//! The platform does not report which invite a member joined with, so attribution diffs
//! the guild's fresh invite list against the cached snapshot and picks the first invite
//! whose use count went up. This is best effort. Joins racing against the same stale
//! snapshot may all match one invite, and the first join after a restart in a guild
//! without a snapshot cannot be attributed.

use sea_orm::DatabaseConnection;

use crate::{
    data::invite::InviteRepository,
    error::AppError,
    model::{
        invite::Invite,
        log_event::InviteLogEvent,
        member::JoiningMember,
        snapshot::{InviteCount, InviteSnapshot},
    },
    service::{invite_cache::InviteCache, invite_log::InviteLogSink, invite_source::InviteSource},
};

/// Result of a single attribution attempt.
#[derive(Debug, Clone, PartialEq)]
pub enum AttributionOutcome {
    /// The tracked invite's counter was incremented; holds the updated invite.
    Attributed(Invite),
    /// The tracked invite had already reached its cap; its counter is unchanged.
    CapReached(Invite),
    /// The used invite is not tracked by the bot; holds its code.
    Untracked(String),
    /// No invite showed an increase, or there was no snapshot to compare against.
    NoMatch,
}

/// Finds the invite used by a join.
///
/// Returns the first invite, in fetch order, whose current use count is strictly greater
/// than its count in `prior`. Codes missing from `prior` never match.
pub fn find_used_invite<'c>(
    prior: &InviteSnapshot,
    current: &'c [InviteCount],
) -> Option<&'c InviteCount> {
    current.iter().find(|invite| {
        prior
            .uses(&invite.code)
            .is_some_and(|previous| invite.uses > previous)
    })
}

pub struct JoinAttributionService<'a, S: ?Sized, L: ?Sized> {
    db: &'a DatabaseConnection,
    cache: &'a InviteCache,
    source: &'a S,
    logger: &'a L,
}

impl<'a, S, L> JoinAttributionService<'a, S, L>
where
    S: InviteSource + ?Sized,
    L: InviteLogSink + ?Sized,
{
    pub fn new(
        db: &'a DatabaseConnection,
        cache: &'a InviteCache,
        source: &'a S,
        logger: &'a L,
    ) -> Self {
        Self {
            db,
            cache,
            source,
            logger,
        }
    }

    /// Attributes a member join to the invite it used.
    ///
    /// Steps run strictly in order: fetch the guild's invites, read the prior snapshot,
    /// diff, record the use, then replace the guild's snapshot with the fetched list.
    /// The snapshot is replaced whatever the outcome, including a failed store write,
    /// so drift cannot accumulate across joins.
    ///
    /// # Arguments
    /// - `guild_id` - Guild the member joined
    /// - `member` - Identity of the joining member
    ///
    /// # Returns
    /// - `Ok(AttributionOutcome)` - What the join was attributed to, if anything
    /// - `Err(AppError)` - Fetching invites failed (cache untouched) or the store failed
    ///   (cache refreshed)
    pub async fn attribute_join(
        &self,
        guild_id: u64,
        member: &JoiningMember,
    ) -> Result<AttributionOutcome, AppError> {
        let current = self.source.list_guild_invites(guild_id).await?;
        let prior = self.cache.snapshot(guild_id).await;

        let used = prior
            .as_ref()
            .and_then(|prior| find_used_invite(prior, &current));

        let outcome = match used {
            Some(invite) => self.record_use(guild_id, &invite.code, member).await,
            None => Ok(AttributionOutcome::NoMatch),
        };

        self.cache
            .replace_guild_snapshot(guild_id, InviteSnapshot::from_counts(&current))
            .await;

        outcome
    }

    async fn record_use(
        &self,
        guild_id: u64,
        code: &str,
        member: &JoiningMember,
    ) -> Result<AttributionOutcome, AppError> {
        let repo = InviteRepository::new(self.db);

        let Some(invite) = repo.get_by_code(code).await? else {
            tracing::debug!("Join in guild {} used untracked invite {}", guild_id, code);
            return Ok(AttributionOutcome::Untracked(code.to_string()));
        };

        let Some(updated) = repo
            .increment_uses(invite.id, member.user_id, &member.username)
            .await?
        else {
            tracing::info!(
                "Invite {} reached its cap of {:?}, not counting {}",
                invite.code,
                invite.max_uses,
                member.username
            );
            return Ok(AttributionOutcome::CapReached(invite));
        };

        tracing::info!("Tracked invite use: {} by {}", updated.code, member.username);

        self.logger
            .log_action(
                guild_id,
                InviteLogEvent::UserJoined {
                    user_id: member.user_id,
                    code: updated.code.clone(),
                    uses: updated.uses,
                    primary_source: updated.primary_source.clone(),
                    secondary_source: updated.secondary_source.clone(),
                },
            )
            .await;

        Ok(AttributionOutcome::Attributed(updated))
    }
}
