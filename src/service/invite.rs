//! Invite management for the slash command layer.
//!
//! Validates command input, resolves invite codes within the invoking guild and keeps
//! the autocomplete cache in step with every write. Discord API calls (creating the
//! platform invite, replying) stay in the command handlers.

use sea_orm::DatabaseConnection;

use crate::{
    data::{invite::InviteRepository, invite_use::InviteUseRepository},
    error::AppError,
    model::{
        invite::{CreateInviteParam, Invite, UpdateInviteParam},
        invite_use::InviteUse,
    },
    service::autocomplete::AutocompleteCache,
    util::parse::parse_invite_code,
};

/// Largest cap accepted for a new invite; Discord rejects higher `max_uses`.
pub const MAX_USES_LIMIT: i64 = 100;
pub const DEFAULT_TOP_LIMIT: i64 = 10;
pub const MAX_TOP_LIMIT: i64 = 25;
/// Number of recent uses shown by `/lookup`.
pub const RECENT_USES_LIMIT: u64 = 10;

pub struct InviteService<'a> {
    db: &'a DatabaseConnection,
    autocomplete: &'a AutocompleteCache,
}

impl<'a> InviteService<'a> {
    pub fn new(db: &'a DatabaseConnection, autocomplete: &'a AutocompleteCache) -> Self {
        Self { db, autocomplete }
    }

    /// Validates a `max_uses` option.
    ///
    /// # Returns
    /// - `Ok(None)` - No cap, either omitted or zero
    /// - `Ok(Some(n))` - Cap of `n` uses
    /// - `Err(AppError::BadRequest)` - Value outside 0..=100
    pub fn validate_max_uses(max_uses: Option<i64>) -> Result<Option<i32>, AppError> {
        match max_uses {
            None | Some(0) => Ok(None),
            Some(n) if (1..=MAX_USES_LIMIT).contains(&n) => Ok(Some(n as i32)),
            Some(_) => Err(AppError::BadRequest(format!(
                "Max uses must be between 0 and {}.",
                MAX_USES_LIMIT
            ))),
        }
    }

    /// Stores a newly created platform invite.
    ///
    /// # Returns
    /// - `Ok((invite, total))` - The stored invite and the guild's total tracked invites
    /// - `Err(AppError::DbErr)` - Database error, including a duplicate code
    pub async fn create(&self, param: CreateInviteParam) -> Result<(Invite, u64), AppError> {
        let repo = InviteRepository::new(self.db);
        let guild_id = param.guild_id;

        let invite = repo.create(param).await?;
        self.autocomplete.invalidate(guild_id).await;
        let total = repo.count_by_guild(guild_id).await?;

        Ok((invite, total))
    }

    /// Resolves user input to an invite tracked in the given guild.
    ///
    /// # Arguments
    /// - `guild_id` - Guild the command was used in
    /// - `code_input` - Bare code or invite link
    ///
    /// # Returns
    /// - `Ok(Invite)` - The tracked invite
    /// - `Err(AppError::NotFound)` - The code is not tracked
    /// - `Err(AppError::BadRequest)` - The invite belongs to another guild
    pub async fn get_guild_invite(&self, guild_id: u64, code_input: &str) -> Result<Invite, AppError> {
        let code = parse_invite_code(code_input);

        let invite = InviteRepository::new(self.db)
            .get_by_code(code)
            .await?
            .ok_or_else(|| {
                AppError::NotFound(
                    "Invite code not found. Make sure you're using a code created with `/create`."
                        .to_string(),
                )
            })?;

        if invite.guild_id != guild_id {
            return Err(AppError::BadRequest(
                "This invite belongs to a different server.".to_string(),
            ));
        }

        Ok(invite)
    }

    /// Stops tracking an invite and removes its use history.
    ///
    /// # Returns
    /// - `Ok(Invite)` - The invite as it was before deletion
    pub async fn delete(&self, guild_id: u64, code_input: &str) -> Result<Invite, AppError> {
        let invite = self.get_guild_invite(guild_id, code_input).await?;

        InviteRepository::new(self.db).delete(invite.id).await?;
        self.autocomplete.invalidate(guild_id).await;

        Ok(invite)
    }

    /// Edits the labels, description or cap of a tracked invite.
    ///
    /// # Returns
    /// - `Ok(Invite)` - The updated invite
    /// - `Err(AppError::BadRequest)` - No field to change was provided
    pub async fn edit(
        &self,
        guild_id: u64,
        code_input: &str,
        param: UpdateInviteParam,
    ) -> Result<Invite, AppError> {
        let invite = self.get_guild_invite(guild_id, code_input).await?;

        if param.is_empty() {
            return Err(AppError::BadRequest(
                "Please provide at least one field to update.".to_string(),
            ));
        }

        let updated = InviteRepository::new(self.db)
            .update(invite.id, param)
            .await?;
        self.autocomplete.invalidate(guild_id).await;

        Ok(updated)
    }

    /// Gets an invite with its most recent uses.
    pub async fn lookup(
        &self,
        guild_id: u64,
        code_input: &str,
    ) -> Result<(Invite, Vec<InviteUse>), AppError> {
        let invite = self.get_guild_invite(guild_id, code_input).await?;
        let uses = InviteUseRepository::new(self.db)
            .get_recent(invite.id, RECENT_USES_LIMIT)
            .await?;

        Ok((invite, uses))
    }

    pub async fn list(&self, guild_id: u64) -> Result<Vec<Invite>, AppError> {
        Ok(InviteRepository::new(self.db).get_by_guild(guild_id).await?)
    }

    /// Gets the guild's most used invites.
    ///
    /// # Arguments
    /// - `limit` - Requested count, 1..=25, defaulting to 10
    pub async fn top(&self, guild_id: u64, limit: Option<i64>) -> Result<Vec<Invite>, AppError> {
        let limit = limit.unwrap_or(DEFAULT_TOP_LIMIT);
        if !(1..=MAX_TOP_LIMIT).contains(&limit) {
            return Err(AppError::BadRequest(format!(
                "Limit must be between 1 and {}.",
                MAX_TOP_LIMIT
            )));
        }

        Ok(InviteRepository::new(self.db)
            .get_top_by_guild(guild_id, limit as u64)
            .await?)
    }

    /// Gets the guild's invites for autocomplete, served from the short-lived cache.
    pub async fn autocomplete_invites(&self, guild_id: u64) -> Result<Vec<Invite>, AppError> {
        Ok(self.autocomplete.get_or_load(self.db, guild_id).await?)
    }
}
