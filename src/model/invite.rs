//! Domain models for tracked invites.

use chrono::{DateTime, Utc};
use sea_orm::DbErr;

/// An invite link created through the bot and tracked in the database.
#[derive(Debug, Clone, PartialEq)]
pub struct Invite {
    pub id: i32,
    /// Platform-assigned invite code, unique across Discord.
    pub code: String,
    pub guild_id: u64,
    pub channel_id: u64,
    /// Channel name captured when the invite was created.
    pub channel_name: String,
    pub primary_source: String,
    pub secondary_source: String,
    pub description: Option<String>,
    /// Joins attributed to this invite. Never exceeds `max_uses` when a cap is set.
    pub uses: i32,
    pub max_uses: Option<i32>,
    pub created_at: DateTime<Utc>,
    /// Discord ID of the user who ran `/create`.
    pub created_by: u64,
}

impl Invite {
    /// Converts an entity model to an invite domain model at the repository boundary.
    ///
    /// # Arguments
    /// - `entity` - The entity model from the database
    ///
    /// # Returns
    /// - `Ok(Invite)` - The converted invite
    /// - `Err(DbErr::Custom)` - A stored Discord ID failed to parse as u64
    pub fn from_entity(entity: entity::invite::Model) -> Result<Self, DbErr> {
        Ok(Self {
            id: entity.id,
            code: entity.code,
            guild_id: parse_id("guild_id", &entity.guild_id)?,
            channel_id: parse_id("channel_id", &entity.channel_id)?,
            channel_name: entity.channel_name,
            primary_source: entity.primary_source,
            secondary_source: entity.secondary_source,
            description: entity.description,
            uses: entity.uses,
            max_uses: entity.max_uses,
            created_at: entity.created_at,
            created_by: parse_id("created_by", &entity.created_by)?,
        })
    }

    /// Human readable source label, e.g. `Instagram → Story (summer campaign)`.
    pub fn source_label(&self) -> String {
        match &self.description {
            Some(description) => format!(
                "{} → {} ({})",
                self.primary_source, self.secondary_source, description
            ),
            None => format!("{} → {}", self.primary_source, self.secondary_source),
        }
    }
}

fn parse_id(column: &str, value: &str) -> Result<u64, DbErr> {
    value
        .parse::<u64>()
        .map_err(|e| DbErr::Custom(format!("Failed to parse {}: {}", column, e)))
}

/// Parameters for storing a newly created platform invite.
#[derive(Debug, Clone)]
pub struct CreateInviteParam {
    pub code: String,
    pub guild_id: u64,
    pub channel_id: u64,
    pub channel_name: String,
    pub primary_source: String,
    pub secondary_source: String,
    pub description: Option<String>,
    /// `None` or `Some(0)` both mean "no cap".
    pub max_uses: Option<i32>,
    pub created_by: u64,
}

/// Parameters for editing a tracked invite.
///
/// Outer `None` leaves a field untouched; for the nullable fields an inner `None`
/// clears the stored value.
#[derive(Debug, Clone, Default)]
pub struct UpdateInviteParam {
    pub primary_source: Option<String>,
    pub secondary_source: Option<String>,
    pub description: Option<Option<String>>,
    pub max_uses: Option<Option<i32>>,
}

impl UpdateInviteParam {
    /// Returns true when no field would change.
    pub fn is_empty(&self) -> bool {
        self.primary_source.is_none()
            && self.secondary_source.is_none()
            && self.description.is_none()
            && self.max_uses.is_none()
    }
}

/// Normalizes a cap so that zero and negative values mean "unlimited".
pub fn normalize_max_uses(max_uses: Option<i32>) -> Option<i32> {
    max_uses.filter(|max| *max > 0)
}
