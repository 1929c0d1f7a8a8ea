//! Domain model for a single attributed join.

use chrono::{DateTime, Utc};
use sea_orm::DbErr;

/// A join attributed to a tracked invite.
#[derive(Debug, Clone, PartialEq)]
pub struct InviteUse {
    pub id: i32,
    pub invite_id: i32,
    pub user_id: u64,
    /// Username at the time of joining.
    pub username: String,
    pub used_at: DateTime<Utc>,
}

impl InviteUse {
    /// Converts an entity model to an invite use domain model at the repository boundary.
    pub fn from_entity(entity: entity::invite_use::Model) -> Result<Self, DbErr> {
        let user_id = entity
            .user_id
            .parse::<u64>()
            .map_err(|e| DbErr::Custom(format!("Failed to parse user_id: {}", e)))?;

        Ok(Self {
            id: entity.id,
            invite_id: entity.invite_id,
            user_id,
            username: entity.username,
            used_at: entity.used_at,
        })
    }
}
