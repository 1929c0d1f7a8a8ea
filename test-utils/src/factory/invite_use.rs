//! Invite use factory for creating attribution history rows.

use crate::factory::helpers::next_id;
use chrono::{DateTime, Utc};
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test invite use records.
pub struct InviteUseFactory<'a> {
    db: &'a DatabaseConnection,
    invite_id: i32,
    user_id: String,
    username: String,
    used_at: DateTime<Utc>,
}

impl<'a> InviteUseFactory<'a> {
    /// Creates a new InviteUseFactory for the given invite.
    ///
    /// Defaults:
    /// - user_id: `"{id}"` where id is auto-incremented
    /// - username: `"user{id}"`
    /// - used_at: now
    pub fn new(db: &'a DatabaseConnection, invite_id: i32) -> Self {
        let id = next_id();
        Self {
            db,
            invite_id,
            user_id: (500_000 + id).to_string(),
            username: format!("user{}", id),
            used_at: Utc::now(),
        }
    }

    pub fn user(mut self, user_id: impl Into<String>, username: impl Into<String>) -> Self {
        self.user_id = user_id.into();
        self.username = username.into();
        self
    }

    pub fn used_at(mut self, used_at: DateTime<Utc>) -> Self {
        self.used_at = used_at;
        self
    }

    pub async fn build(self) -> Result<entity::invite_use::Model, DbErr> {
        entity::invite_use::ActiveModel {
            invite_id: ActiveValue::Set(self.invite_id),
            user_id: ActiveValue::Set(self.user_id),
            username: ActiveValue::Set(self.username),
            used_at: ActiveValue::Set(self.used_at),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Creates a use record with default values for the given invite.
pub async fn create_invite_use(
    db: &DatabaseConnection,
    invite_id: i32,
) -> Result<entity::invite_use::Model, DbErr> {
    InviteUseFactory::new(db, invite_id).build().await
}
