//! Invite factory for creating tracked invite rows.

use crate::factory::helpers::next_id;
use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test invites with customizable fields.
///
/// # Example
///
/// ```rust,ignore
/// use test_utils::factory::invite::InviteFactory;
///
/// let invite = InviteFactory::new(&db, "123456789")
///     .code("abcDEF")
///     .uses(4)
///     .max_uses(Some(5))
///     .build()
///     .await?;
/// ```
pub struct InviteFactory<'a> {
    db: &'a DatabaseConnection,
    code: String,
    guild_id: String,
    channel_id: String,
    channel_name: String,
    primary_source: String,
    secondary_source: String,
    description: Option<String>,
    uses: i32,
    max_uses: Option<i32>,
    created_by: String,
}

impl<'a> InviteFactory<'a> {
    /// Creates a new InviteFactory with default values.
    ///
    /// Defaults:
    /// - code: `"code{id}"` where id is auto-incremented
    /// - channel_id / channel_name: `"{id}"` / `"general"`
    /// - primary_source / secondary_source: `"Instagram"` / `"Link in Bio"`
    /// - uses: `0`, max_uses: `None`, description: `None`
    pub fn new(db: &'a DatabaseConnection, guild_id: impl Into<String>) -> Self {
        let id = next_id();
        Self {
            db,
            code: format!("code{}", id),
            guild_id: guild_id.into(),
            channel_id: (100_000 + id).to_string(),
            channel_name: "general".to_string(),
            primary_source: "Instagram".to_string(),
            secondary_source: "Link in Bio".to_string(),
            description: None,
            uses: 0,
            max_uses: None,
            created_by: (900_000 + id).to_string(),
        }
    }

    pub fn code(mut self, code: impl Into<String>) -> Self {
        self.code = code.into();
        self
    }

    pub fn channel(mut self, channel_id: impl Into<String>, channel_name: impl Into<String>) -> Self {
        self.channel_id = channel_id.into();
        self.channel_name = channel_name.into();
        self
    }

    pub fn sources(mut self, primary: impl Into<String>, secondary: impl Into<String>) -> Self {
        self.primary_source = primary.into();
        self.secondary_source = secondary.into();
        self
    }

    pub fn description(mut self, description: Option<String>) -> Self {
        self.description = description;
        self
    }

    pub fn uses(mut self, uses: i32) -> Self {
        self.uses = uses;
        self
    }

    pub fn max_uses(mut self, max_uses: Option<i32>) -> Self {
        self.max_uses = max_uses;
        self
    }

    pub fn created_by(mut self, created_by: impl Into<String>) -> Self {
        self.created_by = created_by.into();
        self
    }

    /// Builds and inserts the invite entity into the database.
    ///
    /// # Returns
    /// - `Ok(entity::invite::Model)` - Created invite entity
    /// - `Err(DbErr)` - Database error during insert
    pub async fn build(self) -> Result<entity::invite::Model, DbErr> {
        entity::invite::ActiveModel {
            code: ActiveValue::Set(self.code),
            guild_id: ActiveValue::Set(self.guild_id),
            channel_id: ActiveValue::Set(self.channel_id),
            channel_name: ActiveValue::Set(self.channel_name),
            primary_source: ActiveValue::Set(self.primary_source),
            secondary_source: ActiveValue::Set(self.secondary_source),
            description: ActiveValue::Set(self.description),
            uses: ActiveValue::Set(self.uses),
            max_uses: ActiveValue::Set(self.max_uses),
            created_at: ActiveValue::Set(Utc::now()),
            created_by: ActiveValue::Set(self.created_by),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Creates an invite with default values in the given guild.
///
/// Shorthand for `InviteFactory::new(db, guild_id).build().await`.
pub async fn create_invite(
    db: &DatabaseConnection,
    guild_id: &str,
) -> Result<entity::invite::Model, DbErr> {
    InviteFactory::new(db, guild_id).build().await
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::builder::TestBuilder;
    use entity::prelude::*;

    #[tokio::test]
    async fn creates_invite_with_defaults() -> Result<(), DbErr> {
        let test = TestBuilder::new().with_table(Invite).build().await.unwrap();
        let db = test.db.as_ref().unwrap();

        let invite = create_invite(db, "123").await?;

        assert!(invite.code.starts_with("code"));
        assert_eq!(invite.guild_id, "123");
        assert_eq!(invite.uses, 0);
        assert!(invite.max_uses.is_none());

        Ok(())
    }

    #[tokio::test]
    async fn creates_multiple_unique_invites() -> Result<(), DbErr> {
        let test = TestBuilder::new().with_table(Invite).build().await.unwrap();
        let db = test.db.as_ref().unwrap();

        let first = create_invite(db, "123").await?;
        let second = create_invite(db, "123").await?;

        assert_ne!(first.code, second.code);
        assert_ne!(first.id, second.id);

        Ok(())
    }
}
