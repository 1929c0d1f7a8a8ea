//! Invite data repository for database operations.
//!
//! This module provides the `InviteRepository` for managing tracked invite records,
//! including the conditional use-count increment performed during join attribution.

use chrono::Utc;
use sea_orm::{
    sea_query::{Expr, ExprTrait},
    ActiveModelTrait, ActiveValue, ColumnTrait, Condition, DatabaseConnection, DbErr,
    EntityTrait, PaginatorTrait, QueryFilter, QueryOrder, QuerySelect, TransactionTrait,
};

use crate::model::invite::{normalize_max_uses, CreateInviteParam, Invite, UpdateInviteParam};

/// Repository providing database operations for tracked invites.
pub struct InviteRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> InviteRepository<'a> {
    /// Creates a new InviteRepository instance.
    ///
    /// # Arguments
    /// - `db` - Reference to the database connection
    ///
    /// # Returns
    /// - `InviteRepository` - New repository instance
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Stores a newly created platform invite.
    ///
    /// The use counter starts at zero and a cap of zero is stored as "no cap".
    ///
    /// # Arguments
    /// - `param` - Invite details captured when the platform invite was created
    ///
    /// # Returns
    /// - `Ok(Invite)` - The stored invite with generated ID
    /// - `Err(DbErr)` - Database error, including a duplicate invite code
    pub async fn create(&self, param: CreateInviteParam) -> Result<Invite, DbErr> {
        let entity = entity::invite::ActiveModel {
            code: ActiveValue::Set(param.code),
            guild_id: ActiveValue::Set(param.guild_id.to_string()),
            channel_id: ActiveValue::Set(param.channel_id.to_string()),
            channel_name: ActiveValue::Set(param.channel_name),
            primary_source: ActiveValue::Set(param.primary_source),
            secondary_source: ActiveValue::Set(param.secondary_source),
            description: ActiveValue::Set(param.description),
            uses: ActiveValue::Set(0),
            max_uses: ActiveValue::Set(normalize_max_uses(param.max_uses)),
            created_at: ActiveValue::Set(Utc::now()),
            created_by: ActiveValue::Set(param.created_by.to_string()),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Invite::from_entity(entity)
    }

    /// Finds an invite by its platform invite code.
    ///
    /// # Returns
    /// - `Ok(Some(Invite))` - The code is tracked
    /// - `Ok(None)` - No tracked invite has this code
    /// - `Err(DbErr)` - Database error during query
    pub async fn get_by_code(&self, code: &str) -> Result<Option<Invite>, DbErr> {
        entity::prelude::Invite::find()
            .filter(entity::invite::Column::Code.eq(code))
            .one(self.db)
            .await?
            .map(Invite::from_entity)
            .transpose()
    }

    /// Gets every tracked invite of a guild, newest first.
    ///
    /// # Arguments
    /// - `guild_id` - Discord guild ID
    ///
    /// # Returns
    /// - `Ok(Vec<Invite>)` - Invites ordered by creation time descending
    /// - `Err(DbErr)` - Database error during query
    pub async fn get_by_guild(&self, guild_id: u64) -> Result<Vec<Invite>, DbErr> {
        entity::prelude::Invite::find()
            .filter(entity::invite::Column::GuildId.eq(guild_id.to_string()))
            .order_by_desc(entity::invite::Column::CreatedAt)
            .order_by_desc(entity::invite::Column::Id)
            .all(self.db)
            .await?
            .into_iter()
            .map(Invite::from_entity)
            .collect()
    }

    /// Gets the most used invites of a guild.
    ///
    /// # Arguments
    /// - `guild_id` - Discord guild ID
    /// - `limit` - Maximum number of invites to return
    ///
    /// # Returns
    /// - `Ok(Vec<Invite>)` - Invites ordered by `uses` descending, oldest first on ties
    /// - `Err(DbErr)` - Database error during query
    pub async fn get_top_by_guild(&self, guild_id: u64, limit: u64) -> Result<Vec<Invite>, DbErr> {
        entity::prelude::Invite::find()
            .filter(entity::invite::Column::GuildId.eq(guild_id.to_string()))
            .order_by_desc(entity::invite::Column::Uses)
            .order_by_asc(entity::invite::Column::Id)
            .limit(limit)
            .all(self.db)
            .await?
            .into_iter()
            .map(Invite::from_entity)
            .collect()
    }

    pub async fn count_by_guild(&self, guild_id: u64) -> Result<u64, DbErr> {
        entity::prelude::Invite::find()
            .filter(entity::invite::Column::GuildId.eq(guild_id.to_string()))
            .count(self.db)
            .await
    }

    /// Updates the editable fields of an invite.
    ///
    /// Only fields present in `param` are written. A cap of zero clears the cap.
    ///
    /// # Arguments
    /// - `id` - Invite ID
    /// - `param` - Fields to change
    ///
    /// # Returns
    /// - `Ok(Invite)` - The updated invite
    /// - `Err(DbErr::RecordNotFound)` - No invite exists with the specified ID
    /// - `Err(DbErr)` - Other database error during update
    pub async fn update(&self, id: i32, param: UpdateInviteParam) -> Result<Invite, DbErr> {
        let invite = entity::prelude::Invite::find_by_id(id)
            .one(self.db)
            .await?
            .ok_or(DbErr::RecordNotFound(format!(
                "Invite with id {} not found",
                id
            )))?;

        if param.is_empty() {
            return Invite::from_entity(invite);
        }

        let mut active_model: entity::invite::ActiveModel = invite.into();
        if let Some(primary_source) = param.primary_source {
            active_model.primary_source = ActiveValue::Set(primary_source);
        }
        if let Some(secondary_source) = param.secondary_source {
            active_model.secondary_source = ActiveValue::Set(secondary_source);
        }
        if let Some(description) = param.description {
            active_model.description = ActiveValue::Set(description);
        }
        if let Some(max_uses) = param.max_uses {
            active_model.max_uses = ActiveValue::Set(normalize_max_uses(max_uses));
        }

        let entity = active_model.update(self.db).await?;

        Invite::from_entity(entity)
    }

    /// Deletes an invite together with its use history.
    ///
    /// Use records are removed explicitly in the same transaction so the cleanup does
    /// not rely on SQLite foreign key enforcement being enabled.
    ///
    /// # Returns
    /// - `Ok(true)` - The invite existed and was deleted
    /// - `Ok(false)` - No invite exists with the specified ID
    /// - `Err(DbErr)` - Database error; nothing was deleted
    pub async fn delete(&self, id: i32) -> Result<bool, DbErr> {
        let txn = self.db.begin().await?;

        entity::prelude::InviteUse::delete_many()
            .filter(entity::invite_use::Column::InviteId.eq(id))
            .exec(&txn)
            .await?;
        let result = entity::prelude::Invite::delete_by_id(id).exec(&txn).await?;

        txn.commit().await?;

        Ok(result.rows_affected > 0)
    }

    /// Atomically records one use of an invite unless its cap has been reached.
    ///
    /// The cap check and increment are a single `UPDATE` guarded by
    /// `max_uses IS NULL OR uses < max_uses`, so two concurrent joins cannot both pass
    /// the check. The use record is appended in the same transaction.
    ///
    /// # Arguments
    /// - `id` - Invite ID
    /// - `user_id` - Discord ID of the joining user
    /// - `username` - Username of the joining user
    ///
    /// # Returns
    /// - `Ok(Some(Invite))` - The invite after the increment
    /// - `Ok(None)` - The cap is reached or the invite no longer exists; nothing changed
    /// - `Err(DbErr)` - Database error; the transaction is rolled back
    pub async fn increment_uses(
        &self,
        id: i32,
        user_id: u64,
        username: &str,
    ) -> Result<Option<Invite>, DbErr> {
        let txn = self.db.begin().await?;

        let result = entity::prelude::Invite::update_many()
            .col_expr(
                entity::invite::Column::Uses,
                Expr::col(entity::invite::Column::Uses).add(1),
            )
            .filter(entity::invite::Column::Id.eq(id))
            .filter(
                Condition::any()
                    .add(entity::invite::Column::MaxUses.is_null())
                    .add(
                        Expr::col(entity::invite::Column::Uses)
                            .lt(Expr::col(entity::invite::Column::MaxUses)),
                    ),
            )
            .exec(&txn)
            .await?;

        if result.rows_affected == 0 {
            txn.rollback().await?;
            return Ok(None);
        }

        entity::invite_use::ActiveModel {
            invite_id: ActiveValue::Set(id),
            user_id: ActiveValue::Set(user_id.to_string()),
            username: ActiveValue::Set(username.to_string()),
            used_at: ActiveValue::Set(Utc::now()),
            ..Default::default()
        }
        .insert(&txn)
        .await?;

        let entity = entity::prelude::Invite::find_by_id(id)
            .one(&txn)
            .await?
            .ok_or(DbErr::RecordNotFound(format!(
                "Invite with id {} not found",
                id
            )))?;

        txn.commit().await?;

        Invite::from_entity(entity).map(Some)
    }
}
