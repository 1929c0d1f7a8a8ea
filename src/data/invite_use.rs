use sea_orm::{ColumnTrait, DatabaseConnection, DbErr, EntityTrait, QueryFilter, QueryOrder, QuerySelect};

use crate::model::invite_use::InviteUse;

/// Repository for reading an invite's use history.
///
/// Use records are written by `InviteRepository::increment_uses` so the cap check and
/// the history stay consistent.
pub struct InviteUseRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> InviteUseRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Gets the most recent uses of an invite, newest first.
    ///
    /// # Arguments
    /// - `invite_id` - Invite ID
    /// - `limit` - Maximum number of records to return
    ///
    /// # Returns
    /// - `Ok(Vec<InviteUse>)` - Use records ordered by `used_at` descending
    /// - `Err(DbErr)` - Database error during query
    pub async fn get_recent(&self, invite_id: i32, limit: u64) -> Result<Vec<InviteUse>, DbErr> {
        entity::prelude::InviteUse::find()
            .filter(entity::invite_use::Column::InviteId.eq(invite_id))
            .order_by_desc(entity::invite_use::Column::UsedAt)
            .order_by_desc(entity::invite_use::Column::Id)
            .limit(limit)
            .all(self.db)
            .await?
            .into_iter()
            .map(InviteUse::from_entity)
            .collect()
    }
}
