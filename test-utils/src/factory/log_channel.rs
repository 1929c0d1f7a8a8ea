//! Log channel factory for creating per-guild log destinations.

use crate::factory::helpers::next_id;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Creates a log channel row routing all log types for `guild_id`.
///
/// The channel ID is generated unless one is provided.
///
/// # Arguments
/// - `db` - Database connection
/// - `guild_id` - Discord guild ID the configuration applies to
/// - `channel_id` - Optional destination channel ID
///
/// # Returns
/// - `Ok(entity::log_channel::Model)` - Created log channel entity
/// - `Err(DbErr)` - Database error during insert (e.g. the guild already has one)
pub async fn create_log_channel(
    db: &DatabaseConnection,
    guild_id: &str,
    channel_id: Option<&str>,
) -> Result<entity::log_channel::Model, DbErr> {
    let channel_id = channel_id
        .map(str::to_string)
        .unwrap_or_else(|| (700_000 + next_id()).to_string());

    entity::log_channel::ActiveModel {
        guild_id: ActiveValue::Set(guild_id.to_string()),
        channel_id: ActiveValue::Set(channel_id),
        log_types: ActiveValue::Set("ALL".to_string()),
    }
    .insert(db)
    .await
}
