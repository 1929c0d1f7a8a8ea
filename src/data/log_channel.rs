use migration::OnConflict;
use sea_orm::{ActiveValue, DatabaseConnection, DbErr, EntityTrait};

use crate::model::log_channel::{LogChannel, LogType};

pub struct LogChannelRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> LogChannelRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Sets the log channel of a guild, replacing any existing configuration.
    ///
    /// # Arguments
    /// - `guild_id` - Discord guild ID
    /// - `channel_id` - Discord channel ID receiving the logs
    /// - `log_types` - Categories of events to send
    ///
    /// # Returns
    /// - `Ok(LogChannel)` - The stored configuration
    /// - `Err(DbErr)` - Database error during upsert
    pub async fn upsert(
        &self,
        guild_id: u64,
        channel_id: u64,
        log_types: LogType,
    ) -> Result<LogChannel, DbErr> {
        let entity = entity::prelude::LogChannel::insert(entity::log_channel::ActiveModel {
            guild_id: ActiveValue::Set(guild_id.to_string()),
            channel_id: ActiveValue::Set(channel_id.to_string()),
            log_types: ActiveValue::Set(log_types.as_str().to_string()),
        })
        .on_conflict(
            OnConflict::column(entity::log_channel::Column::GuildId)
                .update_columns([
                    entity::log_channel::Column::ChannelId,
                    entity::log_channel::Column::LogTypes,
                ])
                .to_owned(),
        )
        .exec_with_returning(self.db)
        .await?;

        LogChannel::from_entity(entity)
    }

    pub async fn get_by_guild(&self, guild_id: u64) -> Result<Option<LogChannel>, DbErr> {
        entity::prelude::LogChannel::find_by_id(guild_id.to_string())
            .one(self.db)
            .await?
            .map(LogChannel::from_entity)
            .transpose()
    }
}
