//! Domain models for per-guild log channel configuration.

use sea_orm::DbErr;

/// Categories of log events a channel receives.
///
/// Only the catch-all category exists today.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LogType {
    #[default]
    All,
}

impl LogType {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::All => "ALL",
        }
    }

    /// Parses the stored column value, returning `None` for unknown values.
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "ALL" => Some(Self::All),
            _ => None,
        }
    }
}

/// Destination channel for a guild's invite logs.
#[derive(Debug, Clone, PartialEq)]
pub struct LogChannel {
    pub guild_id: u64,
    pub channel_id: u64,
    pub log_types: LogType,
}

impl LogChannel {
    /// Converts an entity model to a log channel domain model at the repository boundary.
    ///
    /// # Returns
    /// - `Ok(LogChannel)` - The converted configuration
    /// - `Err(DbErr::Custom)` - An ID failed to parse or the log type is unknown
    pub fn from_entity(entity: entity::log_channel::Model) -> Result<Self, DbErr> {
        let guild_id = entity
            .guild_id
            .parse::<u64>()
            .map_err(|e| DbErr::Custom(format!("Failed to parse guild_id: {}", e)))?;
        let channel_id = entity
            .channel_id
            .parse::<u64>()
            .map_err(|e| DbErr::Custom(format!("Failed to parse channel_id: {}", e)))?;
        let log_types = LogType::parse(&entity.log_types).ok_or_else(|| {
            DbErr::Custom(format!("Unknown log type '{}'", entity.log_types))
        })?;

        Ok(Self {
            guild_id,
            channel_id,
            log_types,
        })
    }
}
