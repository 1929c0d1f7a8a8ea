use tracing::Level;

use crate::error::{config::ConfigError, AppError};

/// Log level used when `LOG_LEVEL` is not set.
const DEFAULT_LOG_LEVEL: Level = Level::INFO;

pub struct Config {
    pub database_url: String,

    pub discord_bot_token: String,

    pub log_level: Level,
}

impl Config {
    pub fn from_env() -> Result<Self, AppError> {
        Ok(Self {
            database_url: std::env::var("DATABASE_URL")
                .map_err(|_| ConfigError::MissingEnvVar("DATABASE_URL".to_string()))?,
            discord_bot_token: std::env::var("DISCORD_BOT_TOKEN")
                .map_err(|_| ConfigError::MissingEnvVar("DISCORD_BOT_TOKEN".to_string()))?,
            log_level: match std::env::var("LOG_LEVEL") {
                Ok(value) => parse_log_level(&value)?,
                Err(_) => DEFAULT_LOG_LEVEL,
            },
        })
    }
}

/// Parses a `LOG_LEVEL` value such as `debug` or `WARN`.
fn parse_log_level(value: &str) -> Result<Level, ConfigError> {
    value
        .trim()
        .parse::<Level>()
        .map_err(|e| ConfigError::InvalidEnvVar {
            name: "LOG_LEVEL".to_string(),
            reason: e.to_string(),
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_log_levels_case_insensitively() {
        assert_eq!(parse_log_level("debug").unwrap(), Level::DEBUG);
        assert_eq!(parse_log_level(" WARN ").unwrap(), Level::WARN);
    }

    #[test]
    fn rejects_unknown_log_level() {
        let err = parse_log_level("loud").unwrap_err();
        assert!(matches!(err, ConfigError::InvalidEnvVar { ref name, .. } if name == "LOG_LEVEL"));
    }
}
