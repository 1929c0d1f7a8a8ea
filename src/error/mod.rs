//! Error types and command reply mapping.
//!
//! This module provides the bot's error hierarchy. `AppError` is the top-level error
//! type that wraps domain-specific errors. Event handlers log errors and carry on;
//! slash commands turn them into a user-facing reply through `AppError::user_message`.

pub mod config;

use thiserror::Error;

use crate::error::config::ConfigError;

/// Message shown to command users when an unexpected error occurs.
const GENERIC_ERROR_MESSAGE: &str = "Something went wrong. Please try again.";

/// Top-level application error type.
///
/// Aggregates all possible error types that can occur in the bot. Most variants use
/// `#[from]` for automatic error conversion with `?`.
#[derive(Error, Debug)]
pub enum AppError {
    /// Configuration error during startup or environment variable loading.
    #[error(transparent)]
    ConfigErr(#[from] ConfigError),

    /// Database operation error from SeaORM.
    #[error(transparent)]
    DbErr(#[from] sea_orm::DbErr),

    /// Discord API error from Serenity.
    ///
    /// Boxed due to large size.
    #[error(transparent)]
    DiscordErr(#[from] Box<serenity::Error>),

    /// Resource not found error.
    ///
    /// The message is shown to the command user as-is.
    #[error("{0}")]
    NotFound(String),

    /// Invalid request error.
    ///
    /// The message is shown to the command user as-is.
    #[error("{0}")]
    BadRequest(String),
}

/// Manual conversion from serenity::Error to AppError.
///
/// Boxes the error to reduce the size of the AppError enum, as serenity::Error
/// is very large and would make all AppError variants larger if not boxed.
impl From<serenity::Error> for AppError {
    fn from(err: serenity::Error) -> Self {
        AppError::DiscordErr(Box::new(err))
    }
}

impl AppError {
    /// Converts the error into the message shown to a slash command user.
    ///
    /// `NotFound` and `BadRequest` carry messages written for the user and are returned
    /// unchanged. Every other variant is logged with full details and replaced by a
    /// generic message to avoid leaking internals into the guild.
    ///
    /// # Returns
    /// - `String` - Text for an ephemeral error reply
    pub fn user_message(&self) -> String {
        match self {
            Self::NotFound(msg) | Self::BadRequest(msg) => format!("❌ {}", msg),
            err => {
                tracing::error!("Command failed: {}", err);
                format!("❌ {}", GENERIC_ERROR_MESSAGE)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn shows_user_facing_messages_verbatim() {
        let err = AppError::NotFound("Invite code not found.".to_string());
        assert_eq!(err.user_message(), "❌ Invite code not found.");

        let err = AppError::BadRequest("Please select a text channel.".to_string());
        assert_eq!(err.user_message(), "❌ Please select a text channel.");
    }

    #[test]
    fn hides_internal_errors() {
        let err = AppError::DbErr(sea_orm::DbErr::Custom("disk I/O error".to_string()));
        let message = err.user_message();

        assert!(!message.contains("disk"));
        assert_eq!(message, format!("❌ {}", GENERIC_ERROR_MESSAGE));
    }
}
