//! Business logic services.
//!
//! Services sit between the bot handlers and the repositories. Long-lived shared state
//! (`InviteCache`, `AutocompleteCache`) is owned by `BotState` and borrowed by the
//! per-event services.

pub mod attribution;
pub mod autocomplete;
pub mod invite;
pub mod invite_cache;
pub mod invite_log;
pub mod invite_source;
