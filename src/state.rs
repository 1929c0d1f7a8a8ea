//! Shared state handed to every gateway event and interaction.
//!
//! The state is built once at startup. Cloning is cheap: the database connection is a
//! pool handle and both caches share their maps behind `Arc`.

use std::time::Instant;

use sea_orm::DatabaseConnection;

use crate::service::{autocomplete::AutocompleteCache, invite_cache::InviteCache};

#[derive(Clone)]
pub struct BotState {
    /// Database connection pool.
    pub db: DatabaseConnection,
    /// Last observed invite use counts per guild, used for join attribution.
    pub invite_cache: InviteCache,
    /// Short-lived per-guild invite lists for command autocomplete.
    pub autocomplete: AutocompleteCache,
    /// When the process started, reported as uptime by `/dev info`.
    pub started_at: Instant,
}

impl BotState {
    pub fn new(db: DatabaseConnection) -> Self {
        Self {
            db,
            invite_cache: InviteCache::new(),
            autocomplete: AutocompleteCache::new(),
            started_at: Instant::now(),
        }
    }
}
