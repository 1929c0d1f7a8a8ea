//! In-memory invite snapshot cache used to detect which invite a member joined with.
//!
//! The cache holds the last observed use count of every invite in every guild. It is
//! a heuristic aid for diffing, not a source of truth: every mutation is last-writer-wins
//! and the whole guild entry is replaced after each join attribution.

use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::{model::snapshot::InviteSnapshot, service::invite_source::InviteSource};

/// Shared per-guild invite snapshots.
///
/// Cloning is cheap and every clone refers to the same underlying map.
#[derive(Clone, Default)]
pub struct InviteCache {
    guilds: Arc<RwLock<HashMap<u64, InviteSnapshot>>>,
}

impl InviteCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Fetches the guild's invites and stores them as the guild's snapshot.
    ///
    /// Fetch failures are logged and leave any existing entry untouched, so a guild that
    /// failed at startup simply has no entry until its next successful refresh.
    ///
    /// # Arguments
    /// - `guild_id` - Discord guild ID
    /// - `source` - Invite listing to fetch from
    ///
    /// # Returns
    /// - `true` - The snapshot was stored
    /// - `false` - The fetch failed
    pub async fn initialize_for_guild<S>(&self, guild_id: u64, source: &S) -> bool
    where
        S: InviteSource + ?Sized,
    {
        match source.list_guild_invites(guild_id).await {
            Ok(counts) => {
                let snapshot = InviteSnapshot::from_counts(&counts);
                tracing::debug!("Cached {} invites for guild {}", snapshot.len(), guild_id);
                self.replace_guild_snapshot(guild_id, snapshot).await;
                true
            }
            Err(e) => {
                tracing::warn!("Failed to cache invites for guild {}: {}", guild_id, e);
                false
            }
        }
    }

    /// Inserts or overwrites a single invite's count, creating the guild entry if needed.
    pub async fn record_created(&self, guild_id: u64, code: impl Into<String>, uses: u64) {
        let mut guilds = self.guilds.write().await;
        guilds.entry(guild_id).or_default().insert(code, uses);
    }

    /// Removes a single invite from the guild's snapshot.
    pub async fn record_deleted(&self, guild_id: u64, code: &str) {
        let mut guilds = self.guilds.write().await;
        if let Some(snapshot) = guilds.get_mut(&guild_id) {
            snapshot.remove(code);
        }
    }

    /// Replaces the guild's whole snapshot.
    pub async fn replace_guild_snapshot(&self, guild_id: u64, snapshot: InviteSnapshot) {
        self.guilds.write().await.insert(guild_id, snapshot);
    }

    /// Number of guilds with a cached snapshot.
    pub async fn guild_count(&self) -> usize {
        self.guilds.read().await.len()
    }

    /// Returns a copy of the guild's snapshot, or `None` if the guild was never cached.
    pub async fn snapshot(&self, guild_id: u64) -> Option<InviteSnapshot> {
        self.guilds.read().await.get(&guild_id).cloned()
    }
}
