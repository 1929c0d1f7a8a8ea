//! Autocomplete suggestions for slash command options.
//!
//! Source suggestions come from fixed lists. Invite code suggestions come from the
//! guild's tracked invites, cached per guild for a short time since autocomplete fires
//! on every keystroke.

use sea_orm::{DatabaseConnection, DbErr};
use std::collections::HashMap;
use std::sync::Arc;
use std::time::{Duration, Instant};
use tokio::sync::RwLock;

use crate::{data::invite::InviteRepository, model::invite::Invite};

/// Time-to-live for cached guild invite lists in seconds.
const AUTOCOMPLETE_TTL_SECONDS: u64 = 30;

/// Discord's limit on autocomplete choices per response.
pub const MAX_CHOICES: usize = 25;

pub const PRIMARY_SOURCES: &[&str] = &[
    "Instagram", "Twitter", "YouTube", "TikTok", "Facebook", "Reddit", "Discord", "Telegram",
    "LinkedIn", "Website", "Email", "Other",
];

pub const SECONDARY_SOURCES: &[&str] = &[
    "Link in Bio",
    "Post",
    "Story",
    "Reel",
    "Video",
    "Comment",
    "DM",
    "Message",
    "Profile",
    "About Me",
    "Navigation Link",
    "Button",
    "Support Button",
    "Help Embed",
    "Information Embed",
    "Overview Page",
    "Homepage",
    "Other",
];

const PREFIX_SCORE: u8 = 100;
const CONTAINS_SCORE: u8 = 50;

/// Filters and ranks autocomplete candidates against the user's input.
///
/// Matching is a case-insensitive substring test. Prefix matches rank above other
/// matches and equal scores are ordered alphabetically. An empty input keeps the
/// original order.
///
/// # Arguments
/// - `items` - Candidates in their default order
/// - `input` - Text typed so far
/// - `text` - Searchable text of a candidate
/// - `limit` - Maximum number of results
///
/// # Returns
/// - `Vec<T>` - Matching candidates, best first
pub fn filter_autocomplete<T, F>(items: Vec<T>, input: &str, text: F, limit: usize) -> Vec<T>
where
    F: Fn(&T) -> String,
{
    if input.is_empty() {
        return items.into_iter().take(limit).collect();
    }

    let needle = input.to_lowercase();
    let mut scored: Vec<(u8, String, T)> = items
        .into_iter()
        .filter_map(|item| {
            let haystack = text(&item).to_lowercase();
            let score = if haystack.starts_with(&needle) {
                PREFIX_SCORE
            } else if haystack.contains(&needle) {
                CONTAINS_SCORE
            } else {
                return None;
            };
            Some((score, haystack, item))
        })
        .collect();

    scored.sort_by(|a, b| b.0.cmp(&a.0).then_with(|| a.1.cmp(&b.1)));

    scored
        .into_iter()
        .take(limit)
        .map(|(_, _, item)| item)
        .collect()
}

/// Suggests fixed source names.
pub fn suggest_sources(sources: &[&str], input: &str) -> Vec<String> {
    let items = sources.iter().map(|s| s.to_string()).collect();
    filter_autocomplete(items, input, |s| s.clone(), MAX_CHOICES)
}

/// Suggests tracked invites by code and sources.
pub fn suggest_invites(invites: Vec<Invite>, input: &str) -> Vec<Invite> {
    filter_autocomplete(
        invites,
        input,
        |invite| {
            format!(
                "{} {} {}",
                invite.code, invite.primary_source, invite.secondary_source
            )
        },
        MAX_CHOICES,
    )
}

/// Display name of an invite suggestion, optionally with its use count.
pub fn invite_choice_name(invite: &Invite, with_uses: bool) -> String {
    let name = format!(
        "{} → {} (.gg/{})",
        invite.primary_source, invite.secondary_source, invite.code
    );
    if with_uses {
        format!("{} - {} uses", name, invite.uses)
    } else {
        name
    }
}

#[derive(Clone)]
struct CachedInvites {
    invites: Vec<Invite>,
    expires_at: Instant,
}

/// Short-lived per-guild cache of tracked invites for autocomplete.
#[derive(Clone)]
pub struct AutocompleteCache {
    guilds: Arc<RwLock<HashMap<u64, CachedInvites>>>,
    ttl: Duration,
}

impl AutocompleteCache {
    pub fn new() -> Self {
        Self::with_ttl(Duration::from_secs(AUTOCOMPLETE_TTL_SECONDS))
    }

    pub fn with_ttl(ttl: Duration) -> Self {
        Self {
            guilds: Arc::new(RwLock::new(HashMap::new())),
            ttl,
        }
    }

    /// Returns the guild's invites, loading them from the database when the cached
    /// list is missing or expired.
    pub async fn get_or_load(
        &self,
        db: &DatabaseConnection,
        guild_id: u64,
    ) -> Result<Vec<Invite>, DbErr> {
        if let Some(cached) = self.guilds.read().await.get(&guild_id) {
            if Instant::now() < cached.expires_at {
                return Ok(cached.invites.clone());
            }
        }

        let invites = InviteRepository::new(db).get_by_guild(guild_id).await?;
        self.guilds.write().await.insert(
            guild_id,
            CachedInvites {
                invites: invites.clone(),
                expires_at: Instant::now() + self.ttl,
            },
        );

        Ok(invites)
    }

    /// Drops the guild's cached list so the next lookup reads the database.
    pub async fn invalidate(&self, guild_id: u64) {
        self.guilds.write().await.remove(&guild_id);
    }
}

impl Default for AutocompleteCache {
    fn default() -> Self {
        Self::new()
    }
}
