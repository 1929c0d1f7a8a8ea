//! Point-in-time invite usage as observed on the platform.

use serenity::all::RichInvite;
use std::collections::HashMap;

/// Use count of a single platform invite, as returned by the invite listing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InviteCount {
    pub code: String,
    pub uses: u64,
}

impl InviteCount {
    pub fn new(code: impl Into<String>, uses: u64) -> Self {
        Self {
            code: code.into(),
            uses,
        }
    }

    pub fn from_rich_invite(invite: &RichInvite) -> Self {
        Self::new(invite.code.clone(), invite.uses)
    }
}

/// Mapping of invite code to last-known use count for one guild.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct InviteSnapshot {
    uses: HashMap<String, u64>,
}

impl InviteSnapshot {
    /// Builds a snapshot from a fetched invite list.
    ///
    /// Later duplicates of a code overwrite earlier ones.
    pub fn from_counts(counts: &[InviteCount]) -> Self {
        Self {
            uses: counts
                .iter()
                .map(|count| (count.code.clone(), count.uses))
                .collect(),
        }
    }

    /// Last-known use count for `code`, if the code was observed.
    pub fn uses(&self, code: &str) -> Option<u64> {
        self.uses.get(code).copied()
    }

    pub fn insert(&mut self, code: impl Into<String>, uses: u64) {
        self.uses.insert(code.into(), uses);
    }

    pub fn remove(&mut self, code: &str) -> Option<u64> {
        self.uses.remove(code)
    }

    pub fn len(&self) -> usize {
        self.uses.len()
    }
}
