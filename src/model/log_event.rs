//! Events delivered to a guild's log channel.

/// Kind of invite action being logged.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogAction {
    Created,
    Deleted,
    UserJoined,
}

impl LogAction {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Created => "created",
            Self::Deleted => "deleted",
            Self::UserJoined => "user_joined",
        }
    }
}

/// Payload of a single log message.
#[derive(Debug, Clone, PartialEq)]
pub enum InviteLogEvent {
    /// An invite was created, or edited when `actor` is marked as such.
    Created {
        code: String,
        channel_id: u64,
        primary_source: String,
        secondary_source: String,
        description: Option<String>,
        /// Mention or label of whoever performed the action.
        actor: String,
    },
    Deleted {
        code: String,
        primary_source: String,
        secondary_source: String,
        uses: i32,
        actor: String,
    },
    /// A joining member was attributed to a tracked invite.
    UserJoined {
        user_id: u64,
        code: String,
        /// Durable use count after the increment.
        uses: i32,
        primary_source: String,
        secondary_source: String,
    },
}

impl InviteLogEvent {
    pub fn action(&self) -> LogAction {
        match self {
            Self::Created { .. } => LogAction::Created,
            Self::Deleted { .. } => LogAction::Deleted,
            Self::UserJoined { .. } => LogAction::UserJoined,
        }
    }
}
