use serenity::all::ChannelType;

/// Channel kinds the bot creates invites in.
pub const INVITE_CHANNEL_TYPES: [ChannelType; 3] =
    [ChannelType::Text, ChannelType::News, ChannelType::Forum];

/// Channel kinds that accept messages directly, and so can receive invite logs.
///
/// Forum channels are excluded: messages there must be posted inside a thread.
pub const LOG_CHANNEL_TYPES: [ChannelType; 2] = [ChannelType::Text, ChannelType::News];

pub fn is_invite_channel(kind: ChannelType) -> bool {
    INVITE_CHANNEL_TYPES.contains(&kind)
}

pub fn is_log_channel(kind: ChannelType) -> bool {
    LOG_CHANNEL_TYPES.contains(&kind)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn invites_allowed_in_text_like_channels() {
        assert!(is_invite_channel(ChannelType::Text));
        assert!(is_invite_channel(ChannelType::News));
        assert!(is_invite_channel(ChannelType::Forum));
    }

    #[test]
    fn logs_only_go_to_channels_accepting_messages() {
        assert!(is_log_channel(ChannelType::Text));
        assert!(is_log_channel(ChannelType::News));
        assert!(!is_log_channel(ChannelType::Forum));
    }

    #[test]
    fn rejects_other_channels() {
        for kind in [ChannelType::Voice, ChannelType::Category, ChannelType::Stage] {
            assert!(!is_invite_channel(kind));
            assert!(!is_log_channel(kind));
        }
    }
}
