pub use super::invite::Entity as Invite;
pub use super::invite_use::Entity as InviteUse;
pub use super::log_channel::Entity as LogChannel;
