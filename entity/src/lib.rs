pub mod prelude;

pub mod invite;
pub mod invite_use;
pub mod log_channel;
