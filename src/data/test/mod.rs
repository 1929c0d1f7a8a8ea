mod invite;
mod invite_use;
mod log_channel;
