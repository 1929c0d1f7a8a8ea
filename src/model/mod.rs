//! Domain models and parameter types.
//!
//! Domain models are converted from entity models at the repository boundary, so the
//! service and bot layers work with parsed Discord IDs (`u64`) instead of the string
//! columns used for storage.

pub mod invite;
pub mod invite_use;
pub mod log_channel;
pub mod log_event;
pub mod member;
pub mod snapshot;
