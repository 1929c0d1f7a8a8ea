//! Test factories for creating Serenity API objects.
//!
//! These factories create valid Serenity structs by deserializing JSON, simulating
//! what Discord's API and gateway would deliver.
//!
//! # Available Factories
//!
//! - `invite::create_test_rich_invite` - Guild invite as returned by `GET /guilds/{id}/invites`
//! - `member::create_test_member` - Member payload of a `GUILD_MEMBER_ADD` event

pub mod invite;
pub mod member;

pub use invite::create_test_rich_invite;
pub use member::create_test_member;
