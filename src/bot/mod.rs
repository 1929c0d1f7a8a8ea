//! Discord gateway integration.
//!
//! The bot keeps the invite snapshot cache in step with invite create and delete
//! events, attributes member joins to tracked invites and serves the slash commands
//! used to manage those invites.
//!
//! # Gateway Intents
//!
//! - `GUILDS` - Guild availability and the bot joining new guilds
//! - `GUILD_MEMBERS` - Member join events (privileged intent)
//! - `GUILD_INVITES` - Invite create and delete events
//!
//! Note: `GUILD_MEMBERS` is a privileged intent and must be explicitly enabled
//! in the Discord Developer Portal for the bot application. Listing a guild's invites
//! additionally requires the Manage Server permission in that guild.

pub mod command;
pub mod handler;
pub mod start;
