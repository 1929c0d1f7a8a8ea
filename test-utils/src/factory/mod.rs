//! Factory methods for creating test data.
//!
//! Each table has its own factory module with either a `Factory` struct for
//! customization or a `create_*` convenience function for quick default creation.
//!
//! ```rust,ignore
//! use test_utils::factory;
//!
//! let invite = factory::invite::InviteFactory::new(&db, "123456789")
//!     .code("summer")
//!     .max_uses(Some(10))
//!     .build()
//!     .await?;
//! let use_record = factory::create_invite_use(&db, invite.id).await?;
//! factory::create_log_channel(&db, "123456789", None).await?;
//! ```

pub mod helpers;
pub mod invite;
pub mod invite_use;
pub mod log_channel;

pub use helpers::create_invite_with_uses;
pub use invite::create_invite;
pub use invite_use::create_invite_use;
pub use log_channel::create_log_channel;
