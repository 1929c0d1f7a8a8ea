//! Redirectomator Test Utils
//!
//! Shared testing utilities for the invite tracking bot. This crate offers a builder for
//! creating test contexts backed by in-memory SQLite databases, factories for the invite
//! tables, and factories for the Serenity objects the bot receives from Discord.
//!
//! # Overview
//!
//! - **TestBuilder**: Fluent builder for configuring test environments
//! - **TestContext**: Test environment containing the database connection
//! - **TestError**: Error types that can occur during test setup
//! - **factory**: Database row factories with sensible defaults
//! - **serenity**: Serenity model factories built from JSON
//!
//! # Usage
//!
//! ```rust,ignore
//! use test_utils::{builder::TestBuilder, factory};
//!
//! #[tokio::test]
//! async fn test_invite_operations() -> Result<(), TestError> {
//!     let test = TestBuilder::new().with_invite_tables().build().await?;
//!     let db = test.db.as_ref().unwrap();
//!
//!     let invite = factory::create_invite(db, "123456789").await?;
//!     // Perform database operations...
//!
//!     Ok(())
//! }
//! ```

pub mod builder;
pub mod context;
pub mod error;
pub mod factory;
pub mod serenity;
