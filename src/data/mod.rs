//! Database repositories.
//!
//! Each repository borrows a `DatabaseConnection`, converts entity models into domain
//! models at the boundary and surfaces `DbErr` to the caller.

pub mod invite;
pub mod invite_use;
pub mod log_channel;

#[cfg(test)]
mod test;
