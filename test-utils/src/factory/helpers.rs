//! Shared helper utilities for factory methods.

use sea_orm::{DatabaseConnection, DbErr};

/// Counter for generating unique IDs in tests.
///
/// This atomic counter ensures each factory-created entity gets a unique
/// identifier to prevent collisions in tests.
static COUNTER: std::sync::atomic::AtomicU64 = std::sync::atomic::AtomicU64::new(1);

/// Gets the next unique counter value for test data.
///
/// # Returns
/// - `u64` - Next unique counter value
pub fn next_id() -> u64 {
    COUNTER.fetch_add(1, std::sync::atomic::Ordering::SeqCst)
}

/// Creates a tracked invite together with `count` recorded uses.
///
/// The invite's `uses` counter is set to `count` so the row matches its use history.
///
/// # Arguments
/// - `db` - Database connection
/// - `guild_id` - Discord guild ID the invite belongs to
/// - `count` - Number of use records to create
///
/// # Returns
/// - `Ok((invite, uses))` - The invite and its use records, oldest first
/// - `Err(DbErr)` - Database error during creation
pub async fn create_invite_with_uses(
    db: &DatabaseConnection,
    guild_id: &str,
    count: i32,
) -> Result<(entity::invite::Model, Vec<entity::invite_use::Model>), DbErr> {
    let invite = crate::factory::invite::InviteFactory::new(db, guild_id)
        .uses(count)
        .build()
        .await?;

    let mut uses = Vec::with_capacity(count as usize);
    for _ in 0..count {
        uses.push(crate::factory::invite_use::create_invite_use(db, invite.id).await?);
    }

    Ok((invite, uses))
}
