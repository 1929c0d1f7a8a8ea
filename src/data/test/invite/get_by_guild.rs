use super::*;
use chrono::{Duration, Utc};
use sea_orm::{ActiveModelTrait, ActiveValue};

/// Tests listing the invites of a guild.
///
/// Verifies that only the guild's invites are returned, newest first.
///
/// Expected: Ok(vec) ordered by created_at descending
#[tokio::test]
async fn lists_guild_invites_newest_first() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_invite_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let older = factory::invite::InviteFactory::new(db, "1")
        .code("older")
        .build()
        .await?;
    let mut active: entity::invite::ActiveModel = older.into();
    active.created_at = ActiveValue::Set(Utc::now() - Duration::hours(1));
    active.update(db).await?;

    factory::invite::InviteFactory::new(db, "1")
        .code("newer")
        .build()
        .await?;
    factory::invite::InviteFactory::new(db, "2")
        .code("other-guild")
        .build()
        .await?;

    let repo = InviteRepository::new(db);
    let invites = repo.get_by_guild(1).await?;

    let codes: Vec<&str> = invites.iter().map(|i| i.code.as_str()).collect();
    assert_eq!(codes, vec!["newer", "older"]);

    Ok(())
}

/// Tests listing invites for a guild without any.
///
/// Expected: Ok(empty vec)
#[tokio::test]
async fn returns_empty_for_guild_without_invites() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_invite_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = InviteRepository::new(db);
    let invites = repo.get_by_guild(1).await?;

    assert!(invites.is_empty());

    Ok(())
}
