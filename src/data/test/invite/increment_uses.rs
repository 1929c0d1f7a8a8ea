use super::*;
use sea_orm::DatabaseConnection;

async fn stored_uses(db: &DatabaseConnection, invite_id: i32) -> Result<i32, DbErr> {
    let invite = entity::prelude::Invite::find_by_id(invite_id)
        .one(db)
        .await?
        .ok_or(DbErr::RecordNotFound(invite_id.to_string()))?;

    Ok(invite.uses)
}

/// Tests incrementing an uncapped invite.
///
/// Verifies that the counter grows by exactly one and a use record is appended.
///
/// Expected: Ok(Some(invite)) with uses == prior + 1
#[tokio::test]
async fn increments_uncapped_invite() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_invite_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let created = factory::invite::InviteFactory::new(db, "1")
        .uses(2)
        .build()
        .await?;

    let repo = InviteRepository::new(db);
    let updated = repo.increment_uses(created.id, 777, "newcomer").await?;

    assert!(updated.is_some());
    assert_eq!(updated.unwrap().uses, 3);

    let uses = entity::prelude::InviteUse::find()
        .filter(entity::invite_use::Column::InviteId.eq(created.id))
        .all(db)
        .await?;
    assert_eq!(uses.len(), 1);
    assert_eq!(uses[0].user_id, "777");
    assert_eq!(uses[0].username, "newcomer");

    Ok(())
}

/// Tests incrementing an invite one below its cap.
///
/// Expected: Ok(Some(invite)) with uses == max_uses
#[tokio::test]
async fn increments_up_to_cap() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_invite_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let created = factory::invite::InviteFactory::new(db, "1")
        .uses(4)
        .max_uses(Some(5))
        .build()
        .await?;

    let repo = InviteRepository::new(db);
    let updated = repo.increment_uses(created.id, 1, "user").await?;

    assert_eq!(updated.map(|i| i.uses), Some(5));

    Ok(())
}

/// Tests incrementing an invite whose cap has been reached.
///
/// Verifies that the call is a no-op: the counter is unchanged and no use record is
/// written.
///
/// Expected: Ok(None)
#[tokio::test]
async fn refuses_capped_invite() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_invite_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let created = factory::invite::InviteFactory::new(db, "1")
        .uses(5)
        .max_uses(Some(5))
        .build()
        .await?;

    let repo = InviteRepository::new(db);
    let updated = repo.increment_uses(created.id, 1, "user").await?;

    assert!(updated.is_none());
    assert_eq!(stored_uses(db, created.id).await?, 5);

    let uses = entity::prelude::InviteUse::find()
        .filter(entity::invite_use::Column::InviteId.eq(created.id))
        .count(db)
        .await?;
    assert_eq!(uses, 0);

    Ok(())
}

/// Tests incrementing an invite that does not exist.
///
/// Expected: Ok(None)
#[tokio::test]
async fn returns_none_for_missing_invite() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_invite_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = InviteRepository::new(db);

    assert!(repo.increment_uses(999, 1, "user").await?.is_none());

    Ok(())
}

/// Tests repeated increments against a cap.
///
/// Verifies that the counter never exceeds the cap however many joins arrive.
///
/// Expected: exactly two successful increments for a cap of two
#[tokio::test]
async fn never_exceeds_cap() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_invite_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let created = factory::invite::InviteFactory::new(db, "1")
        .max_uses(Some(2))
        .build()
        .await?;

    let repo = InviteRepository::new(db);
    let mut accepted = 0;
    for user_id in 0..5u64 {
        if repo.increment_uses(created.id, user_id, "user").await?.is_some() {
            accepted += 1;
        }
    }

    assert_eq!(accepted, 2);
    assert_eq!(stored_uses(db, created.id).await?, 2);

    Ok(())
}

/// Tests simultaneous joins racing for the last use below a cap.
///
/// Verifies that the guarded update lets exactly one of several concurrent
/// increments through when the invite is one use short of its cap.
///
/// Expected: one Some, the rest None, uses == max_uses
#[tokio::test]
async fn concurrent_joins_respect_cap() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_invite_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let created = factory::invite::InviteFactory::new(db, "1")
        .uses(4)
        .max_uses(Some(5))
        .build()
        .await?;

    let repo = InviteRepository::new(db);
    let (first, second, third) = tokio::join!(
        repo.increment_uses(created.id, 101, "first"),
        repo.increment_uses(created.id, 102, "second"),
        repo.increment_uses(created.id, 103, "third"),
    );

    let accepted = [first?, second?, third?]
        .iter()
        .filter(|result| result.is_some())
        .count();

    assert_eq!(accepted, 1);
    assert_eq!(stored_uses(db, created.id).await?, 5);

    let uses = entity::prelude::InviteUse::find()
        .filter(entity::invite_use::Column::InviteId.eq(created.id))
        .count(db)
        .await?;
    assert_eq!(uses, 1);

    Ok(())
}
