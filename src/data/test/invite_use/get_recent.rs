use super::*;
use chrono::{Duration, Utc};

/// Tests reading the most recent uses of an invite.
///
/// Verifies newest-first ordering, the limit, and that other invites' uses are
/// excluded.
///
/// Expected: Ok(vec) with the two newest uses
#[tokio::test]
async fn returns_newest_uses_first() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_invite_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let invite = factory::create_invite(db, "1").await?;
    let other = factory::create_invite(db, "1").await?;
    let now = Utc::now();

    for (name, minutes_ago) in [("oldest", 30), ("newest", 1), ("middle", 10)] {
        factory::invite_use::InviteUseFactory::new(db, invite.id)
            .user("1", name)
            .used_at(now - Duration::minutes(minutes_ago))
            .build()
            .await?;
    }
    factory::create_invite_use(db, other.id).await?;

    let repo = InviteUseRepository::new(db);
    let uses = repo.get_recent(invite.id, 2).await?;

    let names: Vec<&str> = uses.iter().map(|u| u.username.as_str()).collect();
    assert_eq!(names, vec!["newest", "middle"]);
    assert!(uses.iter().all(|u| u.invite_id == invite.id));

    Ok(())
}

/// Tests reading uses of an invite without any.
///
/// Expected: Ok(empty vec)
#[tokio::test]
async fn returns_empty_without_uses() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_invite_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let invite = factory::create_invite(db, "1").await?;

    let repo = InviteUseRepository::new(db);

    assert!(repo.get_recent(invite.id, 10).await?.is_empty());

    Ok(())
}
