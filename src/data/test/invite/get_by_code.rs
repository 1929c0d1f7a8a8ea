use super::*;

/// Tests finding a tracked invite by code.
///
/// Expected: Ok(Some(invite))
#[tokio::test]
async fn finds_tracked_code() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_invite_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let created = factory::invite::InviteFactory::new(db, "123")
        .code("findme")
        .sources("YouTube", "Video")
        .build()
        .await?;

    let repo = InviteRepository::new(db);
    let invite = repo.get_by_code("findme").await?;

    assert!(invite.is_some());
    let invite = invite.unwrap();
    assert_eq!(invite.id, created.id);
    assert_eq!(invite.guild_id, 123);
    assert_eq!(invite.primary_source, "YouTube");
    assert_eq!(invite.secondary_source, "Video");

    Ok(())
}

/// Tests looking up a code that is not tracked.
///
/// Expected: Ok(None)
#[tokio::test]
async fn returns_none_for_untracked_code() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_invite_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    factory::create_invite(db, "123").await?;

    let repo = InviteRepository::new(db);
    let invite = repo.get_by_code("missing").await?;

    assert!(invite.is_none());

    Ok(())
}

/// Tests that a row with an unparsable guild ID surfaces a conversion error.
///
/// Expected: Err(DbErr::Custom)
#[tokio::test]
async fn fails_on_invalid_stored_id() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_invite_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    factory::invite::InviteFactory::new(db, "not-a-number")
        .code("broken")
        .build()
        .await?;

    let repo = InviteRepository::new(db);
    let result = repo.get_by_code("broken").await;

    assert!(matches!(result, Err(DbErr::Custom(_))));

    Ok(())
}
