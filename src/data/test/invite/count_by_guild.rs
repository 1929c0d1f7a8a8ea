use super::*;

/// Tests counting the invites of a guild.
///
/// Expected: Ok(2) for the guild with two invites, Ok(0) for an unknown guild
#[tokio::test]
async fn counts_only_guild_invites() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_invite_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    factory::create_invite(db, "1").await?;
    factory::create_invite(db, "1").await?;
    factory::create_invite(db, "2").await?;

    let repo = InviteRepository::new(db);

    assert_eq!(repo.count_by_guild(1).await?, 2);
    assert_eq!(repo.count_by_guild(3).await?, 0);

    Ok(())
}
