use super::*;

/// Tests reading a configured log channel.
///
/// Expected: Ok(Some(log_channel))
#[tokio::test]
async fn finds_configured_channel() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_invite_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    factory::create_log_channel(db, "1", Some("10")).await?;

    let repo = LogChannelRepository::new(db);
    let config = repo.get_by_guild(1).await?;

    assert_eq!(config.map(|c| c.channel_id), Some(10));

    Ok(())
}

/// Tests reading the log channel of an unconfigured guild.
///
/// Expected: Ok(None)
#[tokio::test]
async fn returns_none_when_unconfigured() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_invite_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    factory::create_log_channel(db, "2", None).await?;

    let repo = LogChannelRepository::new(db);

    assert!(repo.get_by_guild(1).await?.is_none());

    Ok(())
}
