use super::*;

/// Tests setting the log channel of a guild for the first time.
///
/// Expected: Ok(log_channel) with the given channel and log type ALL
#[tokio::test]
async fn inserts_new_configuration() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_invite_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = LogChannelRepository::new(db);
    let config = repo.upsert(1, 10, LogType::All).await?;

    assert_eq!(config.guild_id, 1);
    assert_eq!(config.channel_id, 10);
    assert_eq!(config.log_types, LogType::All);

    Ok(())
}

/// Tests replacing an existing log channel.
///
/// Verifies that the guild keeps a single configuration pointing at the new channel.
///
/// Expected: Ok(log_channel) with the new channel ID
#[tokio::test]
async fn replaces_existing_configuration() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_invite_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    factory::create_log_channel(db, "1", Some("10")).await?;

    let repo = LogChannelRepository::new(db);
    repo.upsert(1, 20, LogType::All).await?;

    let stored = repo.get_by_guild(1).await?.unwrap();
    assert_eq!(stored.channel_id, 20);

    Ok(())
}
