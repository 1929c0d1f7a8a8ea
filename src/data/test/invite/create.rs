use super::*;

fn param(code: &str, max_uses: Option<i32>) -> CreateInviteParam {
    CreateInviteParam {
        code: code.to_string(),
        guild_id: 123456789,
        channel_id: 555,
        channel_name: "welcome".to_string(),
        primary_source: "Instagram".to_string(),
        secondary_source: "Story".to_string(),
        description: Some("summer campaign".to_string()),
        max_uses,
        created_by: 42,
    }
}

/// Tests creating a tracked invite.
///
/// Verifies that all fields are stored and the use counter starts at zero.
///
/// Expected: Ok(invite) with uses == 0
#[tokio::test]
async fn creates_invite() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_invite_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = InviteRepository::new(db);
    let invite = repo.create(param("abcDEF", Some(10))).await?;

    assert_eq!(invite.code, "abcDEF");
    assert_eq!(invite.guild_id, 123456789);
    assert_eq!(invite.channel_id, 555);
    assert_eq!(invite.channel_name, "welcome");
    assert_eq!(invite.description, Some("summer campaign".to_string()));
    assert_eq!(invite.uses, 0);
    assert_eq!(invite.max_uses, Some(10));
    assert_eq!(invite.created_by, 42);

    Ok(())
}

/// Tests that a cap of zero is stored as no cap.
///
/// Expected: Ok(invite) with max_uses == None
#[tokio::test]
async fn stores_zero_cap_as_unlimited() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_invite_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = InviteRepository::new(db);
    let invite = repo.create(param("nocap", Some(0))).await?;

    assert!(invite.max_uses.is_none());

    Ok(())
}

/// Tests creating an invite whose code is already tracked.
///
/// Verifies that the unique constraint on `code` rejects the duplicate.
///
/// Expected: Err(DbErr)
#[tokio::test]
async fn rejects_duplicate_code() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_invite_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = InviteRepository::new(db);
    repo.create(param("dup", None)).await?;
    let result = repo.create(param("dup", None)).await;

    assert!(result.is_err());

    Ok(())
}
