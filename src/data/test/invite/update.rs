use super::*;

/// Tests updating only the provided fields.
///
/// Expected: Ok(invite) with new sources and the untouched description preserved
#[tokio::test]
async fn updates_provided_fields() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_invite_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let created = factory::invite::InviteFactory::new(db, "1")
        .description(Some("keep me".to_string()))
        .max_uses(Some(5))
        .build()
        .await?;

    let repo = InviteRepository::new(db);
    let updated = repo
        .update(
            created.id,
            UpdateInviteParam {
                primary_source: Some("TikTok".to_string()),
                secondary_source: Some("Video".to_string()),
                ..Default::default()
            },
        )
        .await?;

    assert_eq!(updated.primary_source, "TikTok");
    assert_eq!(updated.secondary_source, "Video");
    assert_eq!(updated.description, Some("keep me".to_string()));
    assert_eq!(updated.max_uses, Some(5));

    Ok(())
}

/// Tests clearing the nullable fields.
///
/// Verifies that an explicit inner `None` clears the description and that a cap of
/// zero clears the cap.
///
/// Expected: Ok(invite) with description and max_uses cleared
#[tokio::test]
async fn clears_description_and_cap() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_invite_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let created = factory::invite::InviteFactory::new(db, "1")
        .description(Some("old".to_string()))
        .max_uses(Some(5))
        .build()
        .await?;

    let repo = InviteRepository::new(db);
    let updated = repo
        .update(
            created.id,
            UpdateInviteParam {
                description: Some(None),
                max_uses: Some(Some(0)),
                ..Default::default()
            },
        )
        .await?;

    assert!(updated.description.is_none());
    assert!(updated.max_uses.is_none());

    Ok(())
}

/// Tests updating an invite that does not exist.
///
/// Expected: Err(DbErr::RecordNotFound)
#[tokio::test]
async fn fails_for_missing_invite() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_invite_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = InviteRepository::new(db);
    let result = repo
        .update(
            999,
            UpdateInviteParam {
                primary_source: Some("X".to_string()),
                ..Default::default()
            },
        )
        .await;

    assert!(matches!(result, Err(DbErr::RecordNotFound(_))));

    Ok(())
}
