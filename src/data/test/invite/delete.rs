use super::*;

/// Tests deleting an invite with recorded uses.
///
/// Verifies that the invite and all of its use records are removed while other
/// invites keep their history.
///
/// Expected: Ok(true), no remaining use records for the invite
#[tokio::test]
async fn deletes_invite_and_uses() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_invite_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (invite, _) = factory::create_invite_with_uses(db, "1", 3).await?;
    let (other, _) = factory::create_invite_with_uses(db, "1", 2).await?;

    let repo = InviteRepository::new(db);
    let deleted = repo.delete(invite.id).await?;

    assert!(deleted);
    assert!(entity::prelude::Invite::find_by_id(invite.id)
        .one(db)
        .await?
        .is_none());

    let remaining = entity::prelude::InviteUse::find()
        .filter(entity::invite_use::Column::InviteId.eq(invite.id))
        .count(db)
        .await?;
    assert_eq!(remaining, 0);

    let other_uses = entity::prelude::InviteUse::find()
        .filter(entity::invite_use::Column::InviteId.eq(other.id))
        .count(db)
        .await?;
    assert_eq!(other_uses, 2);

    Ok(())
}

/// Tests deleting an invite that does not exist.
///
/// Expected: Ok(false)
#[tokio::test]
async fn returns_false_for_missing_invite() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_invite_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = InviteRepository::new(db);

    assert!(!repo.delete(42).await?);

    Ok(())
}
