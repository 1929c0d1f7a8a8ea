use super::*;

/// Tests ranking a guild's invites by use count.
///
/// Verifies ordering by uses descending and that the limit is applied.
///
/// Expected: Ok(vec) with the two most used invites
#[tokio::test]
async fn returns_most_used_invites() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_invite_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    for (code, uses) in [("low", 1), ("high", 30), ("mid", 12)] {
        factory::invite::InviteFactory::new(db, "1")
            .code(code)
            .uses(uses)
            .build()
            .await?;
    }
    factory::invite::InviteFactory::new(db, "2")
        .code("elsewhere")
        .uses(100)
        .build()
        .await?;

    let repo = InviteRepository::new(db);
    let top = repo.get_top_by_guild(1, 2).await?;

    let codes: Vec<&str> = top.iter().map(|i| i.code.as_str()).collect();
    assert_eq!(codes, vec!["high", "mid"]);

    Ok(())
}
