use super::*;

/// Expected: Ok(Some) for a stored email
#[tokio::test]
async fn finds_existing_user() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_company_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let stored = factory::user::UserFactory::new(db)
        .email("found@example.com")
        .build()
        .await?;

    let user = UserRepository::new(db)
        .find_by_email("found@example.com")
        .await?;

    assert_eq!(user.map(|user| user.id), Some(stored.id));

    Ok(())
}

/// Expected: Ok(None) for an unknown email
#[tokio::test]
async fn returns_none_for_unknown_email() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_company_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let user = UserRepository::new(db)
        .find_by_email("missing@example.com")
        .await?;

    assert!(user.is_none());

    Ok(())
}

/// Tests reading a row whose role column holds an unknown value.
///
/// Expected: Err(DbErr::Custom)
#[tokio::test]
async fn fails_on_invalid_stored_role() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_company_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    factory::user::UserFactory::new(db)
        .email("odd@example.com")
        .role("admin")
        .build()
        .await?;

    let result = UserRepository::new(db).find_by_email("odd@example.com").await;

    assert!(matches!(result, Err(DbErr::Custom(_))));

    Ok(())
}
