use super::*;

/// Tests a valid token with no permissions.
///
/// Expected: Ok(User) matching the token subject
#[tokio::test]
async fn accepts_valid_token() -> Result<(), AppError> {
    let test = TestBuilder::new().with_company_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let keys = JwtKeys::new(SECRET);

    let user = factory::create_user(db).await?;
    let headers = bearer(&token_for(&keys, &user));

    let authed = AuthGuard::new(db, &keys, &headers).require(&[]).await?;

    assert_eq!(authed.id, user.id);
    assert_eq!(authed.role, Role::Employee);

    Ok(())
}

/// Expected: Err(MissingToken) without an Authorization header
#[tokio::test]
async fn rejects_missing_header() -> Result<(), AppError> {
    let test = TestBuilder::new().with_company_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let keys = JwtKeys::new(SECRET);
    let headers = HeaderMap::new();

    let result = AuthGuard::new(db, &keys, &headers).require(&[]).await;

    assert!(matches!(
        result,
        Err(AppError::AuthErr(AuthError::MissingToken))
    ));

    Ok(())
}

/// Tests a header using another scheme than Bearer.
///
/// Expected: Err(MissingToken)
#[tokio::test]
async fn rejects_non_bearer_scheme() -> Result<(), AppError> {
    let test = TestBuilder::new().with_company_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let keys = JwtKeys::new(SECRET);

    let mut headers = HeaderMap::new();
    headers.insert(AUTHORIZATION, HeaderValue::from_static("Basic dXNlcjpwYXNz"));

    let result = AuthGuard::new(db, &keys, &headers).require(&[]).await;

    assert!(matches!(
        result,
        Err(AppError::AuthErr(AuthError::MissingToken))
    ));

    Ok(())
}

/// Expected: Err(InvalidToken) for a token signed with another secret
#[tokio::test]
async fn rejects_foreign_signature() -> Result<(), AppError> {
    let test = TestBuilder::new().with_company_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let keys = JwtKeys::new(SECRET);

    let user = factory::create_user(db).await?;
    let headers = bearer(&token_for(&JwtKeys::new("another-secret"), &user));

    let result = AuthGuard::new(db, &keys, &headers).require(&[]).await;

    assert!(matches!(
        result,
        Err(AppError::AuthErr(AuthError::InvalidToken(_)))
    ));

    Ok(())
}

/// Tests a token issued eight days ago, past the seven day lifetime.
///
/// Expected: Err(InvalidToken)
#[tokio::test]
async fn rejects_expired_token() -> Result<(), AppError> {
    let test = TestBuilder::new().with_company_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let keys = JwtKeys::new(SECRET);

    let user = factory::create_user(db).await?;
    let token = keys
        .issue(user.id, Role::Employee, Utc::now() - Duration::days(8))
        .unwrap();
    let headers = bearer(&token);

    let result = AuthGuard::new(db, &keys, &headers).require(&[]).await;

    assert!(matches!(
        result,
        Err(AppError::AuthErr(AuthError::InvalidToken(_)))
    ));

    Ok(())
}

/// Tests a valid token whose user no longer exists.
///
/// Expected: Err(UserNotInDatabase)
#[tokio::test]
async fn rejects_deleted_user() -> Result<(), AppError> {
    let test = TestBuilder::new().with_company_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let keys = JwtKeys::new(SECRET);

    let token = keys.issue(4242, Role::Employee, Utc::now()).unwrap();
    let headers = bearer(&token);

    let result = AuthGuard::new(db, &keys, &headers).require(&[]).await;

    assert!(matches!(
        result,
        Err(AppError::AuthErr(AuthError::UserNotInDatabase(4242)))
    ));

    Ok(())
}
