use super::*;

/// Tests logging in with the password used at registration.
///
/// Expected: Ok(AuthSession) with the user's company attached
#[tokio::test]
async fn logs_in_with_correct_password() -> Result<(), AppError> {
    let test = TestBuilder::new().with_company_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let keys = JwtKeys::new(SECRET);
    let service = AuthService::new(db, &keys);

    let registered = service
        .register(RegisterDto {
            company_data: Some(company_data("office@acme.test")),
            ..register_dto("boss@example.com", Role::Employer)
        })
        .await?;

    let session = service
        .login(LoginDto {
            email: "Boss@Example.com".to_string(),
            password: "secret123".to_string(),
        })
        .await?;

    assert_eq!(session.user.id, registered.user.id);
    assert_eq!(
        session.company.map(|company| company.id),
        registered.user.company_id
    );

    Ok(())
}

/// Expected: Err(InvalidCredentials) for a wrong password
#[tokio::test]
async fn rejects_wrong_password() -> Result<(), AppError> {
    let test = TestBuilder::new().with_company_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let keys = JwtKeys::new(SECRET);
    let service = AuthService::new(db, &keys);

    service
        .register(register_dto("worker@example.com", Role::Employee))
        .await?;

    let result = service
        .login(LoginDto {
            email: "worker@example.com".to_string(),
            password: "wrong-password".to_string(),
        })
        .await;

    assert!(matches!(
        result,
        Err(AppError::AuthErr(AuthError::InvalidCredentials))
    ));

    Ok(())
}

/// Expected: Err(InvalidCredentials) for an unknown email
#[tokio::test]
async fn rejects_unknown_email() -> Result<(), AppError> {
    let test = TestBuilder::new().with_company_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let keys = JwtKeys::new(SECRET);

    let result = AuthService::new(db, &keys)
        .login(LoginDto {
            email: "nobody@example.com".to_string(),
            password: "secret123".to_string(),
        })
        .await;

    assert!(matches!(
        result,
        Err(AppError::AuthErr(AuthError::InvalidCredentials))
    ));

    Ok(())
}
