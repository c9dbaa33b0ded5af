use super::*;

/// Tests employer registration with company details.
///
/// Verifies that the company is created, owned by and linked to the new user, and that
/// the issued token names the user as subject.
///
/// Expected: Ok(AuthSession) with company attached and a verifiable token
#[tokio::test]
async fn registers_employer_with_company() -> Result<(), AppError> {
    let test = TestBuilder::new().with_company_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let keys = JwtKeys::new(SECRET);

    let session = AuthService::new(db, &keys)
        .register(RegisterDto {
            company_data: Some(company_data("Office@Acme.test")),
            ..register_dto("  Boss@Example.com ", Role::Employer)
        })
        .await?;

    let company = session.company.as_ref().unwrap();
    assert_eq!(session.user.email, "boss@example.com");
    assert_eq!(session.user.company_id, Some(company.id));
    assert_eq!(company.owner_id, session.user.id);
    assert_eq!(company.email, "office@acme.test");
    assert_ne!(session.user.password_hash, "secret123");

    let claims = keys.verify(&session.token)?;
    assert_eq!(claims.user_id(), Some(session.user.id));
    assert_eq!(claims.role, Role::Employer);
    assert_eq!(claims.exp - claims.iat, 7 * 24 * 60 * 60);

    Ok(())
}

/// Tests that employees never create a company even when details are sent.
///
/// Expected: Ok(AuthSession) without company
#[tokio::test]
async fn employee_ignores_company_data() -> Result<(), AppError> {
    let test = TestBuilder::new().with_company_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let keys = JwtKeys::new(SECRET);

    let session = AuthService::new(db, &keys)
        .register(RegisterDto {
            company_data: Some(company_data("office@acme.test")),
            ..register_dto("worker@example.com", Role::Employee)
        })
        .await?;

    assert!(session.company.is_none());
    assert_eq!(session.user.company_id, None);

    Ok(())
}

/// Expected: Err(EmailTaken) for an email already registered, ignoring case
#[tokio::test]
async fn rejects_duplicate_email() -> Result<(), AppError> {
    let test = TestBuilder::new().with_company_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let keys = JwtKeys::new(SECRET);

    factory::user::UserFactory::new(db)
        .email("taken@example.com")
        .build()
        .await?;

    let result = AuthService::new(db, &keys)
        .register(register_dto("TAKEN@example.com", Role::Employee))
        .await;

    assert!(matches!(
        result,
        Err(AppError::AuthErr(AuthError::EmailTaken))
    ));

    Ok(())
}

/// Expected: Err(BadRequest) for a password shorter than six characters
#[tokio::test]
async fn rejects_short_password() -> Result<(), AppError> {
    let test = TestBuilder::new().with_company_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let keys = JwtKeys::new(SECRET);

    let result = AuthService::new(db, &keys)
        .register(RegisterDto {
            password: "12345".to_string(),
            ..register_dto("short@example.com", Role::Employee)
        })
        .await;

    assert!(matches!(result, Err(AppError::BadRequest(_))));

    Ok(())
}

/// Tests a company email that another company already uses.
///
/// Expected: Err(BadRequest) and no user created
#[tokio::test]
async fn rejects_duplicate_company_email() -> Result<(), AppError> {
    let test = TestBuilder::new().with_company_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let keys = JwtKeys::new(SECRET);

    let (_, existing) = factory::create_employer_with_company(db).await?;
    let service = AuthService::new(db, &keys);

    let result = service
        .register(RegisterDto {
            company_data: Some(company_data(&existing.email)),
            ..register_dto("second@example.com", Role::Employer)
        })
        .await;

    assert!(matches!(result, Err(AppError::BadRequest(_))));
    let login = service
        .login(LoginDto {
            email: "second@example.com".to_string(),
            password: "secret123".to_string(),
        })
        .await;
    assert!(login.is_err());

    Ok(())
}
