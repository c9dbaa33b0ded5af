use super::*;

/// Expected: Ok(User) for an employer
#[tokio::test]
async fn grants_access_to_employer() -> Result<(), AppError> {
    let test = TestBuilder::new().with_company_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let keys = JwtKeys::new(SECRET);

    let (owner, _) = factory::create_employer_with_company(db).await?;
    let headers = bearer(&token_for(&keys, &owner));

    let user = AuthGuard::new(db, &keys, &headers)
        .require(&[Permission::Employer])
        .await?;

    assert_eq!(user.role, Role::Employer);

    Ok(())
}

/// Expected: Err(AccessDenied) for an employee
#[tokio::test]
async fn denies_access_to_employee() -> Result<(), AppError> {
    let test = TestBuilder::new().with_company_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let keys = JwtKeys::new(SECRET);

    let employee = factory::create_user(db).await?;
    let headers = bearer(&token_for(&keys, &employee));

    let result = AuthGuard::new(db, &keys, &headers)
        .require(&[Permission::Employer])
        .await;

    assert!(matches!(
        result,
        Err(AppError::AuthErr(AuthError::AccessDenied(_, _)))
    ));

    Ok(())
}
