use super::*;

/// Expected: Ok(User) for a member of the company, Err(AccessDenied) for an outsider
#[tokio::test]
async fn checks_company_membership() -> Result<(), AppError> {
    let test = TestBuilder::new().with_company_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let keys = JwtKeys::new(SECRET);

    let (_, company) = factory::create_employer_with_company(db).await?;
    let member = factory::create_employee_for_company(db, company.id, 80.0).await?;
    let outsider = factory::create_user(db).await?;

    let member_headers = bearer(&token_for(&keys, &member));
    let outsider_headers = bearer(&token_for(&keys, &outsider));

    let allowed = AuthGuard::new(db, &keys, &member_headers)
        .require(&[Permission::CompanyMember(company.id)])
        .await;
    let denied = AuthGuard::new(db, &keys, &outsider_headers)
        .require(&[Permission::CompanyMember(company.id)])
        .await;

    assert!(allowed.is_ok());
    assert!(matches!(
        denied,
        Err(AppError::AuthErr(AuthError::AccessDenied(_, _)))
    ));

    Ok(())
}

/// Expected: Err(AccessDenied) for a user without any company
#[tokio::test]
async fn has_company_denies_unaffiliated_user() -> Result<(), AppError> {
    let test = TestBuilder::new().with_company_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let keys = JwtKeys::new(SECRET);

    let user = factory::create_user(db).await?;
    let headers = bearer(&token_for(&keys, &user));

    let result = AuthGuard::new(db, &keys, &headers)
        .require(&[Permission::HasCompany])
        .await;

    assert!(matches!(
        result,
        Err(AppError::AuthErr(AuthError::AccessDenied(_, _)))
    ));

    Ok(())
}

/// Tests ownership against an employee of the same company.
///
/// Expected: Ok(User) for the owner, Err(AccessDenied) for the employee
#[tokio::test]
async fn only_owner_passes_owner_check() -> Result<(), AppError> {
    let test = TestBuilder::new().with_company_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let keys = JwtKeys::new(SECRET);

    let (owner, company) = factory::create_employer_with_company(db).await?;
    let employee = factory::create_employee_for_company(db, company.id, 80.0).await?;

    let owner_headers = bearer(&token_for(&keys, &owner));
    let employee_headers = bearer(&token_for(&keys, &employee));

    let allowed = AuthGuard::new(db, &keys, &owner_headers)
        .require(&[Permission::CompanyOwner(company.id)])
        .await;
    let denied = AuthGuard::new(db, &keys, &employee_headers)
        .require(&[Permission::CompanyOwner(company.id)])
        .await;

    assert_eq!(allowed?.id, owner.id);
    assert!(matches!(
        denied,
        Err(AppError::AuthErr(AuthError::AccessDenied(_, _)))
    ));

    Ok(())
}
