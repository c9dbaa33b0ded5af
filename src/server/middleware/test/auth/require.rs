use super::*;

mod require_company;
mod require_employer;
mod require_token;

/// Tests multiple permissions are all checked.
///
/// Expected: Err(AccessDenied) when the first permission passes but the second fails
#[tokio::test]
async fn requires_all_permissions() -> Result<(), AppError> {
    let test = TestBuilder::new().with_company_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let keys = JwtKeys::new(SECRET);

    let (_, company) = factory::create_employer_with_company(db).await?;
    let employee = factory::create_employee_for_company(db, company.id, 80.0).await?;
    let headers = bearer(&token_for(&keys, &employee));

    let result = AuthGuard::new(db, &keys, &headers)
        .require(&[Permission::CompanyMember(company.id), Permission::Employer])
        .await;

    assert!(matches!(
        result,
        Err(AppError::AuthErr(AuthError::AccessDenied(_, _)))
    ));

    Ok(())
}
