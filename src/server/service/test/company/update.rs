use super::*;

/// Expected: Ok with the new details stored
#[tokio::test]
async fn replaces_details() -> Result<(), AppError> {
    let test = TestBuilder::new().with_company_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, company) = factory::create_employer_with_company(db).await?;

    let updated = CompanyService::new(db)
        .update(company.id, company_data("Acme Learning", "hello@acme.test"))
        .await?;

    assert_eq!(updated.name, "Acme Learning");
    assert_eq!(updated.email, "hello@acme.test");
    assert_eq!(updated.registration_number.as_deref(), Some("2020/123456/07"));

    Ok(())
}

/// Tests taking over another company's email.
///
/// Expected: Err(BadRequest)
#[tokio::test]
async fn rejects_email_of_other_company() -> Result<(), AppError> {
    let test = TestBuilder::new().with_company_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, company) = factory::create_employer_with_company(db).await?;
    let (_, other) = factory::create_employer_with_company(db).await?;

    let result = CompanyService::new(db)
        .update(company.id, company_data("Acme", &other.email))
        .await;

    assert!(matches!(result, Err(AppError::BadRequest(_))));

    Ok(())
}
