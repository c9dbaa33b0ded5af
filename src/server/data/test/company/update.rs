use super::*;

/// Expected: Ok(Some) with details replaced
#[tokio::test]
async fn replaces_details() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_company_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, company) = factory::create_employer_with_company(db).await?;

    let mut params = company_params("Renamed Ltd", "new@renamed.test");
    params.banking.bank_name = Some("First Bank".to_string());
    let updated = CompanyRepository::new(db)
        .update(company.id, params)
        .await?
        .unwrap();

    assert_eq!(updated.name, "Renamed Ltd");
    assert_eq!(updated.email, "new@renamed.test");
    assert_eq!(updated.banking.bank_name.as_deref(), Some("First Bank"));
    assert_eq!(updated.owner_id, company.owner_id);

    Ok(())
}

/// Expected: Ok(None) for an unknown company
#[tokio::test]
async fn returns_none_for_unknown_company() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_company_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let result = CompanyRepository::new(db)
        .update(9999, company_params("Ghost", "ghost@example.com"))
        .await?;

    assert!(result.is_none());

    Ok(())
}
