use super::*;

/// Expected: true for a used email, false for an unused one
#[tokio::test]
async fn detects_used_email() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_company_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, company) = factory::create_employer_with_company(db).await?;
    let repo = CompanyRepository::new(db);

    assert!(repo.email_taken(&company.email, None).await?);
    assert!(!repo.email_taken("unused@example.com", None).await?);

    Ok(())
}

/// Tests the exclusion used when a company keeps its own email on update.
///
/// Expected: false when the only match is the excluded company
#[tokio::test]
async fn ignores_excluded_company() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_company_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, company) = factory::create_employer_with_company(db).await?;

    let taken = CompanyRepository::new(db)
        .email_taken(&company.email, Some(company.id))
        .await?;

    assert!(!taken);

    Ok(())
}
