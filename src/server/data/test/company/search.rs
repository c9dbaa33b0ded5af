use super::*;

/// Tests substring search over names regardless of case.
///
/// Expected: Ok with only the company whose name contains the query
#[tokio::test]
async fn matches_name_ignoring_case() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_company_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let owner = factory::create_user(db).await?;
    factory::company::CompanyFactory::new(db, owner.id)
        .name("Bright Minds Tutoring")
        .build()
        .await?;
    factory::company::CompanyFactory::new(db, owner.id)
        .name("Cleaners Inc")
        .build()
        .await?;

    let results = CompanyRepository::new(db).search("minds").await?;

    assert_eq!(results.len(), 1);
    assert_eq!(results[0].name, "Bright Minds Tutoring");

    Ok(())
}

/// Expected: Ok with the company whose email contains the query
#[tokio::test]
async fn matches_email() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_company_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let owner = factory::create_user(db).await?;
    factory::company::CompanyFactory::new(db, owner.id)
        .email("office@brightminds.test")
        .build()
        .await?;

    let results = CompanyRepository::new(db).search("BRIGHTMINDS").await?;

    assert_eq!(results.len(), 1);

    Ok(())
}
