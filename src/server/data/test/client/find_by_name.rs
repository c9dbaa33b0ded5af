use super::*;

/// Tests that name lookups stay inside one company.
///
/// Expected: Some for the owning company, None for another company
#[tokio::test]
async fn scopes_lookup_to_company() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_event_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, company) = factory::create_employer_with_company(db).await?;
    let (_, other) = factory::create_employer_with_company(db).await?;
    factory::client::ClientFactory::new(db, company.id)
        .name("Smith Family")
        .build()
        .await?;

    let repo = ClientRepository::new(db);

    assert!(repo.find_by_name(company.id, "Smith Family").await?.is_some());
    assert!(repo.find_by_name(other.id, "Smith Family").await?.is_none());

    Ok(())
}
