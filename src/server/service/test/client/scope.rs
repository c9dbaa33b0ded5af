use super::*;

/// Tests that clients of another company cannot be changed.
///
/// Expected: Err(NotFound) for update and delete, client left intact
#[tokio::test]
async fn hides_other_company_clients() -> Result<(), AppError> {
    let test = TestBuilder::new().with_event_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, company) = factory::create_employer_with_company(db).await?;
    let (_, other) = factory::create_employer_with_company(db).await?;
    let foreign = factory::create_client(db, other.id).await?;
    let service = ClientService::new(db);

    let update = service
        .update(company.id, foreign.id, save_dto("Renamed", None))
        .await;
    let delete = service.delete(company.id, foreign.id).await;

    assert!(matches!(update, Err(AppError::NotFound(_))));
    assert!(matches!(delete, Err(AppError::NotFound(_))));
    assert_eq!(service.get_by_company(other.id).await?.len(), 1);

    Ok(())
}

/// Tests renaming a client to its own name.
///
/// Expected: Ok with the new rate applied
#[tokio::test]
async fn updates_keeping_name() -> Result<(), AppError> {
    let test = TestBuilder::new().with_event_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, company) = factory::create_employer_with_company(db).await?;
    let client = factory::client::ClientFactory::new(db, company.id)
        .name("Acme")
        .build()
        .await?;

    let updated = ClientService::new(db)
        .update(company.id, client.id, save_dto("Acme", Some(120.0)))
        .await?;

    assert_eq!(updated.hourly_rate, 120.0);

    Ok(())
}
