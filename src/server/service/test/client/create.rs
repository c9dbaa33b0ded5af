use super::*;

/// Tests creating a client without a rate.
///
/// Expected: Ok with the trimmed name and the default rate of 75
#[tokio::test]
async fn creates_with_default_rate() -> Result<(), AppError> {
    let test = TestBuilder::new().with_event_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, company) = factory::create_employer_with_company(db).await?;

    let client = ClientService::new(db)
        .create(company.id, save_dto("  Smith Family ", None))
        .await?;

    assert_eq!(client.name, "Smith Family");
    assert_eq!(client.hourly_rate, 75.0);
    assert_eq!(client.company_id, company.id);

    Ok(())
}

/// Tests name uniqueness within a company.
///
/// Expected: Err(BadRequest) for a repeated name, Ok for the same name in another company
#[tokio::test]
async fn rejects_duplicate_name_in_company() -> Result<(), AppError> {
    let test = TestBuilder::new().with_event_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, company) = factory::create_employer_with_company(db).await?;
    let (_, other) = factory::create_employer_with_company(db).await?;
    let service = ClientService::new(db);

    service.create(company.id, save_dto("Acme", Some(90.0))).await?;
    let duplicate = service.create(company.id, save_dto("Acme", None)).await;
    let elsewhere = service.create(other.id, save_dto("Acme", None)).await;

    assert!(matches!(duplicate, Err(AppError::BadRequest(_))));
    assert!(elsewhere.is_ok());

    Ok(())
}

/// Expected: Err(BadRequest) for a blank name or a negative rate
#[tokio::test]
async fn rejects_invalid_fields() -> Result<(), AppError> {
    let test = TestBuilder::new().with_event_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, company) = factory::create_employer_with_company(db).await?;
    let service = ClientService::new(db);

    let blank = service.create(company.id, save_dto("   ", None)).await;
    let negative = service.create(company.id, save_dto("Acme", Some(-5.0))).await;

    assert!(matches!(blank, Err(AppError::BadRequest(_))));
    assert!(matches!(negative, Err(AppError::BadRequest(_))));

    Ok(())
}
