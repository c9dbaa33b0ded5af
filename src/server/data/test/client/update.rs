use super::*;

/// Expected: Ok(Some) with name and rate replaced
#[tokio::test]
async fn replaces_details() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_event_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, company) = factory::create_employer_with_company(db).await?;
    let client = factory::create_client(db, company.id).await?;

    let updated = ClientRepository::new(db)
        .update(client.id, client_params("Renamed", 110.0))
        .await?
        .unwrap();

    assert_eq!(updated.name, "Renamed");
    assert_eq!(updated.hourly_rate, 110.0);
    assert_eq!(updated.company_id, company.id);

    Ok(())
}

/// Expected: Ok(None) for an unknown client
#[tokio::test]
async fn returns_none_for_unknown_client() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_event_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let result = ClientRepository::new(db)
        .update(9999, client_params("Ghost", 75.0))
        .await?;

    assert!(result.is_none());

    Ok(())
}
