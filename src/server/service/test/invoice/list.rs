use super::*;

/// Tests that a sent invoice past its due date is listed as overdue.
///
/// Expected: Ok with the overdue invoice matched by the `overdue` filter only
#[tokio::test]
async fn applies_effective_status() -> Result<(), AppError> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let owner = factory::create_user(db).await?;
    let overdue = factory::invoice::InvoiceFactory::new(db, owner.id)
        .status("sent")
        .due_date((Utc::now() - Duration::days(3)).date_naive())
        .build()
        .await?;
    factory::invoice::InvoiceFactory::new(db, owner.id)
        .status("sent")
        .build()
        .await?;
    let owner = actor(owner);
    let service = InvoiceService::new(db);

    let listed = service.list(&owner, Some("overdue"), None).await?;
    let sent = service.list(&owner, Some("sent"), None).await?;
    let all = service.list(&owner, Some("all"), None).await?;

    assert_eq!(listed.len(), 1);
    assert_eq!(listed[0].id, overdue.id);
    assert_eq!(listed[0].status, InvoiceStatus::Overdue);
    assert_eq!(sent.len(), 1);
    assert_eq!(all.len(), 2);

    Ok(())
}

/// Expected: Ok with only invoices whose notes contain the search text
#[tokio::test]
async fn searches_notes() -> Result<(), AppError> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let owner = factory::create_user(db).await?;
    factory::invoice::InvoiceFactory::new(db, owner.id)
        .notes("March maths tutoring")
        .build()
        .await?;
    factory::create_invoice(db, owner.id).await?;

    let found = InvoiceService::new(db)
        .list(&actor(owner), None, Some("MATHS"))
        .await?;

    assert_eq!(found.len(), 1);

    Ok(())
}

/// Expected: Err(BadRequest) for an unknown status filter
#[tokio::test]
async fn rejects_unknown_status_filter() -> Result<(), AppError> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let owner = actor(factory::create_user(db).await?);

    let result = InvoiceService::new(db)
        .list(&owner, Some("cancelled"), None)
        .await;

    assert!(matches!(result, Err(AppError::BadRequest(_))));

    Ok(())
}

/// Tests the per-status summary.
///
/// Expected: Ok with counts split by effective status and amounts summed
#[tokio::test]
async fn summarises_by_status() -> Result<(), AppError> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let owner = factory::create_user(db).await?;
    factory::create_invoice(db, owner.id).await?;
    factory::invoice::InvoiceFactory::new(db, owner.id)
        .status("paid")
        .build()
        .await?;
    factory::invoice::InvoiceFactory::new(db, owner.id)
        .status("sent")
        .due_date((Utc::now() - Duration::days(1)).date_naive())
        .build()
        .await?;

    let stats = InvoiceService::new(db).stats(&actor(owner)).await?;

    assert_eq!(stats.total_count, 3);
    assert_eq!(stats.draft.count, 1);
    assert_eq!(stats.paid.count, 1);
    assert_eq!(stats.overdue.count, 1);
    assert_eq!(stats.sent.count, 0);
    assert!((stats.total_amount - 345.0).abs() < 1e-9);

    Ok(())
}
