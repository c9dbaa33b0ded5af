use super::*;

/// Tests the preview built from a client's completed sessions.
///
/// Verifies that open sessions and other clients are left out and that sessions are
/// billed at their own rate.
///
/// Expected: Ok with two items, subtotal 250, 15% tax and the month's invoice number
#[tokio::test]
async fn previews_completed_sessions() -> Result<(), AppError> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (owner, company) = factory::create_employer_with_company(db).await?;
    let employee = factory::create_employee_for_company(db, company.id, 100.0).await?;
    let client = factory::client::ClientFactory::new(db, company.id)
        .name("Smith Family")
        .build()
        .await?;
    for (day, completed, client_name) in [
        (3, true, "Smith Family"),
        (10, true, "Smith Family"),
        (12, false, "Smith Family"),
        (14, true, "Jones Family"),
    ] {
        factory::event::EventFactory::new(db, employee.id, company.id)
            .client(client_name)
            .span(at(2025, 3, day, 9), at(2025, 3, day, 9) + Duration::minutes(75))
            .rate(100.0)
            .completed(completed)
            .build()
            .await?;
    }

    let draft = InvoiceService::new(db)
        .preview(&actor(owner), client.id, 2025, 3)
        .await?;

    assert_eq!(draft.invoice_number, "INV-SMI-202503");
    assert_eq!(draft.due_date, NaiveDate::from_ymd_opt(2025, 4, 1).unwrap());
    assert_eq!(draft.items.len(), 2);
    assert_eq!(draft.items[0].date, NaiveDate::from_ymd_opt(2025, 3, 3));
    assert_eq!(draft.totals.subtotal, 250.0);
    assert!((draft.totals.tax - 37.5).abs() < 1e-9);
    assert!((draft.totals.total - 287.5).abs() < 1e-9);

    Ok(())
}

/// Tests that generating stores the invoice and consumes its sessions.
///
/// Expected: Ok(draft invoice) first, then Err(BadRequest) since nothing is left to bill
#[tokio::test]
async fn generates_once_per_batch_of_sessions() -> Result<(), AppError> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (owner, company) = factory::create_employer_with_company(db).await?;
    let owner = actor(owner);
    let client = factory::client::ClientFactory::new(db, company.id)
        .name("Smith Family")
        .build()
        .await?;
    factory::event::EventFactory::new(db, owner.id, company.id)
        .client("Smith Family")
        .span(at(2025, 3, 3, 9), at(2025, 3, 3, 10))
        .completed(true)
        .build()
        .await?;
    let service = InvoiceService::new(db);

    let invoice = service
        .generate(
            &owner,
            GenerateInvoiceDto {
                notes: Some("  Thanks!  ".to_string()),
                ..generate_dto(client.id)
            },
        )
        .await?;

    assert_eq!(invoice.status, InvoiceStatus::Draft);
    assert_eq!(invoice.invoice_number, "INV-SMI-202503");
    assert_eq!(invoice.client_name.as_deref(), Some("Smith Family"));
    assert_eq!(invoice.notes.as_deref(), Some("Thanks!"));
    assert_eq!(invoice.items.len(), 1);

    let again = service.generate(&owner, generate_dto(client.id)).await;
    assert!(matches!(again, Err(AppError::BadRequest(_))));

    Ok(())
}

/// Tests a second invoice for the same client and month after more sessions complete.
///
/// Expected: Ok with a `-2` suffixed invoice number
#[tokio::test]
async fn suffixes_repeated_invoice_number() -> Result<(), AppError> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (owner, company) = factory::create_employer_with_company(db).await?;
    let owner = actor(owner);
    let client = factory::client::ClientFactory::new(db, company.id)
        .name("Smith Family")
        .build()
        .await?;
    let service = InvoiceService::new(db);

    for day in [3, 20] {
        factory::event::EventFactory::new(db, owner.id, company.id)
            .client("Smith Family")
            .span(at(2025, 3, day, 9), at(2025, 3, day, 10))
            .completed(true)
            .build()
            .await?;
        service.generate(&owner, generate_dto(client.id)).await?;
    }

    let numbers: Vec<String> = service
        .list(&owner, None, None)
        .await?
        .into_iter()
        .map(|invoice| invoice.invoice_number)
        .collect();

    assert_eq!(numbers.len(), 2);
    assert!(numbers.contains(&"INV-SMI-202503".to_string()));
    assert!(numbers.contains(&"INV-SMI-202503-2".to_string()));

    Ok(())
}

/// Expected: Err(NotFound) for a client of another company
#[tokio::test]
async fn rejects_foreign_client() -> Result<(), AppError> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (owner, _) = factory::create_employer_with_company(db).await?;
    let (_, other) = factory::create_employer_with_company(db).await?;
    let foreign = factory::create_client(db, other.id).await?;

    let result = InvoiceService::new(db)
        .preview(&actor(owner), foreign.id, 2025, 3)
        .await;

    assert!(matches!(result, Err(AppError::NotFound(_))));

    Ok(())
}
