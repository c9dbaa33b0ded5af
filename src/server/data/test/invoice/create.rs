use super::*;

/// Tests storing an invoice with items for a client.
///
/// Expected: Ok with draft status, items in order, totals and client name
#[tokio::test]
async fn stores_items_and_totals() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (owner, company) = factory::create_employer_with_company(db).await?;
    let client = factory::client::ClientFactory::new(db, company.id)
        .name("Smith Family")
        .build()
        .await?;

    let invoice = InvoiceRepository::new(db)
        .create(CreateInvoiceParams {
            client_id: Some(client.id),
            ..invoice_params(owner.id, "INV-SMI-202503")
        })
        .await?;

    assert_eq!(invoice.status, InvoiceStatus::Draft);
    assert_eq!(invoice.client_name.as_deref(), Some("Smith Family"));
    assert_eq!(invoice.items.len(), 2);
    assert_eq!(invoice.items[0].description, "Algebra");
    assert_eq!(invoice.totals.subtotal, 200.0);
    assert!((invoice.totals.tax - 30.0).abs() < 1e-9);
    assert!((invoice.totals.total - 230.0).abs() < 1e-9);

    Ok(())
}

/// Tests that billed sessions are flagged in the same write.
///
/// Expected: Ok with listed events invoiced and others untouched
#[tokio::test]
async fn flags_billed_events_as_invoiced() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (owner, company) = factory::create_employer_with_company(db).await?;
    let billed = factory::event::EventFactory::new(db, owner.id, company.id)
        .completed(true)
        .build()
        .await?;
    let untouched = factory::event::EventFactory::new(db, owner.id, company.id)
        .completed(true)
        .build()
        .await?;

    InvoiceRepository::new(db)
        .create(CreateInvoiceParams {
            event_ids: vec![billed.id],
            ..invoice_params(owner.id, "INV-TEST-0001")
        })
        .await?;

    let billed = entity::prelude::Event::find_by_id(billed.id).one(db).await?.unwrap();
    let untouched = entity::prelude::Event::find_by_id(untouched.id)
        .one(db)
        .await?
        .unwrap();
    assert!(billed.invoiced);
    assert!(!untouched.invoiced);

    Ok(())
}

/// Tests the unique invoice number constraint.
///
/// Expected: Err for a repeated number with no partial invoice left behind
#[tokio::test]
async fn rejects_duplicate_number() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let owner = factory::create_user(db).await?;
    let repo = InvoiceRepository::new(db);
    repo.create(invoice_params(owner.id, "INV-DUP-202503")).await?;

    let result = repo.create(invoice_params(owner.id, "INV-DUP-202503")).await;

    assert!(result.is_err());
    assert!(repo.number_exists("INV-DUP-202503").await?);
    assert_eq!(repo.get_by_user(owner.id).await?.len(), 1);

    Ok(())
}
