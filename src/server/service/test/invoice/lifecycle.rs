use super::*;

/// Tests draft to sent to paid.
///
/// Expected: Ok at each step with timestamps set, then Err(BadRequest) on resending
#[tokio::test]
async fn sends_then_marks_paid() -> Result<(), AppError> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let owner = factory::create_user(db).await?;
    let invoice = factory::create_invoice(db, owner.id).await?;
    let owner = actor(owner);
    let service = InvoiceService::new(db);

    let sent = service.send(&owner, invoice.id).await?;
    assert_eq!(sent.status, InvoiceStatus::Sent);
    assert!(sent.sent_at.is_some());

    let paid = service.mark_paid(&owner, invoice.id).await?;
    assert_eq!(paid.status, InvoiceStatus::Paid);
    assert!(paid.paid_at.is_some());

    let resend = service.send(&owner, invoice.id).await;
    assert!(matches!(resend, Err(AppError::BadRequest(_))));

    Ok(())
}

/// Tests access to another user's invoice.
///
/// Expected: Err(NotFound) for get, send and delete
#[tokio::test]
async fn hides_other_users_invoices() -> Result<(), AppError> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let owner = factory::create_user(db).await?;
    let stranger = actor(factory::create_user(db).await?);
    let invoice = factory::create_invoice(db, owner.id).await?;
    let service = InvoiceService::new(db);

    assert!(matches!(
        service.get(&stranger, invoice.id).await,
        Err(AppError::NotFound(_))
    ));
    assert!(matches!(
        service.send(&stranger, invoice.id).await,
        Err(AppError::NotFound(_))
    ));
    assert!(matches!(
        service.delete(&stranger, invoice.id).await,
        Err(AppError::NotFound(_))
    ));

    Ok(())
}

/// Tests the printable document of a generated invoice.
///
/// Expected: Ok with HTML naming the company, client and invoice number
#[tokio::test]
async fn renders_document() -> Result<(), AppError> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (owner, company) = factory::create_employer_with_company(db).await?;
    let client = factory::client::ClientFactory::new(db, company.id)
        .name("Smith Family")
        .build()
        .await?;
    let invoice = factory::invoice::InvoiceFactory::new(db, owner.id)
        .client_id(client.id)
        .invoice_number("INV-SMI-202503")
        .build()
        .await?;

    let html = InvoiceService::new(db)
        .document(&actor(owner), invoice.id)
        .await?;

    assert!(html.contains(&company.name));
    assert!(html.contains("Smith Family"));
    assert!(html.contains("INV-SMI-202503"));

    Ok(())
}
