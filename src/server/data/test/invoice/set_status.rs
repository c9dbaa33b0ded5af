use super::*;

/// Expected: Ok(Some) with status sent and `sent_at` stamped
#[tokio::test]
async fn stamps_sent_at() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let owner = factory::create_user(db).await?;
    let invoice = factory::create_invoice(db, owner.id).await?;
    let now = Utc::now();

    let updated = InvoiceRepository::new(db)
        .set_status(invoice.id, InvoiceStatus::Sent, now)
        .await?
        .unwrap();

    assert_eq!(updated.status, InvoiceStatus::Sent);
    assert!(updated.sent_at.is_some());
    assert!(updated.paid_at.is_none());

    Ok(())
}

/// Expected: Ok(Some) with status paid and `paid_at` stamped, `sent_at` kept
#[tokio::test]
async fn stamps_paid_at() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let owner = factory::create_user(db).await?;
    let invoice = factory::create_invoice(db, owner.id).await?;
    let repo = InvoiceRepository::new(db);

    repo.set_status(invoice.id, InvoiceStatus::Sent, Utc::now())
        .await?;
    let paid = repo
        .set_status(invoice.id, InvoiceStatus::Paid, Utc::now())
        .await?
        .unwrap();

    assert_eq!(paid.status, InvoiceStatus::Paid);
    assert!(paid.sent_at.is_some());
    assert!(paid.paid_at.is_some());

    Ok(())
}

/// Expected: Ok(None) for an unknown invoice
#[tokio::test]
async fn returns_none_for_unknown_invoice() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let result = InvoiceRepository::new(db)
        .set_status(9999, InvoiceStatus::Paid, Utc::now())
        .await?;

    assert!(result.is_none());

    Ok(())
}
