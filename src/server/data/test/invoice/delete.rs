use super::*;

/// Tests deleting an invoice together with its items.
///
/// Expected: true, with no invoice or item rows left
#[tokio::test]
async fn deletes_invoice_and_items() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let owner = factory::create_user(db).await?;
    let repo = InvoiceRepository::new(db);
    let invoice = repo.create(invoice_params(owner.id, "INV-DEL-202503")).await?;

    assert!(repo.delete(invoice.id).await?);

    assert!(repo.find_by_id(invoice.id).await?.is_none());
    let items = entity::prelude::InvoiceItem::find().all(db).await?;
    assert!(items.is_empty());

    Ok(())
}

/// Expected: false for an unknown invoice
#[tokio::test]
async fn returns_false_for_unknown_invoice() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    assert!(!InvoiceRepository::new(db).delete(9999).await?);

    Ok(())
}
