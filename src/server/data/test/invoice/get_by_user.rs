use super::*;

/// Expected: Ok with only the user's invoices, newest first
#[tokio::test]
async fn returns_users_invoices_newest_first() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let owner = factory::create_user(db).await?;
    let other = factory::create_user(db).await?;
    let first = factory::create_invoice(db, owner.id).await?;
    let second = factory::create_invoice(db, owner.id).await?;
    factory::create_invoice(db, other.id).await?;

    let invoices = InvoiceRepository::new(db).get_by_user(owner.id).await?;

    let ids: Vec<i32> = invoices.iter().map(|invoice| invoice.id).collect();
    assert_eq!(ids, vec![second.id, first.id]);

    Ok(())
}
