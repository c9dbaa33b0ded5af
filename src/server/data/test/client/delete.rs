use super::*;

/// Expected: true on first delete, false once the client is gone
#[tokio::test]
async fn deletes_once() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_event_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, company) = factory::create_employer_with_company(db).await?;
    let client = factory::create_client(db, company.id).await?;
    let repo = ClientRepository::new(db);

    assert!(repo.delete(client.id).await?);
    assert!(!repo.delete(client.id).await?);
    assert!(repo.find_by_id(client.id).await?.is_none());

    Ok(())
}
