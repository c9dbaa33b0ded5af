use super::*;

/// Expected: true on first delete, false once the event is gone
#[tokio::test]
async fn deletes_once() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_event_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (owner, company) = factory::create_employer_with_company(db).await?;
    let event = factory::create_event(db, owner.id, company.id).await?;
    let repo = EventRepository::new(db);

    assert!(repo.delete(event.id).await?);
    assert!(!repo.delete(event.id).await?);
    assert!(repo.find_by_id(event.id).await?.is_none());

    Ok(())
}
