use super::*;

/// Expected: Ok(Some) with the completed flag set
#[tokio::test]
async fn marks_session_completed() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_event_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (owner, company) = factory::create_employer_with_company(db).await?;
    let event = factory::create_event(db, owner.id, company.id).await?;

    let updated = EventRepository::new(db)
        .set_completed(event.id, true)
        .await?
        .unwrap();

    assert!(updated.completed);
    assert_eq!(updated.amount, event.amount);

    Ok(())
}
