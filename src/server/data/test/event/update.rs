use super::*;

/// Tests that an update recomputes hours and amount.
///
/// Expected: Ok(Some) with 2 hours billed at the new rate
#[tokio::test]
async fn recomputes_billing() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_event_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (owner, company) = factory::create_employer_with_company(db).await?;
    let event = factory::create_event(db, owner.id, company.id).await?;

    let start = at(2025, 5, 2, 8);
    let updated = EventRepository::new(db)
        .update(
            event.id,
            UpdateEventParams {
                title: "Physics".to_string(),
                client: "Jones Family".to_string(),
                color: None,
                completed: true,
                billing: Billing::new(start, start + Duration::hours(2), 60.0),
            },
        )
        .await?
        .unwrap();

    assert_eq!(updated.title, "Physics");
    assert_eq!(updated.hours, 2.0);
    assert_eq!(updated.amount, 120.0);
    assert!(updated.completed);

    Ok(())
}

/// Expected: Ok(None) for an unknown event
#[tokio::test]
async fn returns_none_for_unknown_event() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_event_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let start = at(2025, 5, 2, 8);
    let result = EventRepository::new(db)
        .update(
            9999,
            UpdateEventParams {
                title: "Physics".to_string(),
                client: "Jones Family".to_string(),
                color: None,
                completed: false,
                billing: Billing::new(start, start + Duration::hours(1), 60.0),
            },
        )
        .await?;

    assert!(result.is_none());

    Ok(())
}
