use super::*;

/// Tests the month window of an employee's calendar.
///
/// Expected: Ok with only the employee's sessions starting inside the window, by start
#[tokio::test]
async fn returns_own_sessions_in_window() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_event_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (owner, company) = factory::create_employer_with_company(db).await?;
    let employee = factory::create_employee_for_company(db, company.id, 80.0).await?;

    let later = factory::event::EventFactory::new(db, employee.id, company.id)
        .span(at(2025, 3, 20, 9), at(2025, 3, 20, 10))
        .build()
        .await?;
    let earlier = factory::event::EventFactory::new(db, employee.id, company.id)
        .span(at(2025, 3, 1, 0), at(2025, 3, 1, 1))
        .build()
        .await?;
    // Next month, excluded by the window end
    factory::event::EventFactory::new(db, employee.id, company.id)
        .span(at(2025, 4, 1, 0), at(2025, 4, 1, 1))
        .build()
        .await?;
    // Someone else's session
    factory::event::EventFactory::new(db, owner.id, company.id)
        .span(at(2025, 3, 5, 9), at(2025, 3, 5, 10))
        .build()
        .await?;

    let events = EventRepository::new(db)
        .get_for_employee(employee.id, at(2025, 3, 1, 0), at(2025, 4, 1, 0))
        .await?;

    let ids: Vec<i32> = events.iter().map(|event| event.id).collect();
    assert_eq!(ids, vec![earlier.id, later.id]);

    Ok(())
}
