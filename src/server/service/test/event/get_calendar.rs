use super::*;

/// Tests calendar scope per role.
///
/// Expected: employer sees both sessions, employee only their own
#[tokio::test]
async fn scopes_calendar_by_role() -> Result<(), AppError> {
    let test = TestBuilder::new().with_event_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (owner, company) = factory::create_employer_with_company(db).await?;
    let employee = factory::create_employee_for_company(db, company.id, 80.0).await?;
    factory::event::EventFactory::new(db, owner.id, company.id)
        .span(at(2025, 3, 2, 9), at(2025, 3, 2, 10))
        .build()
        .await?;
    factory::event::EventFactory::new(db, employee.id, company.id)
        .span(at(2025, 3, 3, 9), at(2025, 3, 3, 10))
        .build()
        .await?;
    let service = EventService::new(db);

    let employer_view = service.get_calendar(&actor(owner), 2025, 3).await?;
    let employee_view = service.get_calendar(&actor(employee.clone()), 2025, 3).await?;

    assert_eq!(employer_view.len(), 2);
    assert_eq!(employee_view.len(), 1);
    assert_eq!(employee_view[0].employee_id, employee.id);

    Ok(())
}

/// Expected: Err(BadRequest) for month 13
#[tokio::test]
async fn rejects_invalid_month() -> Result<(), AppError> {
    let test = TestBuilder::new().with_event_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (owner, _) = factory::create_employer_with_company(db).await?;

    let result = EventService::new(db).get_calendar(&actor(owner), 2025, 13).await;

    assert!(matches!(result, Err(AppError::BadRequest(_))));

    Ok(())
}
