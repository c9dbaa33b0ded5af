use super::*;

fn update_dto(start: DateTime<Utc>) -> UpdateEventDto {
    UpdateEventDto {
        title: "Moved lesson".to_string(),
        client: "Smith Family".to_string(),
        start,
        end: start + Duration::hours(2),
        color: None,
        completed: false,
        rate: None,
    }
}

/// Tests that updates keep the stored rate when none is given.
///
/// Expected: Ok with 2 hours at the original rate of 80
#[tokio::test]
async fn owner_updates_and_keeps_rate() -> Result<(), AppError> {
    let test = TestBuilder::new().with_event_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, company) = factory::create_employer_with_company(db).await?;
    let employee = factory::create_employee_for_company(db, company.id, 80.0).await?;
    let event = factory::event::EventFactory::new(db, employee.id, company.id)
        .rate(80.0)
        .build()
        .await?;

    let updated = EventService::new(db)
        .update(&actor(employee), event.id, update_dto(at(2025, 6, 1, 9)))
        .await?;

    assert_eq!(updated.title, "Moved lesson");
    assert_eq!(updated.hours, 2.0);
    assert_eq!(updated.amount, 160.0);

    Ok(())
}

/// Tests an employee touching a colleague's session.
///
/// Expected: Err(NotFound) for update, complete and delete
#[tokio::test]
async fn colleague_cannot_modify() -> Result<(), AppError> {
    let test = TestBuilder::new().with_event_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, company) = factory::create_employer_with_company(db).await?;
    let employee = factory::create_employee_for_company(db, company.id, 80.0).await?;
    let colleague = actor(factory::create_employee_for_company(db, company.id, 80.0).await?);
    let event = factory::create_event(db, employee.id, company.id).await?;
    let service = EventService::new(db);

    let update = service
        .update(&colleague, event.id, update_dto(at(2025, 6, 1, 9)))
        .await;
    let complete = service.complete(&colleague, event.id).await;
    let delete = service.delete(&colleague, event.id).await;

    assert!(matches!(update, Err(AppError::NotFound(_))));
    assert!(matches!(complete, Err(AppError::NotFound(_))));
    assert!(matches!(delete, Err(AppError::NotFound(_))));

    Ok(())
}

/// Tests the employer managing an employee's session.
///
/// Expected: Ok for complete and delete
#[tokio::test]
async fn employer_manages_company_sessions() -> Result<(), AppError> {
    let test = TestBuilder::new().with_event_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (owner, company) = factory::create_employer_with_company(db).await?;
    let owner = actor(owner);
    let employee = factory::create_employee_for_company(db, company.id, 80.0).await?;
    let event = factory::create_event(db, employee.id, company.id).await?;
    let service = EventService::new(db);

    let completed = service.complete(&owner, event.id).await?;
    assert!(completed.completed);

    service.delete(&owner, event.id).await?;
    assert!(matches!(
        service.complete(&owner, event.id).await,
        Err(AppError::NotFound(_))
    ));

    Ok(())
}
