use super::*;

/// Tests that an explicit rate wins over every fallback.
///
/// Expected: Ok with 2 hours billed at 50
#[tokio::test]
async fn uses_explicit_rate() -> Result<(), AppError> {
    let test = TestBuilder::new().with_event_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, company) = factory::create_employer_with_company(db).await?;
    let employee = factory::create_employee_for_company(db, company.id, 120.0).await?;

    let event = EventService::new(db)
        .create(
            &actor(employee),
            CreateEventDto {
                rate: Some(50.0),
                ..create_dto("Smith Family", at(2025, 3, 10, 9), 120)
            },
        )
        .await?;

    assert_eq!(event.rate, 50.0);
    assert_eq!(event.amount, 100.0);

    Ok(())
}

/// Tests falling back to the employee's profile rate.
///
/// Expected: Ok with the employee's rate of 120
#[tokio::test]
async fn falls_back_to_employee_rate() -> Result<(), AppError> {
    let test = TestBuilder::new().with_event_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, company) = factory::create_employer_with_company(db).await?;
    let employee = factory::create_employee_for_company(db, company.id, 120.0).await?;

    let event = EventService::new(db)
        .create(&actor(employee), create_dto("Smith Family", at(2025, 3, 10, 9), 30))
        .await?;

    assert_eq!(event.rate, 120.0);
    assert_eq!(event.hours, 0.5);
    assert_eq!(event.amount, 60.0);

    Ok(())
}

/// Tests falling back to the client's rate, then to the default.
///
/// Expected: Ok with rate 95 for a known client and 75 for an unknown one
#[tokio::test]
async fn falls_back_to_client_then_default_rate() -> Result<(), AppError> {
    let test = TestBuilder::new().with_event_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, company) = factory::create_employer_with_company(db).await?;
    let employee = actor(
        factory::user::UserFactory::new(db)
            .company_id(company.id)
            .build()
            .await?,
    );
    factory::client::ClientFactory::new(db, company.id)
        .name("Smith Family")
        .hourly_rate(95.0)
        .build()
        .await?;
    let service = EventService::new(db);

    let known = service
        .create(&employee, create_dto("Smith Family", at(2025, 3, 10, 9), 60))
        .await?;
    let unknown = service
        .create(&employee, create_dto("Walk-in", at(2025, 3, 11, 9), 60))
        .await?;

    assert_eq!(known.rate, 95.0);
    assert_eq!(unknown.rate, 75.0);

    Ok(())
}

/// Tests the completed default for past and future sessions.
///
/// Expected: past session completed, future session open
#[tokio::test]
async fn completed_defaults_to_started() -> Result<(), AppError> {
    let test = TestBuilder::new().with_event_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (owner, _) = factory::create_employer_with_company(db).await?;
    let owner = actor(owner);
    let service = EventService::new(db);

    let past = service
        .create(&owner, create_dto("Smith Family", Utc::now() - Duration::days(2), 60))
        .await?;
    let future = service
        .create(&owner, create_dto("Smith Family", Utc::now() + Duration::days(2), 60))
        .await?;

    assert!(past.completed);
    assert!(!future.completed);

    Ok(())
}

/// Expected: Err(BadRequest) when the end is not after the start
#[tokio::test]
async fn rejects_end_before_start() -> Result<(), AppError> {
    let test = TestBuilder::new().with_event_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (owner, _) = factory::create_employer_with_company(db).await?;

    let result = EventService::new(db)
        .create(&actor(owner), create_dto("Smith Family", at(2025, 3, 10, 9), 0))
        .await;

    assert!(matches!(result, Err(AppError::BadRequest(_))));

    Ok(())
}

/// Expected: Err(BadRequest) for a blank title
#[tokio::test]
async fn rejects_blank_title() -> Result<(), AppError> {
    let test = TestBuilder::new().with_event_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (owner, _) = factory::create_employer_with_company(db).await?;

    let result = EventService::new(db)
        .create(
            &actor(owner),
            CreateEventDto {
                title: "   ".to_string(),
                ..create_dto("Smith Family", at(2025, 3, 10, 9), 60)
            },
        )
        .await;

    assert!(matches!(result, Err(AppError::BadRequest(_))));

    Ok(())
}

/// Tests an employer scheduling a session for one of their employees.
///
/// Expected: Ok with the session owned by the employee at the employee's rate
#[tokio::test]
async fn employer_schedules_for_employee() -> Result<(), AppError> {
    let test = TestBuilder::new().with_event_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (owner, company) = factory::create_employer_with_company(db).await?;
    let employee = factory::create_employee_for_company(db, company.id, 110.0).await?;

    let event = EventService::new(db)
        .create(
            &actor(owner),
            CreateEventDto {
                employee_id: Some(employee.id),
                ..create_dto("Smith Family", at(2025, 3, 10, 9), 60)
            },
        )
        .await?;

    assert_eq!(event.employee_id, employee.id);
    assert_eq!(event.rate, 110.0);

    Ok(())
}

/// Tests an employee trying to schedule for a colleague.
///
/// Expected: Err(AccessDenied)
#[tokio::test]
async fn employee_cannot_schedule_for_others() -> Result<(), AppError> {
    let test = TestBuilder::new().with_event_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, company) = factory::create_employer_with_company(db).await?;
    let employee = factory::create_employee_for_company(db, company.id, 80.0).await?;
    let colleague = factory::create_employee_for_company(db, company.id, 80.0).await?;

    let result = EventService::new(db)
        .create(
            &actor(employee),
            CreateEventDto {
                employee_id: Some(colleague.id),
                ..create_dto("Smith Family", at(2025, 3, 10, 9), 60)
            },
        )
        .await;

    assert!(matches!(
        result,
        Err(AppError::AuthErr(AuthError::AccessDenied(_, _)))
    ));

    Ok(())
}
