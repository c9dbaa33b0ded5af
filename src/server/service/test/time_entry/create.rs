use super::*;

/// Tests logging hours against a client of the actor's company.
///
/// Expected: Ok with the entry owned by the actor and a trimmed description
#[tokio::test]
async fn creates_for_actor() -> Result<(), AppError> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, company) = factory::create_employer_with_company(db).await?;
    let employee = factory::create_employee_for_company(db, company.id, 90.0).await?;
    let client = factory::create_client(db, company.id).await?;
    let service = TimeEntryService::new(db);

    let entry = service
        .create(&actor(employee.clone()), entry_dto(Some(client.id), 2.5))
        .await?;

    assert_eq!(entry.user_id, employee.id);
    assert_eq!(entry.client_id, Some(client.id));
    assert_eq!(entry.description, "Lesson prep");
    assert_eq!(entry.hours, 2.5);

    let listed = service.get_by_user(employee.id).await?;
    assert_eq!(listed, vec![entry]);

    Ok(())
}

/// Expected: Err(BadRequest) for zero, negative and non-finite hours, nothing stored
#[tokio::test]
async fn rejects_non_positive_hours() -> Result<(), AppError> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let user = actor(factory::create_user(db).await?);
    let service = TimeEntryService::new(db);

    for hours in [0.0, -1.5, f64::NAN] {
        let result = service.create(&user, entry_dto(None, hours)).await;
        assert!(matches!(result, Err(AppError::BadRequest(_))));
    }

    assert!(service.get_by_user(user.id).await?.is_empty());

    Ok(())
}

/// Tests the client scope check.
///
/// Expected: Err(NotFound) for a client of another company and for an actor without company
#[tokio::test]
async fn rejects_foreign_client() -> Result<(), AppError> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, company) = factory::create_employer_with_company(db).await?;
    let (_, other) = factory::create_employer_with_company(db).await?;
    let employee = actor(factory::create_employee_for_company(db, company.id, 90.0).await?);
    let loner = actor(factory::create_user(db).await?);
    let foreign = factory::create_client(db, other.id).await?;
    let service = TimeEntryService::new(db);

    let result = service
        .create(&employee, entry_dto(Some(foreign.id), 1.0))
        .await;
    assert!(matches!(result, Err(AppError::NotFound(_))));

    let result = service.create(&loner, entry_dto(Some(foreign.id), 1.0)).await;
    assert!(matches!(result, Err(AppError::NotFound(_))));

    assert!(service.get_by_user(employee.id).await?.is_empty());

    Ok(())
}
