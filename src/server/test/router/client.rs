use super::*;

/// Tests that employees can list but not add clients.
///
/// Expected: 200 for the list, 403 for the create
#[tokio::test]
async fn employees_cannot_add_clients() -> Result<(), AppError> {
    let test = TestBuilder::new().with_event_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, company) = factory::create_employer_with_company(db).await?;
    factory::create_client(db, company.id).await?;
    let employee = factory::create_employee_for_company(db, company.id, 80.0).await?;
    let token = token_for(&employee);

    let list = app(db)
        .oneshot(request(Method::GET, "/api/clients", Some(&token), None))
        .await
        .unwrap();
    let create = app(db)
        .oneshot(request(
            Method::POST,
            "/api/clients",
            Some(&token),
            Some(json!({ "name": "Acme", "email": null, "phone": null, "hourly_rate": null })),
        ))
        .await
        .unwrap();

    assert_eq!(list.status(), StatusCode::OK);
    assert_eq!(json_body(list).await.as_array().map(Vec::len), Some(1));
    assert_eq!(create.status(), StatusCode::FORBIDDEN);

    Ok(())
}

/// Expected: 201 with the default rate applied
#[tokio::test]
async fn employer_adds_client() -> Result<(), AppError> {
    let test = TestBuilder::new().with_event_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (owner, _) = factory::create_employer_with_company(db).await?;

    let response = app(db)
        .oneshot(request(
            Method::POST,
            "/api/clients",
            Some(&token_for(&owner)),
            Some(json!({ "name": "Acme", "email": null, "phone": null, "hourly_rate": null })),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::CREATED);
    assert_eq!(json_body(response).await["hourly_rate"], 75.0);

    Ok(())
}
