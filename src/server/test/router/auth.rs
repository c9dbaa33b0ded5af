use super::*;

/// Tests registering over HTTP and using the returned token.
///
/// Expected: 201 with a token that authenticates the profile request
#[tokio::test]
async fn registers_and_reads_profile() -> Result<(), AppError> {
    let test = TestBuilder::new().with_company_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let response = app(db)
        .oneshot(request(
            Method::POST,
            "/api/auth/register",
            None,
            Some(json!({
                "email": "jane@example.com",
                "password": "secret123",
                "first_name": "Jane",
                "last_name": "Doe",
                "role": "employee"
            })),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::CREATED);
    let body = json_body(response).await;
    assert_eq!(body["message"], "User created successfully");
    let token = body["token"].as_str().unwrap().to_string();

    let response = app(db)
        .oneshot(request(Method::GET, "/api/users/profile", Some(&token), None))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(json_body(response).await["email"], "jane@example.com");

    Ok(())
}

/// Expected: 400 with the login error message
#[tokio::test]
async fn rejects_wrong_password() -> Result<(), AppError> {
    let test = TestBuilder::new().with_company_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    factory::create_user(db).await?;

    let response = app(db)
        .oneshot(request(
            Method::POST,
            "/api/auth/login",
            None,
            Some(json!({ "email": "nobody@example.com", "password": "whatever" })),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(
        json_body(response).await,
        json!({ "error": "Invalid email or password" })
    );

    Ok(())
}

/// Expected: 401 without a bearer token
#[tokio::test]
async fn protected_route_requires_token() -> Result<(), AppError> {
    let test = TestBuilder::new().with_company_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let response = app(db)
        .oneshot(request(Method::GET, "/api/users/profile", None, None))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);

    Ok(())
}
