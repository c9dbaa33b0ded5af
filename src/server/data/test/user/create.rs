use super::*;

/// Tests creating a user with profile fields.
///
/// Expected: Ok with the stored role, names and profile returned
#[tokio::test]
async fn creates_user_with_profile() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_company_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = UserRepository::new(db);
    let user = repo
        .create(CreateUserParams {
            profile: ProfileDto {
                phone: Some("555-0100".to_string()),
                hourly_rate: Some(120.0),
                ..Default::default()
            },
            ..employee_params("jane@example.com")
        })
        .await?;

    assert_eq!(user.email, "jane@example.com");
    assert_eq!(user.role, Role::Employee);
    assert_eq!(user.company_id, None);
    assert_eq!(user.profile.phone.as_deref(), Some("555-0100"));
    assert_eq!(user.profile.hourly_rate, Some(120.0));

    Ok(())
}

/// Tests the unique email constraint.
///
/// Expected: Err when a second user is created with the same email
#[tokio::test]
async fn rejects_duplicate_email() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_company_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = UserRepository::new(db);
    repo.create(employee_params("jane@example.com")).await?;

    let result = repo.create(employee_params("jane@example.com")).await;

    assert!(result.is_err());

    Ok(())
}
