use super::*;

/// Tests replacing names and profile.
///
/// Expected: Ok(Some) with every profile field replaced, including cleared ones
#[tokio::test]
async fn replaces_names_and_profile() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_company_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::user::UserFactory::new(db)
        .hourly_rate(90.0)
        .build()
        .await?;

    let updated = UserRepository::new(db)
        .update_profile(
            user.id,
            UpdateProfileParams {
                first_name: "Ada".to_string(),
                last_name: "Lovelace".to_string(),
                profile: ProfileDto {
                    department: Some("Maths".to_string()),
                    ..Default::default()
                },
            },
        )
        .await?
        .unwrap();

    assert_eq!(updated.full_name(), "Ada Lovelace");
    assert_eq!(updated.profile.department.as_deref(), Some("Maths"));
    assert_eq!(updated.profile.hourly_rate, None);

    Ok(())
}

/// Expected: Ok(None) for an unknown user
#[tokio::test]
async fn returns_none_for_unknown_user() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_company_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let result = UserRepository::new(db)
        .update_profile(
            9999,
            UpdateProfileParams {
                first_name: "Ada".to_string(),
                last_name: "Lovelace".to_string(),
                profile: ProfileDto::default(),
            },
        )
        .await?;

    assert!(result.is_none());

    Ok(())
}
