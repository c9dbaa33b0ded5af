use super::*;

/// Tests joining a company with a partial profile.
///
/// Verifies that provided profile fields overwrite stored ones while absent fields keep
/// their previous values.
///
/// Expected: Ok(Some) with company set and profile merged
#[tokio::test]
async fn links_company_and_merges_profile() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_company_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, company) = factory::create_employer_with_company(db).await?;
    let user = factory::user::UserFactory::new(db)
        .hourly_rate(90.0)
        .build()
        .await?;

    let joined = UserRepository::new(db)
        .join_company(
            user.id,
            company.id,
            ProfileDto {
                position: Some("Tutor".to_string()),
                ..Default::default()
            },
        )
        .await?
        .unwrap();

    assert_eq!(joined.company_id, Some(company.id));
    assert_eq!(joined.profile.position.as_deref(), Some("Tutor"));
    assert_eq!(joined.profile.hourly_rate, Some(90.0));

    Ok(())
}

/// Expected: Ok(None) for an unknown user
#[tokio::test]
async fn returns_none_for_unknown_user() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_company_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, company) = factory::create_employer_with_company(db).await?;

    let result = UserRepository::new(db)
        .join_company(9999, company.id, ProfileDto::default())
        .await?;

    assert!(result.is_none());

    Ok(())
}
