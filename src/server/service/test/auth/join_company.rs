use super::*;
use sea_orm::EntityTrait;

/// Expected: Ok with the user linked to the company and profile merged
#[tokio::test]
async fn joins_existing_company() -> Result<(), AppError> {
    let test = TestBuilder::new().with_company_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let keys = JwtKeys::new(SECRET);

    let (_, company) = factory::create_employer_with_company(db).await?;
    let user = factory::create_user(db).await?;

    let (user, joined) = AuthService::new(db, &keys)
        .join_company(
            user.id,
            JoinCompanyDto {
                company_id: company.id,
                profile: ProfileDto {
                    hourly_rate: Some(95.0),
                    ..Default::default()
                },
            },
        )
        .await?;

    assert_eq!(joined.id, company.id);
    assert_eq!(user.company_id, Some(company.id));
    assert_eq!(user.profile.hourly_rate, Some(95.0));

    Ok(())
}

/// Expected: Err(NotFound) for an unknown company
#[tokio::test]
async fn rejects_unknown_company() -> Result<(), AppError> {
    let test = TestBuilder::new().with_company_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let keys = JwtKeys::new(SECRET);

    let user = factory::create_user(db).await?;

    let result = AuthService::new(db, &keys)
        .join_company(
            user.id,
            JoinCompanyDto {
                company_id: 9999,
                profile: ProfileDto::default(),
            },
        )
        .await;

    assert!(matches!(result, Err(AppError::NotFound(_))));

    Ok(())
}

/// Expected: Err(AccessDenied) and the employer stays linked to their own company
#[tokio::test]
async fn employer_cannot_join_company() -> Result<(), AppError> {
    let test = TestBuilder::new().with_company_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let keys = JwtKeys::new(SECRET);

    let (_, target) = factory::create_employer_with_company(db).await?;
    let (employer, own) = factory::create_employer_with_company(db).await?;

    let result = AuthService::new(db, &keys)
        .join_company(
            employer.id,
            JoinCompanyDto {
                company_id: target.id,
                profile: ProfileDto::default(),
            },
        )
        .await;

    assert!(matches!(
        result,
        Err(AppError::AuthErr(AuthError::AccessDenied(_, _)))
    ));

    let stored = entity::prelude::User::find_by_id(employer.id)
        .one(db)
        .await?
        .unwrap();
    assert_eq!(stored.company_id, Some(own.id));

    Ok(())
}
