use sea_orm::{ColumnTrait, EntityTrait, PaginatorTrait, QueryFilter};

use super::*;

fn company_params(email: &str) -> SaveCompanyParams {
    SaveCompanyParams {
        name: "Acme Tutoring".to_string(),
        email: email.to_string(),
        phone: "021 555 0100".to_string(),
        registration_number: None,
        vat_number: None,
        industry: None,
        size: None,
        address: Default::default(),
        banking: Default::default(),
    }
}

/// Tests creating an employer and their company together.
///
/// Expected: Ok with the user linked to the new company it owns
#[tokio::test]
async fn creates_employer_with_owned_company() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_company_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (user, company) = UserRepository::new(db)
        .create_with_company(
            CreateUserParams {
                role: Role::Employer,
                ..employee_params("owner@example.com")
            },
            company_params("billing@acme.test"),
        )
        .await?;

    assert_eq!(company.owner_id, user.id);
    assert_eq!(user.company_id, Some(company.id));

    let stored = entity::prelude::User::find_by_id(user.id)
        .one(db)
        .await?
        .unwrap();
    assert_eq!(stored.company_id, Some(company.id));

    Ok(())
}

/// Tests that a failing company insert rolls the account back.
///
/// Expected: Err on the duplicate company email and no user row left behind
#[tokio::test]
async fn rolls_back_user_when_company_insert_fails() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_company_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let owner = factory::create_user(db).await?;
    factory::company::CompanyFactory::new(db, owner.id)
        .email("billing@acme.test")
        .build()
        .await?;

    let result = UserRepository::new(db)
        .create_with_company(
            CreateUserParams {
                role: Role::Employer,
                ..employee_params("owner@example.com")
            },
            company_params("billing@acme.test"),
        )
        .await;

    assert!(result.is_err());

    let orphans = entity::prelude::User::find()
        .filter(entity::user::Column::Email.eq("owner@example.com"))
        .count(db)
        .await?;
    assert_eq!(orphans, 0);

    Ok(())
}
