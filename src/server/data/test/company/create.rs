use super::*;

/// Tests creating a company for its owner.
///
/// Verifies that the company is stored with its address and that the owner's
/// `company_id` now points at it.
///
/// Expected: Ok with the owner linked to the new company
#[tokio::test]
async fn creates_company_and_links_owner() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_company_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let owner = factory::user::UserFactory::new(db)
        .role("employer")
        .build()
        .await?;

    let company = CompanyRepository::new(db)
        .create(owner.id, company_params("Acme Tutoring", "hello@acme.test"))
        .await?;

    assert_eq!(company.owner_id, owner.id);
    assert_eq!(company.address.city.as_deref(), Some("Cape Town"));

    let owner = entity::prelude::User::find_by_id(owner.id)
        .one(db)
        .await?
        .unwrap();
    assert_eq!(owner.company_id, Some(company.id));

    Ok(())
}
