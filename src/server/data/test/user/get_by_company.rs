use super::*;

/// Tests listing the members of one company.
///
/// Expected: Ok with owner and employee of the company, none from other companies
#[tokio::test]
async fn returns_only_company_members() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_company_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (owner, company) = factory::create_employer_with_company(db).await?;
    let employee = factory::create_employee_for_company(db, company.id, 80.0).await?;
    let (_, other_company) = factory::create_employer_with_company(db).await?;
    factory::create_employee_for_company(db, other_company.id, 80.0).await?;

    let members = UserRepository::new(db).get_by_company(company.id).await?;

    let mut ids: Vec<i32> = members.iter().map(|user| user.id).collect();
    ids.sort();
    assert_eq!(ids, vec![owner.id, employee.id]);

    Ok(())
}
