use super::*;

/// Tests company details with members.
///
/// Expected: Ok with the owner reported separately and only employees listed
#[tokio::test]
async fn lists_owner_and_employees() -> Result<(), AppError> {
    let test = TestBuilder::new().with_company_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (owner, company) = factory::create_employer_with_company(db).await?;
    let employee = factory::create_employee_for_company(db, company.id, 90.0).await?;

    let detail = CompanyService::new(db).get_by_id(company.id).await?;

    assert_eq!(detail.company.name, company.name);
    assert_eq!(detail.owner.map(|owner| owner.id), Some(owner.id));
    assert_eq!(detail.employees.len(), 1);
    assert_eq!(detail.employees[0].id, employee.id);

    Ok(())
}

/// Expected: Err(NotFound) for an unknown company
#[tokio::test]
async fn fails_for_missing_company() -> Result<(), AppError> {
    let test = TestBuilder::new().with_company_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let result = CompanyService::new(db).get_by_id(404).await;

    assert!(matches!(result, Err(AppError::NotFound(_))));

    Ok(())
}
