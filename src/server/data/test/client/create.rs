use super::*;

/// Tests creating clients and listing them per company.
///
/// Expected: Ok with clients listed by name and scoped to their company
#[tokio::test]
async fn creates_and_lists_by_company() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_event_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, company) = factory::create_employer_with_company(db).await?;
    let (_, other) = factory::create_employer_with_company(db).await?;
    let repo = ClientRepository::new(db);

    repo.create(company.id, client_params("Zulu Family", 80.0)).await?;
    repo.create(company.id, client_params("Alpha Family", 90.0)).await?;
    repo.create(other.id, client_params("Other Family", 70.0)).await?;

    let clients = repo.get_by_company(company.id).await?;

    let names: Vec<&str> = clients.iter().map(|client| client.name.as_str()).collect();
    assert_eq!(names, vec!["Alpha Family", "Zulu Family"]);
    assert_eq!(clients[0].hourly_rate, 90.0);

    Ok(())
}
