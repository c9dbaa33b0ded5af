use super::*;

/// Tests the filters used for invoice generation.
///
/// Verifies that open sessions and other clients are skipped, and that invoiced
/// sessions are only skipped when asked to.
///
/// Expected: Ok with the matching completed sessions
#[tokio::test]
async fn filters_completed_by_client_and_invoiced() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_event_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, company) = factory::create_employer_with_company(db).await?;
    let employee = factory::create_employee_for_company(db, company.id, 80.0).await?;

    let billed = factory::event::EventFactory::new(db, employee.id, company.id)
        .client("Smith Family")
        .span(at(2025, 3, 3, 9), at(2025, 3, 3, 10))
        .completed(true)
        .invoiced(true)
        .build()
        .await?;
    let open = factory::event::EventFactory::new(db, employee.id, company.id)
        .client("Smith Family")
        .span(at(2025, 3, 4, 9), at(2025, 3, 4, 10))
        .completed(true)
        .build()
        .await?;
    factory::event::EventFactory::new(db, employee.id, company.id)
        .client("Smith Family")
        .span(at(2025, 3, 5, 9), at(2025, 3, 5, 10))
        .build()
        .await?;
    factory::event::EventFactory::new(db, employee.id, company.id)
        .client("Jones Family")
        .span(at(2025, 3, 6, 9), at(2025, 3, 6, 10))
        .completed(true)
        .build()
        .await?;

    let repo = EventRepository::new(db);
    let (start, end) = (at(2025, 3, 1, 0), at(2025, 4, 1, 0));

    let all = repo
        .get_completed_for_company(company.id, start, end, Some("Smith Family"), false)
        .await?;
    let unbilled = repo
        .get_completed_for_company(company.id, start, end, Some("Smith Family"), true)
        .await?;
    let any_client = repo
        .get_completed_for_company(company.id, start, end, None, false)
        .await?;

    assert_eq!(
        all.iter().map(|event| event.id).collect::<Vec<_>>(),
        vec![billed.id, open.id]
    );
    assert_eq!(
        unbilled.iter().map(|event| event.id).collect::<Vec<_>>(),
        vec![open.id]
    );
    assert_eq!(any_client.len(), 3);

    Ok(())
}
