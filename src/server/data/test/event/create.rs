use super::*;

/// Tests creating a session with billing derived from its span.
///
/// Verifies that hours and amount are stored and that the employee and company names
/// are resolved on the returned event.
///
/// Expected: Ok with 1.5 hours, amount 150 and names resolved
#[tokio::test]
async fn stores_billing_and_resolves_names() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_event_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, company) = factory::create_employer_with_company(db).await?;
    let employee = factory::user::UserFactory::new(db)
        .name("Sam", "Tutor")
        .company_id(company.id)
        .build()
        .await?;

    let start = at(2025, 3, 10, 14);
    let event = EventRepository::new(db)
        .create(CreateEventParams {
            title: "Algebra".to_string(),
            client: "Smith Family".to_string(),
            employee_id: employee.id,
            company_id: company.id,
            color: Some("#2563eb".to_string()),
            completed: false,
            billing: Billing::new(start, start + Duration::minutes(90), 100.0),
        })
        .await?;

    assert_eq!(event.hours, 1.5);
    assert_eq!(event.amount, 150.0);
    assert!(!event.invoiced);
    assert_eq!(event.employee_name.as_deref(), Some("Sam Tutor"));
    assert_eq!(event.company_name.as_deref(), Some(company.name.as_str()));

    Ok(())
}
