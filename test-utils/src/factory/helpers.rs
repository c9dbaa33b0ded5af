//! Shared helper utilities for factory methods.

use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr, IntoActiveModel};

static COUNTER: std::sync::atomic::AtomicU64 = std::sync::atomic::AtomicU64::new(1);

/// Gets the next unique counter value for test data.
pub fn next_id() -> u64 {
    COUNTER.fetch_add(1, std::sync::atomic::Ordering::SeqCst)
}

/// Creates an employer together with the company they own, linked both ways.
///
/// # Returns
/// - `Ok((employer, company))` - The employer (with `company_id` set) and their company
/// - `Err(DbErr)` - Database error during creation
pub async fn create_employer_with_company(
    db: &DatabaseConnection,
) -> Result<(entity::user::Model, entity::company::Model), DbErr> {
    let owner = crate::factory::user::UserFactory::new(db)
        .role("employer")
        .build()
        .await?;
    let company = crate::factory::company::create_company(db, owner.id).await?;

    let mut active = owner.into_active_model();
    active.company_id = ActiveValue::Set(Some(company.id));
    let owner = active.update(db).await?;

    Ok((owner, company))
}

/// Creates an employee belonging to `company_id` with the given hourly rate.
pub async fn create_employee_for_company(
    db: &DatabaseConnection,
    company_id: i32,
    hourly_rate: f64,
) -> Result<entity::user::Model, DbErr> {
    crate::factory::user::UserFactory::new(db)
        .company_id(company_id)
        .hourly_rate(hourly_rate)
        .build()
        .await
}
