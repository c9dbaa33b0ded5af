pub use sea_orm_migration::prelude::*;

mod m20250901_000001_create_user_table;
mod m20250901_000002_create_company_table;
mod m20250901_000003_create_client_table;
mod m20250901_000004_create_event_table;
mod m20250902_000005_create_invoice_table;
mod m20250902_000006_create_invoice_item_table;
mod m20250903_000007_create_time_entry_table;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20250901_000001_create_user_table::Migration),
            Box::new(m20250901_000002_create_company_table::Migration),
            Box::new(m20250901_000003_create_client_table::Migration),
            Box::new(m20250901_000004_create_event_table::Migration),
            Box::new(m20250902_000005_create_invoice_table::Migration),
            Box::new(m20250902_000006_create_invoice_item_table::Migration),
            Box::new(m20250903_000007_create_time_entry_table::Migration),
        ]
    }
}
