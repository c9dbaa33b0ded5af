use entity::prelude::*;
use sea_orm::{sea_query::TableCreateStatement, EntityTrait, Schema};

use crate::{context::TestContext, error::TestError};

/// Builder for test contexts with a chosen set of tables.
///
/// Tables are created in the order they were added, so add referenced tables before the
/// tables that point at them.
///
/// # Example
///
/// ```rust,ignore
/// let test = TestBuilder::new()
///     .with_table(User)
///     .with_table(Company)
///     .build()
///     .await?;
/// ```
pub struct TestBuilder {
    tables: Vec<TableCreateStatement>,
}

impl Default for TestBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl TestBuilder {
    pub fn new() -> Self {
        Self { tables: Vec::new() }
    }

    /// Adds an entity table to the test database schema.
    ///
    /// # Arguments
    /// - `entity` - SeaORM entity to generate the CREATE TABLE statement from
    pub fn with_table<E: EntityTrait>(mut self, entity: E) -> Self {
        let schema = Schema::new(sea_orm::DbBackend::Sqlite);
        self.tables.push(schema.create_table_from_entity(entity));
        self
    }

    /// Adds the user and company tables.
    pub fn with_company_tables(self) -> Self {
        self.with_table(User).with_table(Company)
    }

    /// Adds everything needed to schedule sessions: users, companies, clients and events.
    pub fn with_event_tables(self) -> Self {
        self.with_company_tables()
            .with_table(Client)
            .with_table(Event)
    }

    /// Adds every Trackify table.
    ///
    /// Use this for invoice tests, which touch events, clients, invoices and their items.
    pub fn with_all_tables(self) -> Self {
        self.with_event_tables()
            .with_table(Invoice)
            .with_table(InvoiceItem)
            .with_table(TimeEntry)
    }

    /// Opens the in-memory database and creates the configured tables.
    ///
    /// # Returns
    /// - `Ok(TestContext)` - Context with database and tables ready
    /// - `Err(TestError::Database)` - Failed to connect or create tables
    pub async fn build(self) -> Result<TestContext, TestError> {
        let mut setup = TestContext::new();

        setup.with_tables(self.tables).await?;

        Ok(setup)
    }
}
