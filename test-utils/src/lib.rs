//! Trackify Test Utils
//!
//! Shared testing utilities for the Trackify server. Tests describe the tables they need
//! with a [`builder::TestBuilder`], receive a [`context::TestContext`] backed by an in-memory
//! SQLite database, and populate it through the entity factories in [`factory`].
//!
//! ```rust,ignore
//! use test_utils::builder::TestBuilder;
//!
//! #[tokio::test]
//! async fn lists_clients() -> Result<(), TestError> {
//!     let test = TestBuilder::new().with_company_tables().build().await?;
//!     let db = test.db.as_ref().unwrap();
//!
//!     let (owner, company) = test_utils::factory::create_employer_with_company(db).await?;
//!     // ...
//!     Ok(())
//! }
//! ```

pub mod builder;
pub mod context;
pub mod error;
pub mod factory;
