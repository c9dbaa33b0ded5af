//! Factory methods for creating test data.
//!
//! Each entity has a `*Factory` builder for customised rows and a `create_*` shorthand for
//! rows with defaults. Defaults are unique per call (emails, names, invoice numbers) so
//! several rows of the same kind can coexist in one test database.
//!
//! ```rust,ignore
//! use test_utils::factory;
//!
//! let (owner, company) = factory::create_employer_with_company(db).await?;
//! let employee = factory::user::UserFactory::new(db)
//!     .company_id(company.id)
//!     .hourly_rate(120.0)
//!     .build()
//!     .await?;
//! let event = factory::event::EventFactory::new(db, employee.id, company.id)
//!     .client("Acme")
//!     .completed(true)
//!     .build()
//!     .await?;
//! ```

pub mod client;
pub mod company;
pub mod event;
pub mod helpers;
pub mod invoice;
pub mod user;

pub use client::create_client;
pub use company::create_company;
pub use event::create_event;
pub use helpers::{create_employee_for_company, create_employer_with_company};
pub use invoice::create_invoice;
pub use user::create_user;
