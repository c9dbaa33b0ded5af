pub use super::client::Entity as Client;
pub use super::company::Entity as Company;
pub use super::event::Entity as Event;
pub use super::invoice::Entity as Invoice;
pub use super::invoice_item::Entity as InvoiceItem;
pub use super::time_entry::Entity as TimeEntry;
pub use super::user::Entity as User;
