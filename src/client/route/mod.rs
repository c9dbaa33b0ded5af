pub mod calendar;
pub mod clients;
pub mod dashboard;
pub mod employee_view;
pub mod employees;
pub mod invoices;
pub mod landing;
pub mod login;
pub mod not_found;
pub mod profile;
pub mod register;
pub mod settings;
pub mod time_tracking;

pub use calendar::Calendar;
pub use clients::Clients;
pub use dashboard::Dashboard;
pub use employee_view::EmployeeView;
pub use employees::Employees;
pub use invoices::{AllInvoices, Invoices};
pub use landing::Landing;
pub use login::Login;
pub use not_found::NotFound;
pub use profile::Profile;
pub use register::Register;
pub use settings::Settings;
pub use time_tracking::TimeTracking;
