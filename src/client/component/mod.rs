pub mod banner;
pub mod calendar;
pub mod company_form;
pub mod header;
pub mod layout;
pub mod modal;
pub mod month_nav;
pub mod page;
pub mod protected_layout;
pub mod sidebar;

pub use banner::{Banner, Notice};
pub use calendar::MonthCalendar;
pub use company_form::CompanyFields;
pub use header::Header;
pub use layout::Layout;
pub use modal::{ConfirmationModal, Modal};
pub use month_nav::MonthNav;
pub use page::{ErrorPage, LoadingPage, Page};
pub use protected_layout::{ProtectedLayout, RequiresEmployer, RequiresLoggedIn};
pub use sidebar::Sidebar;
