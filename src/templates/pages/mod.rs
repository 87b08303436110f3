pub mod dashboard;
pub mod details;
pub mod earnings;
pub mod home;
pub mod login;
pub mod not_found;
pub mod payments;
pub mod reviews;

pub use dashboard::{dashboard_page, DashboardVm};
pub use details::details_page;
pub use earnings::earnings_page;
pub use home::home_page;
pub use login::login_page;
pub use not_found::not_found_page;
pub use payments::payments_page;
pub use reviews::reviews_page;
