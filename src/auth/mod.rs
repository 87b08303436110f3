pub mod guard;
pub mod session;

pub use guard::{optional_user, require_user, CurrentUser};
pub use session::{clear_session_cookie, is_cookie_safe, session_cookie};
