pub mod details;
pub mod roles;
pub mod status;

pub use details::{parse_detail_request, resolve_detail_view, RenderChoice};
pub use roles::UserType;
pub use status::StatusDomain;
