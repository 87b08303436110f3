//! Detail renderers chosen by the details dispatcher.

mod booking;
mod fallback;
mod listing;
mod transaction;
mod user;

pub use booking::booking_detail;
pub use fallback::{invalid_link_panel, unsupported_panel};
pub use listing::listing_detail;
pub use transaction::transaction_detail;
pub use user::user_detail;

use maud::{html, Markup};

/// One `dt`/`dd` row.
fn field(label: &str, value: Markup) -> Markup {
    html! {
        dt { (label) }
        dd { (value) }
    }
}
