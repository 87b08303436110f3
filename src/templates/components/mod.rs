use maud::{html, Markup};

pub mod badge;
pub mod error;
pub mod topbar;

pub use badge::status_badge;
pub use error::error_page;
pub use topbar::topbar;

pub fn card(title: &str, body: Markup) -> Markup {
    html! {
        section class="card" {
            h3 { (title) }
            div class="card-body" {
                (body)
            }
        }
    }
}

/// Small headline number used on the dashboards.
pub fn stat_card(label: &str, value: &str) -> Markup {
    html! {
        div class="card stat" {
            p class="stat-label" { (label) }
            p class="stat-value" { (value) }
        }
    }
}

pub fn empty_state(message: &str) -> Markup {
    html! {
        p class="empty" { (message) }
    }
}
