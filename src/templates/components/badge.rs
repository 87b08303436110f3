use crate::domain::status::{present, StatusDomain};
use maud::{html, Markup};

/// Colored status pill. Booking statuses also carry an icon.
pub fn status_badge(domain: StatusDomain, raw: &str) -> Markup {
    let p = present(domain, raw);

    html! {
        span class=(format!("badge {}", p.color_class)) data-status=(raw) {
            @if domain == StatusDomain::Booking {
                i class=(format!("icon icon-{}", p.icon_id)) aria-hidden="true" {}
                " "
            }
            (p.canonical_text)
        }
    }
}
