use crate::api::User;
use crate::templates::desktop_layout;
use maud::{html, Markup};

/// 404 page. Signed-in users get a link back to their own dashboard.
pub fn not_found_page(user: Option<&User>, path: &str) -> Markup {
    desktop_layout(
        "Page not found",
        user,
        html! {
            main class="container narrow not-found" {
                h1 { "404" }
                p { "We couldn't find " code { (path) } "." }
                @match user {
                    Some(u) => a href=(u.user_type.dashboard_path()) { "Back to your dashboard" },
                    None => a href="/" { "Back to home" },
                }
            }
        },
    )
}
