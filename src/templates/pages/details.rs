use crate::api::User;
use crate::templates::desktop_layout;
use maud::{html, Markup};

/// Frame shared by every details view; `body` comes from the chosen renderer.
pub fn details_page(title: &str, user: Option<&User>, body: Markup) -> Markup {
    desktop_layout(
        title,
        user,
        html! {
            main class="container" {
                p { a href="javascript:history.back()" class="back-link" { "← Back" } }
                h1 { (title) }
                (body)
            }
        },
    )
}
