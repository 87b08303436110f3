use crate::api::User;
use crate::templates::components::topbar;
use maud::{html, Markup, DOCTYPE};

pub fn desktop_layout(title: &str, user: Option<&User>, content: Markup) -> Markup {
    html! {
        (DOCTYPE)
        html lang="en" {
            head {
                meta charset="utf-8";
                meta name="viewport" content="width=device-width, initial-scale=1.0";
                title { (title) " · Wayfarer" }
                link rel="stylesheet" href="/static/main.css";
            }
            body {
                (topbar(user))
                (content)
            }
        }
    }
}
