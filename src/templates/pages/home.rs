// templates/pages/home.rs

use crate::api::User;
use crate::templates::{card, desktop_layout};
use maud::{html, Markup};

pub fn home_page(user: Option<&User>) -> Markup {
    desktop_layout(
        "Home",
        user,
        html! {
            main class="container" {
                h1 { "Wayfarer" }
                p class="lead" { "Stays, tours and the people who run them." }

                @match user {
                    Some(u) => (card("Welcome back", html! {
                        p { "Signed in as " strong { (u.name) } "." }
                        a href=(u.user_type.dashboard_path()) class="button" { "Go to your dashboard" }
                    })),
                    None => (card("Get started", html! {
                        p { "Hosts, guests, agents and tour guides each get their own dashboard." }
                        a href="/login" class="button" { "Sign in" }
                    })),
                }
            }
        },
    )
}
