use crate::api::User;
use maud::{html, Markup};

/// Header bar: brand, role navigation and the signed-in user.
pub fn topbar(user: Option<&User>) -> Markup {
    html! {
        header class="topbar" {
            a class="brand" href="/" { "Wayfarer" }

            @if let Some(u) = user {
                nav {
                    ul {
                        @for (href, label) in u.user_type.nav_items() {
                            li { a href=(href) { (label) } }
                        }
                    }
                }
                div class="topbar-user" {
                    span class="user-name" { (u.name) }
                    span class="role-badge" { (u.user_type.label()) }
                    form method="post" action="/logout" {
                        button type="submit" class="link" { "Log out" }
                    }
                }
            } @else {
                a href="/login" class="login-link" { "Sign in" }
            }
        }
    }
}
