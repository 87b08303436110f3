use crate::templates::desktop_layout;
use maud::{html, Markup};

/// Sign-in form. `error` is shown above the form after a failed attempt.
pub fn login_page(email: &str, error: Option<&str>) -> Markup {
    desktop_layout(
        "Sign in",
        None,
        html! {
            main class="container narrow" {
                h1 { "Sign in" }

                @if let Some(msg) = error {
                    p class="notice notice-error" role="alert" { (msg) }
                }

                form method="post" action="/auth/login" class="login-form" {
                    label for="email" { "Email address" }
                    input type="email" id="email" name="email" value=(email)
                        autocomplete="email" required;

                    label for="password" { "Password" }
                    input type="password" id="password" name="password"
                        autocomplete="current-password" required;

                    button type="submit" class="primary" { "Sign in" }
                }
            }
        },
    )
}
