use crate::domain::details::DetailType;
use maud::{html, Markup};

/// Missing or malformed `type`/`id` parameters.
pub fn invalid_link_panel() -> Markup {
    html! {
        section class="card notice notice-error" data-renderer="invalid" {
            h2 { "Invalid link" }
            p { "This details link is missing its type or id." }
            p { a href="/dashboard" { "Back to your dashboard" } }
        }
    }
}

/// Well-formed request for a type this page cannot show.
pub fn unsupported_panel(kind: &str) -> Markup {
    html! {
        section class="card notice notice-info" data-renderer="unsupported" {
            h2 { "Unsupported type" }
            p { "There is no details view for " code { (kind) } "." }
            p { "Supported types:" }
            ul class="supported-types" {
                @for t in DetailType::ALL {
                    li { code { (t.tag()) } }
                }
            }
            p { a href="/dashboard" { "Back to your dashboard" } }
        }
    }
}
