use super::field;
use crate::api::User;
use crate::templates::format::date;
use maud::{html, Markup};

pub fn user_detail(user: &User) -> Markup {
    html! {
        section class="card detail" data-renderer="user" data-id=(user.id) {
            h2 { (user.name) }
            dl {
                (field("Email", html! { a href=(format!("mailto:{}", user.email)) { (user.email) } }))
                (field("Role", html! { span class="role-badge" { (user.user_type.label()) } }))
                @if let Some(p) = &user.phone {
                    (field("Phone", html! { (p) }))
                }
                (field("Member since", html! { (date(user.created_at.as_ref())) }))
            }
        }
    }
}
