use super::field;
use crate::api::Transaction;
use crate::domain::details::{details_href, DetailType};
use crate::domain::StatusDomain;
use crate::templates::components::status_badge;
use crate::templates::format::{date, money};
use maud::{html, Markup};

pub fn transaction_detail(tx: &Transaction) -> Markup {
    html! {
        section class="card detail" data-renderer="transaction" data-id=(tx.id) {
            h2 { "Transaction " (tx.reference.as_deref().unwrap_or(&tx.id)) }
            dl {
                (field("Amount", html! { (money(tx.amount, &tx.currency)) }))
                (field("Status", status_badge(StatusDomain::Payment, &tx.status)))
                (field("Date", html! { (date(tx.created_at.as_ref())) }))
                @if let Some(m) = &tx.method {
                    (field("Method", html! { (m) }))
                }
                @if let Some(d) = &tx.description {
                    (field("Description", html! { (d) }))
                }
                @if let Some(b) = &tx.booking_id {
                    (field("Booking", html! {
                        a href=(details_href(DetailType::Booking, b)) { (b) }
                    }))
                }
            }
        }
    }
}
