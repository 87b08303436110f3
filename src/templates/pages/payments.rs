use crate::api::{Transaction, User};
use crate::domain::details::{details_href, DetailType};
use crate::domain::StatusDomain;
use crate::templates::components::{empty_state, status_badge};
use crate::templates::desktop_layout;
use crate::templates::format::{date, money};
use maud::{html, Markup};

pub fn payments_page(user: &User, transactions: &[Transaction]) -> Markup {
    desktop_layout(
        "Payments",
        Some(user),
        html! {
            main class="container" {
                h1 { "Payments" }

                @if transactions.is_empty() {
                    (empty_state("No payments yet."))
                } @else {
                    table class="payments" {
                        thead {
                            tr {
                                th { "Date" }
                                th { "Reference" }
                                th { "Description" }
                                th { "Amount" }
                                th { "Status" }
                            }
                        }
                        tbody {
                            @for t in transactions {
                                tr {
                                    td { (date(t.created_at.as_ref())) }
                                    td {
                                        a href=(details_href(DetailType::Transaction, &t.id)) {
                                            (t.reference.as_deref().unwrap_or(&t.id))
                                        }
                                    }
                                    td { (t.description.as_deref().unwrap_or("")) }
                                    td { (money(t.amount, &t.currency)) }
                                    td { (status_badge(StatusDomain::Payment, &t.status)) }
                                }
                            }
                        }
                    }
                }
            }
        },
    )
}
