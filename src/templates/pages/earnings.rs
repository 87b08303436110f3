use crate::api::{Earnings, User};
use crate::templates::components::{card, empty_state, stat_card};
use crate::templates::desktop_layout;
use crate::templates::format::money;
use maud::{html, Markup};

pub fn earnings_page(user: &User, earnings: &Earnings) -> Markup {
    let cur = earnings.currency.as_str();

    desktop_layout(
        "Earnings",
        Some(user),
        html! {
            main class="container" {
                div class="page-header" {
                    h1 { "Earnings" }
                    a href="/earnings/export" class="button" download { "Export to Excel" }
                }

                div class="stats" {
                    (stat_card("Total", &money(earnings.total, cur)))
                    (stat_card("Pending payout", &money(earnings.pending, cur)))
                    (stat_card("Paid out", &money(earnings.paid_out, cur)))
                }

                (card("By month", html! {
                    @if earnings.monthly.is_empty() {
                        (empty_state("No earnings recorded yet."))
                    } @else {
                        table class="earnings" {
                            thead { tr { th { "Month" } th { "Bookings" } th { "Amount" } } }
                            tbody {
                                @for m in &earnings.monthly {
                                    tr {
                                        td { (m.month) }
                                        td { (m.bookings) }
                                        td { (money(m.amount, cur)) }
                                    }
                                }
                            }
                        }
                    }
                }))
            }
        },
    )
}
