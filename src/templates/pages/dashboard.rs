use crate::api::{Booking, Earnings, User};
use crate::domain::details::{details_href, BookingKind, DetailType};
use crate::domain::{StatusDomain, UserType};
use crate::templates::components::{card, empty_state, stat_card, status_badge};
use crate::templates::desktop_layout;
use crate::templates::format::{date, money};
use maud::{html, Markup};

pub struct DashboardVm {
    pub user: User,
    pub bookings: Vec<Booking>,
    /// `None` for roles that have no earnings.
    pub earnings: Option<Earnings>,
}

const RECENT_LIMIT: usize = 10;

pub fn dashboard_page(vm: &DashboardVm) -> Markup {
    let role = vm.user.user_type;
    let (heading, bookings_label) = match role {
        UserType::Host => ("Host Dashboard", "Bookings on your properties"),
        UserType::Guest => ("My Trips", "Trips"),
        UserType::Agent => ("Agent Dashboard", "Managed bookings"),
        UserType::TourGuide => ("Tour Guide Dashboard", "Tour bookings"),
    };
    let bookings: Vec<&Booking> = match role {
        // Tour guides only see tours; untyped bookings are kept.
        UserType::TourGuide => vm
            .bookings
            .iter()
            .filter(|b| b.kind() != Some(BookingKind::Property))
            .collect(),
        _ => vm.bookings.iter().collect(),
    };
    let upcoming = bookings
        .iter()
        .filter(|b| matches!(b.status.to_lowercase().as_str(), "pending" | "confirmed"))
        .count();

    desktop_layout(
        heading,
        Some(&vm.user),
        html! {
            main class="container" data-role=(role.dashboard_path().trim_start_matches('/')) {
                h1 { (heading) }
                p { "Signed in as " strong { (vm.user.email) } }

                div class="stats" {
                    (stat_card(bookings_label, &bookings.len().to_string()))
                    (stat_card("Upcoming", &upcoming.to_string()))
                    @match (&vm.earnings, role) {
                        (Some(e), UserType::Agent) => (stat_card("Commission earned", &money(e.total, &e.currency))),
                        (Some(e), _) => (stat_card("Total earnings", &money(e.total, &e.currency))),
                        (None, _) => (stat_card("Total spent", &money(total_spent(&bookings), currency_of(&bookings)))),
                    }
                }

                (card("Recent activity", bookings_table(role, &bookings)))
            }
        },
    )
}

fn bookings_table(role: UserType, bookings: &[&Booking]) -> Markup {
    if bookings.is_empty() {
        return empty_state("No bookings yet.");
    }

    html! {
        table class="bookings" {
            thead {
                tr {
                    th { @if role == UserType::Guest { "Trip" } @else { "Listing" } }
                    @if role != UserType::Guest {
                        th { "Guest" }
                    }
                    th { "Check-in" }
                    th { "Total" }
                    th { "Status" }
                    @if role == UserType::Guest {
                        th { "Payment" }
                    } @else {
                        th { "Check-in status" }
                    }
                }
            }
            tbody {
                @for b in bookings.iter().take(RECENT_LIMIT) {
                    tr {
                        td { a href=(booking_href(b)) { (b.title) } }
                        @if role != UserType::Guest {
                            td { (b.guest_name.as_deref().unwrap_or("—")) }
                        }
                        td { (date(b.check_in.as_ref())) }
                        td { (money(b.total_price, &b.currency)) }
                        td { (status_badge(StatusDomain::Booking, &b.status)) }
                        @if role == UserType::Guest {
                            td { (optional_badge(StatusDomain::Payment, b.payment_status.as_deref())) }
                        } @else {
                            td { (optional_badge(StatusDomain::CheckIn, b.check_in_status.as_deref())) }
                        }
                    }
                }
            }
        }
    }
}

fn optional_badge(domain: StatusDomain, raw: Option<&str>) -> Markup {
    match raw {
        Some(s) => status_badge(domain, s),
        None => html! { "—" },
    }
}

/// Details link that keeps the booking's sub-type when known.
pub fn booking_href(b: &Booking) -> String {
    let kind = match b.kind() {
        Some(BookingKind::Property) => DetailType::PropertyBooking,
        Some(BookingKind::Tour) => DetailType::TourBooking,
        None => DetailType::Booking,
    };
    details_href(kind, &b.id)
}

fn total_spent(bookings: &[&Booking]) -> f64 {
    bookings
        .iter()
        .filter(|b| !matches!(b.status.to_lowercase().as_str(), "cancelled" | "canceled" | "rejected"))
        .map(|b| b.total_price)
        .sum()
}

fn currency_of<'a>(bookings: &[&'a Booking]) -> &'a str {
    bookings.first().map(|b| b.currency.as_str()).unwrap_or("USD")
}
