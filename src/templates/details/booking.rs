use super::field;
use crate::api::Booking;
use crate::domain::details::{details_href, BookingKind, DetailType};
use crate::domain::StatusDomain;
use crate::templates::components::status_badge;
use crate::templates::format::{date, money};
use maud::{html, Markup};

pub fn booking_detail(booking: &Booking, booking_type: Option<BookingKind>) -> Markup {
    // Prefer the sub-type from the link; fall back to what the API reports.
    let kind = booking_type.or_else(|| booking.kind());

    html! {
        section class="card detail" data-renderer="booking" data-id=(booking.id) {
            h2 { (booking.title) }
            dl {
                (field("Booking ID", html! { (booking.id) }))
                @if let Some(k) = kind {
                    (field("Booking type", html! { span class="booking-type" { (k.as_str()) } }))
                }
                @if let Some(name) = &booking.guest_name {
                    (field("Guest", html! { (name) }))
                }
                (field("Check-in", html! { (date(booking.check_in.as_ref())) }))
                (field("Check-out", html! { (date(booking.check_out.as_ref())) }))
                @if let Some(n) = booking.guests {
                    (field("Guests", html! { (n) }))
                }
                (field("Total", html! { (money(booking.total_price, &booking.currency)) }))
                (field("Status", status_badge(StatusDomain::Booking, &booking.status)))
                @if let Some(p) = &booking.payment_status {
                    (field("Payment", status_badge(StatusDomain::Payment, p)))
                }
                @if let Some(c) = &booking.check_in_status {
                    (field("Check-in status", status_badge(StatusDomain::CheckIn, c)))
                }
            }
            @if let (Some(k), Some(listing_id)) = (kind, booking.listing_id.as_deref()) {
                @let listing_type = match k {
                    BookingKind::Property => DetailType::Property,
                    BookingKind::Tour => DetailType::Tour,
                };
                p class="muted" {
                    a href=(details_href(listing_type, listing_id)) { "View " (k.as_str()) }
                }
            }
        }
    }
}
