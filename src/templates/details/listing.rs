use super::field;
use crate::api::Listing;
use crate::domain::details::ListingKind;
use crate::templates::format::money;
use maud::{html, Markup};

/// Property or tour; `kind` only changes wording.
pub fn listing_detail(listing: &Listing, kind: ListingKind) -> Markup {
    let price_unit = match kind {
        ListingKind::Property => "per night",
        ListingKind::Tour => "per person",
    };

    html! {
        section class="card detail" data-renderer="listing" data-kind=(kind.as_str()) data-id=(listing.id) {
            h2 { (listing.title) }
            @if let Some(loc) = &listing.location {
                p class="muted" { (loc) }
            }
            dl {
                (field("Price", html! { (money(listing.price, &listing.currency)) " " (price_unit) }))
                @if let Some(c) = listing.capacity {
                    (field(if kind == ListingKind::Tour { "Group size" } else { "Sleeps" }, html! { (c) }))
                }
                @if let Some(r) = listing.rating {
                    (field("Rating", html! { (format!("{r:.1}")) " / 5" }))
                }
            }
            @if let Some(desc) = &listing.description {
                p { (desc) }
            }
        }
    }
}
