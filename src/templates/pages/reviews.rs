use crate::api::{Review, User};
use crate::domain::UserType;
use crate::templates::components::empty_state;
use crate::templates::desktop_layout;
use crate::templates::format::{date, stars};
use maud::{html, Markup};

pub fn reviews_page(user: &User, reviews: &[Review]) -> Markup {
    let heading = if user.user_type == UserType::Guest {
        "My Reviews"
    } else {
        "Reviews"
    };
    let average = average_rating(reviews);

    desktop_layout(
        heading,
        Some(user),
        html! {
            main class="container" {
                h1 { (heading) }
                @if let Some(avg) = average {
                    p class="lead" {
                        "Average rating " strong { (format!("{avg:.1}")) } " from " (reviews.len()) " reviews"
                    }
                }

                @if reviews.is_empty() {
                    (empty_state("No reviews yet."))
                } @else {
                    ul class="reviews" {
                        @for r in reviews {
                            li class="card review" id=(format!("review-{}", r.id)) {
                                div class="review-head" {
                                    span class="stars" aria-label=(format!("{} out of 5", r.rating.min(5))) { (stars(r.rating)) }
                                    strong { (r.author_name) }
                                    span class="muted" { (date(r.created_at.as_ref())) }
                                }
                                @if let Some(t) = &r.listing_title {
                                    p class="muted" { (t) }
                                }
                                p { (r.comment) }
                            }
                        }
                    }
                }
            }
        },
    )
}

fn average_rating(reviews: &[Review]) -> Option<f64> {
    if reviews.is_empty() {
        return None;
    }
    let sum: u32 = reviews.iter().map(|r| r.rating.min(5) as u32).sum();
    Some(sum as f64 / reviews.len() as f64)
}
