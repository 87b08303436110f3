use crate::tests::utils::*;
use scraper::{Html, Selector};

fn renderer(body: &str) -> Option<(String, Option<String>)> {
    let doc = Html::parse_document(body);
    let sel = Selector::parse("[data-renderer]").unwrap();
    doc.select(&sel).next().map(|el| {
        (
            el.value().attr("data-renderer").unwrap_or("").to_string(),
            el.value().attr("data-id").map(str::to_string),
        )
    })
}

fn title(body: &str) -> String {
    let doc = Html::parse_document(body);
    let sel = Selector::parse("title").unwrap();
    doc.select(&sel)
        .next()
        .map(|t| t.text().collect())
        .unwrap_or_default()
}

#[test]
fn property_booking_goes_to_booking_renderer_with_sub_type() {
    let (app, fake) = test_app();
    let resp = get(&app, "/details?type=property-booking&id=42", Some(HOST_TOKEN));
    assert_eq!(resp.status(), 200);

    let body = body_string(resp);
    assert_eq!(
        renderer(&body),
        Some(("booking".to_string(), Some("42".to_string())))
    );
    assert!(body.contains("class=\"booking-type\">property<"));
    assert!(title(&body).starts_with("Property Booking Details"));
    assert_eq!(fake.calls(), vec!["booking:42:property"]);
}

#[test]
fn plain_booking_has_no_sub_type() {
    let (app, fake) = test_app();
    let body = body_string(get(&app, "/details?type=booking&id=44", Some(HOST_TOKEN)));
    assert_eq!(renderer(&body).unwrap().0, "booking");
    assert!(!body.contains("booking-type"));
    assert_eq!(fake.calls(), vec!["booking:44:-"]);
}

#[test]
fn tour_booking_passes_tour() {
    let (app, fake) = test_app();
    let resp = get(&app, "/details?type=tour-booking&id=43", Some(GUIDE_TOKEN));
    assert_eq!(resp.status(), 200);
    assert_eq!(fake.calls(), vec!["booking:43:tour"]);
}

#[test]
fn user_goes_to_user_renderer() {
    let (app, fake) = test_app();
    let body = body_string(get(&app, "/details?type=user&id=7", Some(AGENT_TOKEN)));
    assert_eq!(
        renderer(&body),
        Some(("user".to_string(), Some("7".to_string())))
    );
    assert!(body.contains("ada@example.com"));
    assert_eq!(fake.calls(), vec!["user:7"]);
}

#[test]
fn property_and_tour_share_listing_renderer() {
    let (app, fake) = test_app();
    let body = body_string(get(&app, "/details?type=tour&id=t-9", Some(HOST_TOKEN)));
    let doc = Html::parse_document(&body);
    let sel = Selector::parse("[data-renderer=\"listing\"]").unwrap();
    let el = doc.select(&sel).next().expect("listing renderer");
    assert_eq!(el.value().attr("data-kind"), Some("tour"));
    assert!(body.contains("per person"));

    let body = body_string(get(&app, "/details?type=property&id=p-1", Some(HOST_TOKEN)));
    assert!(body.contains("per night"));
    assert_eq!(fake.calls(), vec!["listing:t-9:tour", "listing:p-1:property"]);
}

#[test]
fn transaction_goes_to_transaction_renderer() {
    let (app, _) = test_app();
    let body = body_string(get(&app, "/details?type=transaction&id=9001", Some(GUEST_TOKEN)));
    assert_eq!(renderer(&body).unwrap().0, "transaction");
    assert!(body.contains("TX-9001"));
    assert!(title(&body).starts_with("Transaction Details"));
}

#[test]
fn missing_params_render_invalid_link_without_fetching() {
    let (app, fake) = test_app();
    for uri in ["/details", "/details?type=user", "/details?id=7", "/details?type=&id="] {
        let resp = get(&app, uri, None);
        assert_eq!(resp.status(), 400, "{uri}");
        let body = body_string(resp);
        assert_eq!(renderer(&body).unwrap().0, "invalid", "{uri}");
        assert!(body.contains("Invalid link"));
        assert!(title(&body).starts_with("View Details"));
    }
    assert!(fake.calls().is_empty());
}

#[test]
fn unknown_type_renders_supported_list() {
    let (app, fake) = test_app();
    let resp = get(&app, "/details?type=widget&id=1", Some(HOST_TOKEN));
    assert_eq!(resp.status(), 200);

    let body = body_string(resp);
    assert_eq!(renderer(&body).unwrap().0, "unsupported");
    assert!(body.contains("<code>widget</code>"));

    let doc = Html::parse_document(&body);
    let items = Selector::parse("ul.supported-types li").unwrap();
    assert_eq!(doc.select(&items).count(), 7);
    // the panel keeps the topbar for a signed-in user
    assert!(body.contains("Hana"));
    assert!(fake.calls().is_empty());
}

#[test]
fn unknown_entity_is_404() {
    let (app, _) = test_app();
    let resp = get(&app, "/details?type=user&id=999", Some(HOST_TOKEN));
    assert_eq!(resp.status(), 404);
}
