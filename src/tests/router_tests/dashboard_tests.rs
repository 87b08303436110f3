use crate::tests::utils::*;
use scraper::{Html, Selector};

#[test]
fn dashboard_redirects_by_role() {
    let (app, _) = test_app();
    let cases = [
        (HOST_TOKEN, "/host"),
        (GUEST_TOKEN, "/guest"),
        (AGENT_TOKEN, "/agent"),
        (GUIDE_TOKEN, "/tourguide"),
    ];
    for (token, expected) in cases {
        let resp = get(&app, "/dashboard", Some(token));
        assert_eq!(resp.status(), 302);
        assert_eq!(location(&resp), expected);
    }
}

#[test]
fn host_dashboard_lists_bookings_with_badges() {
    let (app, fake) = test_app();
    let resp = get(&app, "/host", Some(HOST_TOKEN));
    assert_eq!(resp.status(), 200);

    let doc = Html::parse_document(&body_string(resp));
    let h1 = Selector::parse("h1").unwrap();
    let rows = Selector::parse("table.bookings tbody tr").unwrap();
    let badge = Selector::parse("span.badge").unwrap();

    assert_eq!(doc.select(&h1).next().unwrap().inner_html(), "Host Dashboard");
    assert_eq!(doc.select(&rows).count(), 3);

    let labels: Vec<String> = doc
        .select(&badge)
        .map(|b| b.text().collect::<String>().trim().to_string())
        .collect();
    assert!(labels.contains(&"CONFIRMED".to_string()));
    assert!(labels.contains(&"NOTCHECKEDIN".to_string()));

    assert_eq!(fake.calls(), vec!["bookings", "earnings"]);
}

#[test]
fn booking_rows_link_to_typed_details() {
    let (app, _) = test_app();
    let body = body_string(get(&app, "/host", Some(HOST_TOKEN)));
    assert!(body.contains("/details?type=property-booking&amp;id=42"));
    assert!(body.contains("/details?type=tour-booking&amp;id=43"));
    assert!(body.contains("/details?type=booking&amp;id=44"));
}

#[test]
fn guest_dashboard_skips_earnings() {
    let (app, fake) = test_app();
    let resp = get(&app, "/guest", Some(GUEST_TOKEN));
    assert_eq!(resp.status(), 200);

    let body = body_string(resp);
    assert!(body.contains("My Trips"));
    assert!(body.contains("Total spent"));
    // cancelled booking is not counted
    assert!(body.contains("$960.00"));
    assert_eq!(fake.calls(), vec!["bookings"]);
}

#[test]
fn wrong_role_is_sent_to_own_dashboard() {
    let (app, _) = test_app();
    let resp = get(&app, "/host", Some(GUEST_TOKEN));
    assert_eq!(resp.status(), 302);
    assert_eq!(location(&resp), "/guest");
}

#[test]
fn tour_guide_sees_no_property_bookings() {
    let (app, _) = test_app();
    let body = body_string(get(&app, "/tourguide", Some(GUIDE_TOKEN)));
    assert!(body.contains("Tour Guide Dashboard"));
    assert!(body.contains("Old Town Walk"));
    assert!(!body.contains("Lake House"));
}

#[test]
fn topbar_shows_user_and_role_nav() {
    let (app, _) = test_app();
    let doc = Html::parse_document(&body_string(get(&app, "/agent", Some(AGENT_TOKEN))));
    let role = Selector::parse("header.topbar .role-badge").unwrap();
    let links = Selector::parse("header.topbar nav a").unwrap();

    assert_eq!(doc.select(&role).next().unwrap().inner_html(), "Agent");
    let hrefs: Vec<&str> = doc
        .select(&links)
        .filter_map(|a| a.value().attr("href"))
        .collect();
    assert_eq!(hrefs, vec!["/agent", "/earnings", "/payments", "/reviews"]);
}

#[test]
fn api_outage_renders_502() {
    let (app, _) = test_app();
    let resp = get(&app, "/dashboard", Some(DOWN_TOKEN));
    assert_eq!(resp.status(), 502);
    assert!(body_string(resp).contains("unavailable"));
}
