use crate::api::models::MonthlyEarning;
use crate::api::{
    ApiError, Booking, DashboardApi, Earnings, Listing, Review, Transaction, User,
};
use crate::app::App;
use crate::config::AppConfig;
use crate::domain::details::{BookingKind, ListingKind};
use crate::domain::UserType;
use crate::responses::error_to_response;
use crate::router::handle;
use astra::{Body, Response};
use chrono::{TimeZone, Utc};
use http::{Method, Request};
use std::io::Read;
use std::sync::{Arc, Mutex};

pub const HOST_TOKEN: &str = "host-token";
pub const GUEST_TOKEN: &str = "guest-token";
pub const AGENT_TOKEN: &str = "agent-token";
pub const GUIDE_TOKEN: &str = "guide-token";
/// Profile the API returns but the dashboard cannot decode.
pub const BROKEN_TOKEN: &str = "broken-token";
/// Makes every call fail as if the API were down.
pub const DOWN_TOKEN: &str = "down-token";

/// In-memory stand-in for the platform API. Records every data call.
#[derive(Clone, Default)]
pub struct FakeApi {
    pub calls: Arc<Mutex<Vec<String>>>,
}

impl FakeApi {
    pub fn calls(&self) -> Vec<String> {
        self.calls.lock().unwrap().clone()
    }

    fn record(&self, call: String) {
        self.calls.lock().unwrap().push(call);
    }

    fn check(&self, token: &str) -> Result<(), ApiError> {
        match token {
            DOWN_TOKEN => Err(ApiError::Status(503, "maintenance".into())),
            HOST_TOKEN | GUEST_TOKEN | AGENT_TOKEN | GUIDE_TOKEN => Ok(()),
            _ => Err(ApiError::Unauthorized),
        }
    }
}

pub fn user(id: &str, name: &str, user_type: UserType) -> User {
    User {
        id: id.into(),
        name: name.into(),
        email: format!("{}@example.com", name.to_lowercase()),
        user_type,
        phone: None,
        created_at: Some(Utc.with_ymd_and_hms(2023, 6, 1, 0, 0, 0).unwrap()),
    }
}

fn booking(id: &str, kind: Option<&str>, title: &str, status: &str) -> Booking {
    Booking {
        id: id.into(),
        booking_type: kind.map(str::to_string),
        title: title.into(),
        listing_id: Some(format!("l-{id}")),
        guest_name: Some("Grace Guest".into()),
        check_in: Some(Utc.with_ymd_and_hms(2024, 7, 1, 15, 0, 0).unwrap()),
        check_out: Some(Utc.with_ymd_and_hms(2024, 7, 5, 11, 0, 0).unwrap()),
        guests: Some(2),
        total_price: 480.0,
        currency: "USD".into(),
        status: status.into(),
        payment_status: Some("paid".into()),
        check_in_status: Some("not_checked_in".into()),
    }
}

pub fn fixture_bookings() -> Vec<Booking> {
    vec![
        booking("42", Some("property"), "Lake House", "confirmed"),
        booking("43", Some("tour"), "Old Town Walk", "checked_in"),
        booking("44", None, "Harbor Loft", "cancelled"),
    ]
}

fn transaction(id: &str, status: &str, amount: f64) -> Transaction {
    Transaction {
        id: id.into(),
        reference: Some(format!("TX-{id}")),
        amount,
        currency: "USD".into(),
        status: status.into(),
        method: Some("card".into()),
        description: Some("Booking payment".into()),
        created_at: Some(Utc.with_ymd_and_hms(2024, 6, 20, 9, 30, 0).unwrap()),
        booking_id: Some("42".into()),
    }
}

impl DashboardApi for FakeApi {
    fn login(&self, email: &str, password: &str) -> Result<String, ApiError> {
        match (email, password) {
            ("hana@example.com", "secret") => Ok(HOST_TOKEN.into()),
            ("gus@example.com", "secret") => Ok(GUEST_TOKEN.into()),
            ("odd@example.com", "secret") => Ok("tok; Path=/admin".into()),
            ("down@example.com", _) => Err(ApiError::Network("connection refused".into())),
            _ => Err(ApiError::Unauthorized),
        }
    }

    fn current_user(&self, token: &str) -> Result<User, ApiError> {
        match token {
            HOST_TOKEN => Ok(user("1", "Hana", UserType::Host)),
            GUEST_TOKEN => Ok(user("2", "Gus", UserType::Guest)),
            AGENT_TOKEN => Ok(user("3", "Ari", UserType::Agent)),
            GUIDE_TOKEN => Ok(user("4", "Tove", UserType::TourGuide)),
            BROKEN_TOKEN => Err(ApiError::Decode("unknown variant `admin`".into())),
            other => self.check(other).and(Err(ApiError::Unauthorized)),
        }
    }

    fn bookings(&self, token: &str) -> Result<Vec<Booking>, ApiError> {
        self.check(token)?;
        self.record("bookings".into());
        Ok(fixture_bookings())
    }

    fn booking(
        &self,
        token: &str,
        id: &str,
        kind: Option<BookingKind>,
    ) -> Result<Booking, ApiError> {
        self.check(token)?;
        self.record(format!(
            "booking:{id}:{}",
            kind.map(|k| k.as_str()).unwrap_or("-")
        ));
        fixture_bookings()
            .into_iter()
            .find(|b| b.id == id)
            .ok_or(ApiError::NotFound)
    }

    fn transactions(&self, token: &str) -> Result<Vec<Transaction>, ApiError> {
        self.check(token)?;
        self.record("transactions".into());
        Ok(vec![
            transaction("9001", "paid", 480.0),
            transaction("9002", "PENDING", 120.0),
        ])
    }

    fn transaction(&self, token: &str, id: &str) -> Result<Transaction, ApiError> {
        self.check(token)?;
        self.record(format!("transaction:{id}"));
        match id {
            "9001" => Ok(transaction("9001", "paid", 480.0)),
            _ => Err(ApiError::NotFound),
        }
    }

    fn listing(&self, token: &str, id: &str, kind: ListingKind) -> Result<Listing, ApiError> {
        self.check(token)?;
        self.record(format!("listing:{id}:{}", kind.as_str()));
        if id == "missing" {
            return Err(ApiError::NotFound);
        }
        Ok(Listing {
            id: id.into(),
            title: match kind {
                ListingKind::Property => "Lake House".into(),
                ListingKind::Tour => "Old Town Walk".into(),
            },
            location: Some("Bled, Slovenia".into()),
            price: 160.0,
            currency: "EUR".into(),
            description: Some("Quiet and close to the water.".into()),
            capacity: Some(4),
            rating: Some(4.8),
        })
    }

    fn user(&self, token: &str, id: &str) -> Result<User, ApiError> {
        self.check(token)?;
        self.record(format!("user:{id}"));
        match id {
            "7" => Ok(user("7", "Ada", UserType::Guest)),
            _ => Err(ApiError::NotFound),
        }
    }

    fn earnings(&self, token: &str) -> Result<Earnings, ApiError> {
        self.check(token)?;
        self.record("earnings".into());
        Ok(Earnings {
            total: 2500.0,
            pending: 300.0,
            paid_out: 2200.0,
            currency: "USD".into(),
            monthly: vec![
                MonthlyEarning { month: "2024-05".into(), amount: 1000.0, bookings: 3 },
                MonthlyEarning { month: "2024-06".into(), amount: 1500.0, bookings: 4 },
            ],
        })
    }

    fn reviews(&self, token: &str) -> Result<Vec<Review>, ApiError> {
        self.check(token)?;
        self.record("reviews".into());
        Ok(vec![
            Review {
                id: "r1".into(),
                author_name: "Grace".into(),
                rating: 5,
                comment: "Spotless and quiet.".into(),
                listing_title: Some("Lake House".into()),
                created_at: None,
            },
            Review {
                id: "r2".into(),
                author_name: "Milo".into(),
                rating: 4,
                comment: "Great host.".into(),
                listing_title: None,
                created_at: None,
            },
        ])
    }
}

/// App wired to a fresh `FakeApi`; the fake is returned to inspect calls.
pub fn test_app() -> (App, FakeApi) {
    let fake = FakeApi::default();
    let app = App::new(AppConfig::default(), Box::new(fake.clone()));
    (app, fake)
}

/// Run a request through the router the same way `main` does.
pub fn send(app: &App, req: Request<Body>) -> Response {
    handle(req, app).unwrap_or_else(error_to_response)
}

pub fn get(app: &App, uri: &str, token: Option<&str>) -> Response {
    let mut builder = Request::builder().method(Method::GET).uri(uri);
    if let Some(t) = token {
        builder = builder.header("Cookie", format!("session={t}"));
    }
    send(app, builder.body(Body::empty()).unwrap())
}

pub fn body_string(resp: Response) -> String {
    let mut body = String::new();
    resp.into_body().reader().read_to_string(&mut body).unwrap();
    body
}

pub fn location(resp: &Response) -> String {
    resp.headers()
        .get("Location")
        .and_then(|v| v.to_str().ok())
        .unwrap_or("")
        .to_string()
}
