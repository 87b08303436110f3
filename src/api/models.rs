use crate::domain::details::BookingKind;
use crate::domain::UserType;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer};

// The platform API speaks camelCase JSON. Ids come back as either
// strings or numbers depending on the collection, so they are kept as strings.

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    #[serde(deserialize_with = "id_string")]
    pub id: String,
    pub name: String,
    pub email: String,
    pub user_type: UserType,
    #[serde(default)]
    pub phone: Option<String>,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LoginResponse {
    pub token: String,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Booking {
    #[serde(deserialize_with = "id_string")]
    pub id: String,
    /// "property" or "tour" when the API knows it.
    #[serde(default)]
    pub booking_type: Option<String>,
    pub title: String,
    #[serde(default, deserialize_with = "opt_id_string")]
    pub listing_id: Option<String>,
    #[serde(default)]
    pub guest_name: Option<String>,
    #[serde(default)]
    pub check_in: Option<DateTime<Utc>>,
    #[serde(default)]
    pub check_out: Option<DateTime<Utc>>,
    #[serde(default)]
    pub guests: Option<u32>,
    pub total_price: f64,
    #[serde(default = "default_currency")]
    pub currency: String,
    pub status: String,
    #[serde(default)]
    pub payment_status: Option<String>,
    #[serde(default)]
    pub check_in_status: Option<String>,
}

impl Booking {
    /// Parsed sub-type; unknown or missing values are `None`.
    pub fn kind(&self) -> Option<BookingKind> {
        self.booking_type.as_deref().and_then(BookingKind::from_api)
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Transaction {
    #[serde(deserialize_with = "id_string")]
    pub id: String,
    #[serde(default)]
    pub reference: Option<String>,
    pub amount: f64,
    #[serde(default = "default_currency")]
    pub currency: String,
    pub status: String,
    #[serde(default)]
    pub method: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(default, deserialize_with = "opt_id_string")]
    pub booking_id: Option<String>,
}

/// A bookable property or tour.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Listing {
    #[serde(deserialize_with = "id_string")]
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub location: Option<String>,
    pub price: f64,
    #[serde(default = "default_currency")]
    pub currency: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub capacity: Option<u32>,
    #[serde(default)]
    pub rating: Option<f32>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Earnings {
    pub total: f64,
    pub pending: f64,
    pub paid_out: f64,
    pub currency: String,
    pub monthly: Vec<MonthlyEarning>,
}

impl Default for Earnings {
    fn default() -> Self {
        Self {
            total: 0.0,
            pending: 0.0,
            paid_out: 0.0,
            currency: default_currency(),
            monthly: Vec::new(),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MonthlyEarning {
    /// "2024-03"
    pub month: String,
    pub amount: f64,
    #[serde(default)]
    pub bookings: u32,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Review {
    #[serde(deserialize_with = "id_string")]
    pub id: String,
    pub author_name: String,
    pub rating: u8,
    #[serde(default)]
    pub comment: String,
    #[serde(default)]
    pub listing_title: Option<String>,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
}

fn default_currency() -> String {
    "USD".to_string()
}

#[derive(Deserialize)]
#[serde(untagged)]
enum RawId {
    Str(String),
    Int(i64),
}

impl From<RawId> for String {
    fn from(raw: RawId) -> Self {
        match raw {
            RawId::Str(s) => s,
            RawId::Int(n) => n.to_string(),
        }
    }
}

fn id_string<'de, D>(de: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    RawId::deserialize(de).map(String::from)
}

fn opt_id_string<'de, D>(de: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Option::<RawId>::deserialize(de).map(|o| o.map(String::from))
}
