mod api_error;
mod client;
pub mod models;

pub use api_error::ApiError;
pub use client::RestClient;
pub use models::{Booking, Earnings, Listing, Review, Transaction, User};

use crate::domain::details::{BookingKind, ListingKind};

/// Everything the dashboard needs from the platform API.
/// `token` is the opaque bearer token kept in the session cookie.
pub trait DashboardApi: Send + Sync {
    /// Exchange credentials for a session token.
    fn login(&self, email: &str, password: &str) -> Result<String, ApiError>;

    fn current_user(&self, token: &str) -> Result<User, ApiError>;

    /// Bookings visible to the signed-in user (their trips, or bookings on their listings).
    fn bookings(&self, token: &str) -> Result<Vec<Booking>, ApiError>;

    fn booking(
        &self,
        token: &str,
        id: &str,
        kind: Option<BookingKind>,
    ) -> Result<Booking, ApiError>;

    fn transactions(&self, token: &str) -> Result<Vec<Transaction>, ApiError>;

    fn transaction(&self, token: &str, id: &str) -> Result<Transaction, ApiError>;

    fn listing(&self, token: &str, id: &str, kind: ListingKind) -> Result<Listing, ApiError>;

    fn user(&self, token: &str, id: &str) -> Result<User, ApiError>;

    fn earnings(&self, token: &str) -> Result<Earnings, ApiError>;

    fn reviews(&self, token: &str) -> Result<Vec<Review>, ApiError>;
}
