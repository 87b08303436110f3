// src/api/client.rs

use crate::api::models::{Booking, Earnings, Listing, LoginResponse, Review, Transaction, User};
use crate::api::{ApiError, DashboardApi};
use crate::config::AppConfig;
use crate::domain::details::{BookingKind, ListingKind};
use reqwest::blocking::{Client, RequestBuilder};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use url::Url;

/// Blocking client for the platform REST API.
pub struct RestClient {
    base: Url,
    client: Client,
}

#[derive(Serialize)]
struct LoginPayload<'a> {
    email: &'a str,
    password: &'a str,
}

/// Some endpoints wrap their payload in `{ "data": ... }`.
#[derive(Deserialize)]
#[serde(untagged)]
enum Envelope<T> {
    Wrapped { data: T },
    Bare(T),
}

impl<T> Envelope<T> {
    fn into_inner(self) -> T {
        match self {
            Envelope::Wrapped { data } => data,
            Envelope::Bare(v) => v,
        }
    }
}

impl RestClient {
    pub fn new(cfg: &AppConfig) -> Result<Self, ApiError> {
        let base = Url::parse(&cfg.api_base_url)
            .map_err(|e| ApiError::Network(format!("bad API base URL: {e}")))?;
        let client = Client::builder()
            .timeout(cfg.api_timeout)
            .build()
            .map_err(|e| ApiError::Network(e.to_string()))?;

        Ok(Self { base, client })
    }

    /// Append percent-encoded path segments to the base URL.
    fn endpoint(&self, segments: &[&str]) -> Result<Url, ApiError> {
        build_url(&self.base, segments)
    }

    fn get<T: DeserializeOwned>(&self, token: &str, segments: &[&str]) -> Result<T, ApiError> {
        let url = self.endpoint(segments)?;
        log::debug!("GET {url}");
        self.send(self.client.get(url).bearer_auth(token))
    }

    fn send<T: DeserializeOwned>(&self, req: RequestBuilder) -> Result<T, ApiError> {
        let resp = req
            .header("Accept", "application/json")
            .send()
            .map_err(|e| ApiError::Network(e.to_string()))?;

        let status = resp.status();
        if status.as_u16() == 401 {
            return Err(ApiError::Unauthorized);
        }
        if status.as_u16() == 404 {
            return Err(ApiError::NotFound);
        }
        if !status.is_success() {
            let body = resp.text().unwrap_or_else(|_| "Unknown error".to_string());
            return Err(ApiError::Status(status.as_u16(), body));
        }

        let text = resp.text().map_err(|e| ApiError::Network(e.to_string()))?;
        decode(&text)
    }
}

impl DashboardApi for RestClient {
    fn login(&self, email: &str, password: &str) -> Result<String, ApiError> {
        let url = self.endpoint(&["auth", "login"])?;
        let resp: LoginResponse = self.send(
            self.client
                .post(url)
                .json(&LoginPayload { email, password }),
        )?;
        Ok(resp.token)
    }

    fn current_user(&self, token: &str) -> Result<User, ApiError> {
        self.get(token, &["auth", "me"])
    }

    fn bookings(&self, token: &str) -> Result<Vec<Booking>, ApiError> {
        self.get(token, &["bookings"])
    }

    fn booking(
        &self,
        token: &str,
        id: &str,
        kind: Option<BookingKind>,
    ) -> Result<Booking, ApiError> {
        match kind {
            Some(k) => self.get(token, &["bookings", k.as_str(), id]),
            None => self.get(token, &["bookings", id]),
        }
    }

    fn transactions(&self, token: &str) -> Result<Vec<Transaction>, ApiError> {
        self.get(token, &["transactions"])
    }

    fn transaction(&self, token: &str, id: &str) -> Result<Transaction, ApiError> {
        self.get(token, &["transactions", id])
    }

    fn listing(&self, token: &str, id: &str, kind: ListingKind) -> Result<Listing, ApiError> {
        let collection = match kind {
            ListingKind::Property => "properties",
            ListingKind::Tour => "tours",
        };
        self.get(token, &[collection, id])
    }

    fn user(&self, token: &str, id: &str) -> Result<User, ApiError> {
        self.get(token, &["users", id])
    }

    fn earnings(&self, token: &str) -> Result<Earnings, ApiError> {
        self.get(token, &["earnings"])
    }

    fn reviews(&self, token: &str) -> Result<Vec<Review>, ApiError> {
        self.get(token, &["reviews"])
    }
}

fn build_url(base: &Url, segments: &[&str]) -> Result<Url, ApiError> {
    let mut url = base.clone();
    url.path_segments_mut()
        .map_err(|_| ApiError::Network(format!("API base URL cannot take a path: {base}")))?
        .pop_if_empty()
        .extend(segments);
    Ok(url)
}

fn decode<T: DeserializeOwned>(text: &str) -> Result<T, ApiError> {
    serde_json::from_str::<Envelope<T>>(text)
        .map(Envelope::into_inner)
        .map_err(|e| ApiError::Decode(e.to_string()))
}
