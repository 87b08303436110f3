// src/domain/roles.rs
use serde::Deserialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UserType {
    Host,
    Guest,
    Agent,
    #[serde(rename = "tourguide", alias = "tour_guide", alias = "tour-guide")]
    TourGuide,
}

impl UserType {
    pub fn dashboard_path(&self) -> &'static str {
        match self {
            UserType::Host => "/host",
            UserType::Guest => "/guest",
            UserType::Agent => "/agent",
            UserType::TourGuide => "/tourguide",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            UserType::Host => "Host",
            UserType::Guest => "Guest",
            UserType::Agent => "Agent",
            UserType::TourGuide => "Tour Guide",
        }
    }

    pub fn can_view_earnings(&self) -> bool {
        !matches!(self, UserType::Guest)
    }

    /// Topbar links: (href, label).
    pub fn nav_items(&self) -> Vec<(&'static str, &'static str)> {
        let mut items = vec![(self.dashboard_path(), "Dashboard")];
        match self {
            UserType::Guest => {
                items.push(("/payments", "Payments"));
                items.push(("/reviews", "My Reviews"));
            }
            UserType::Host | UserType::Agent | UserType::TourGuide => {
                items.push(("/earnings", "Earnings"));
                items.push(("/payments", "Payments"));
                items.push(("/reviews", "Reviews"));
            }
        }
        items
    }
}
