use crate::api::DashboardApi;
use crate::config::AppConfig;

/// Shared, read-only state handed to every request.
pub struct App {
    pub config: AppConfig,
    pub api: Box<dyn DashboardApi>,
}

impl App {
    pub fn new(config: AppConfig, api: Box<dyn DashboardApi>) -> Self {
        Self { config, api }
    }
}
