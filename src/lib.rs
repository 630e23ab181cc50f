pub mod config;
pub mod db;
pub mod errors;
pub mod models;
pub mod repository;
pub mod routes;
pub mod services;

use std::sync::Arc;

use repository::DashboardRepository;
use services::clock::Clock;

/// Shared application state passed to all Axum handlers.
#[derive(Clone)]
pub struct AppState {
    pub repo: Arc<dyn DashboardRepository>,
    pub clock: Clock,
    pub config: config::AppConfig,
}

impl AppState {
    pub fn new(repo: Arc<dyn DashboardRepository>, config: config::AppConfig) -> Self {
        Self {
            repo,
            clock: Clock::System,
            config,
        }
    }

    pub fn with_clock(mut self, clock: Clock) -> Self {
        self.clock = clock;
        self
    }
}
