use std::env;
use std::path::PathBuf;
use std::str::FromStr;

/// Where dashboard data is read from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DataBackend {
    Postgres,
    /// In-process fixture data, for local frontend development.
    Memory,
}

impl FromStr for DataBackend {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "postgres" | "postgresql" => Ok(Self::Postgres),
            "memory" | "mock" => Ok(Self::Memory),
            other => Err(ConfigError::Invalid {
                key: "DATA_BACKEND",
                value: other.to_string(),
            }),
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Missing environment variable {0}")]
    Missing(&'static str),

    #[error("Invalid value '{value}' for {key}")]
    Invalid { key: &'static str, value: String },
}

/// Application configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub data_backend: DataBackend,
    pub database_url: Option<String>,
    pub database_max_connections: u32,
    pub run_migrations: bool,
    pub mock_data_path: Option<PathBuf>,
    pub host: String,
    pub port: u16,
    pub frontend_url: String,
}

impl AppConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        let data_backend = match env::var("DATA_BACKEND") {
            Ok(v) => v.parse()?,
            Err(_) => DataBackend::Postgres,
        };

        let database_url = env::var("DATABASE_URL").ok();
        if data_backend == DataBackend::Postgres && database_url.is_none() {
            return Err(ConfigError::Missing("DATABASE_URL"));
        }

        Ok(Self {
            data_backend,
            database_url,
            database_max_connections: env::var("DATABASE_MAX_CONNECTIONS")
                .unwrap_or_else(|_| "10".to_string())
                .parse()
                .unwrap_or(10),
            run_migrations: env::var("RUN_MIGRATIONS")
                .map(|v| !matches!(v.trim(), "0" | "false" | "no"))
                .unwrap_or(true),
            mock_data_path: env::var("MOCK_DATA_PATH").ok().map(PathBuf::from),
            host: env::var("BACKEND_HOST").unwrap_or_else(|_| "0.0.0.0".to_string()),
            port: env::var("BACKEND_PORT")
                .unwrap_or_else(|_| "3000".to_string())
                .parse()
                .unwrap_or(3000),
            frontend_url: env::var("FRONTEND_URL")
                .unwrap_or_else(|_| "http://localhost:5173".to_string()),
        })
    }

    /// Configuration for the in-memory backend with default networking.
    pub fn memory() -> Self {
        Self {
            data_backend: DataBackend::Memory,
            database_url: None,
            database_max_connections: 10,
            run_migrations: false,
            mock_data_path: None,
            host: "127.0.0.1".to_string(),
            port: 0,
            frontend_url: "http://localhost:5173".to_string(),
        }
    }
}
