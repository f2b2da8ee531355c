use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    /// Base of the authentication API (`/users/login`, `/users/me`)
    pub auth_base_url: String,
    /// Base of the room API (`/room/`)
    pub api_base_url: String,
    pub environment: String,
    pub enable_logging: bool,
    pub toast_timeout_ms: u32,
    pub home_path: String,
    pub login_path: String,
}

const DEFAULT_BASE_URL: &str = "https://connectmeeting.herokuapp.com";

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            auth_base_url: DEFAULT_BASE_URL.to_string(),
            api_base_url: DEFAULT_BASE_URL.to_string(),
            environment: "development".to_string(),
            enable_logging: true,
            toast_timeout_ms: 3000,
            home_path: "/".to_string(),
            login_path: "/login".to_string(),
        }
    }
}

impl AppConfig {
    /// Load configuration from compile-time environment variables
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            auth_base_url: option_env!("AUTH_BASE_URL")
                .map(trim_base_url)
                .unwrap_or(defaults.auth_base_url),
            api_base_url: option_env!("API_BASE_URL")
                .map(trim_base_url)
                .unwrap_or(defaults.api_base_url),
            environment: option_env!("ENVIRONMENT")
                .unwrap_or("development").to_string(),
            enable_logging: option_env!("ENABLE_LOGGING")
                .unwrap_or("true").parse().unwrap_or(true),
            toast_timeout_ms: option_env!("TOAST_TIMEOUT_MS")
                .unwrap_or("3000").parse().unwrap_or(defaults.toast_timeout_ms),
            home_path: option_env!("HOME_PATH")
                .unwrap_or("/").to_string(),
            login_path: option_env!("LOGIN_PATH")
                .unwrap_or("/login").to_string(),
        }
    }

    pub fn is_production(&self) -> bool {
        self.environment == "production"
    }

    pub fn is_logging_enabled(&self) -> bool {
        self.enable_logging
    }
}

/// Base URLs are joined with paths that start with `/`
fn trim_base_url(url: &str) -> String {
    url.trim_end_matches('/').to_string()
}

lazy_static::lazy_static! {
    pub static ref CONFIG: AppConfig = AppConfig::from_env();
}
