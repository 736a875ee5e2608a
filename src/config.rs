use serde::{Deserialize, Serialize};

/// Application configuration, resolved once at compile time from the
/// environment (see build.rs for the .env forwarding).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    pub api_base_url_development: String,
    pub api_base_url_production: String,
    pub environment: String,
    pub debounce_delay_ms: u32,
    pub alert_dismiss_ms: u32,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            api_base_url_development: "http://localhost:3000".to_string(),
            api_base_url_production: "https://api.petadoption.example.com".to_string(),
            environment: "development".to_string(),
            debounce_delay_ms: 300,
            alert_dismiss_ms: 4000,
        }
    }
}

impl AppConfig {
    /// Build the configuration from compile-time environment variables.
    pub fn from_env() -> Self {
        Self {
            api_base_url_development: option_env!("API_BASE_URL_DEVELOPMENT")
                .unwrap_or("http://localhost:3000").to_string(),
            api_base_url_production: option_env!("API_BASE_URL_PRODUCTION")
                .unwrap_or("https://api.petadoption.example.com").to_string(),
            environment: option_env!("ENVIRONMENT")
                .unwrap_or("development").to_string(),
            debounce_delay_ms: option_env!("DEBOUNCE_DELAY_MS")
                .unwrap_or("300").parse().unwrap_or(300),
            alert_dismiss_ms: option_env!("ALERT_DISMISS_MS")
                .unwrap_or("4000").parse().unwrap_or(4000),
        }
    }

    /// API base URL for the current environment.
    pub fn api_base_url(&self) -> &str {
        match self.environment.as_str() {
            "production" => &self.api_base_url_production,
            _ => &self.api_base_url_development,
        }
    }
}

lazy_static::lazy_static! {
    pub static ref CONFIG: AppConfig = AppConfig::from_env();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn development_is_the_default_environment() {
        let config = AppConfig::default();
        assert_eq!(config.environment, "development");
        assert_eq!(config.api_base_url(), config.api_base_url_development);
    }

    #[test]
    fn production_switches_the_base_url() {
        let config = AppConfig {
            environment: "production".to_string(),
            ..AppConfig::default()
        };
        assert_eq!(config.api_base_url(), config.api_base_url_production);
    }
}
