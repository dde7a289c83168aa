//! Portal configuration.
//!
//! A default is embedded in the bundle. At startup [`load_config`] tries
//! `GET /portal.toml` next to `index.html` and falls back to the embedded
//! default when the file is missing or does not parse.

use gloo_net::http::Request;
use once_cell::sync::OnceCell;
use serde::Deserialize;

#[derive(Debug, Deserialize, Clone, Default, PartialEq)]
#[serde(default)]
pub struct PortalConfig {
    pub api: ApiConfig,
    pub calendar: CalendarConfig,
    pub lists: ListsConfig,
    pub logging: LoggingConfig,
}

#[derive(Debug, Deserialize, Clone, Default, PartialEq)]
#[serde(default)]
pub struct ApiConfig {
    /// Empty: same host as the page, port 3000.
    pub base_url: String,
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
#[serde(default)]
pub struct CalendarConfig {
    /// Issue-list requests in flight during one overdue pass.
    pub overdue_concurrency: usize,
}

impl Default for CalendarConfig {
    fn default() -> Self {
        Self {
            overdue_concurrency: 4,
        }
    }
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
#[serde(default)]
pub struct ListsConfig {
    pub page_size: usize,
}

impl Default for ListsConfig {
    fn default() -> Self {
        Self { page_size: 50 }
    }
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
#[serde(default)]
pub struct LoggingConfig {
    pub level: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "debug".to_string(),
        }
    }
}

impl LoggingConfig {
    /// Unknown names fall back to `Debug`.
    pub fn log_level(&self) -> log::Level {
        match self.level.trim().to_ascii_lowercase().as_str() {
            "error" => log::Level::Error,
            "warn" | "warning" => log::Level::Warn,
            "info" => log::Level::Info,
            "trace" => log::Level::Trace,
            _ => log::Level::Debug,
        }
    }
}

/// Default configuration embedded in the bundle
const DEFAULT_CONFIG: &str = r#"
[api]
base_url = ""

[calendar]
overdue_concurrency = 4

[lists]
page_size = 50

[logging]
level = "debug"
"#;

const CONFIG_URL: &str = "/portal.toml";

static CONFIG: OnceCell<PortalConfig> = OnceCell::new();

pub fn parse_config(contents: &str) -> Result<PortalConfig, String> {
    let mut config: PortalConfig =
        toml::from_str(contents).map_err(|e| format!("Invalid portal.toml: {}", e))?;
    config.calendar.overdue_concurrency = config.calendar.overdue_concurrency.max(1);
    if config.lists.page_size == 0 {
        config.lists.page_size = ListsConfig::default().page_size;
    }
    config.api.base_url = config.api.base_url.trim().trim_end_matches('/').to_string();
    Ok(config)
}

pub fn embedded_config() -> PortalConfig {
    parse_config(DEFAULT_CONFIG).unwrap_or_default()
}

/// Fetch `/portal.toml` and install it as the process-wide config.
///
/// Returns where the config came from, for the startup log line (logging is
/// not initialised yet when this runs).
pub async fn load_config() -> String {
    let (config, source) = match fetch_config().await {
        Ok(config) => (config, CONFIG_URL.to_string()),
        Err(e) => (embedded_config(), format!("embedded default ({})", e)),
    };
    let _ = CONFIG.set(config);
    source
}

async fn fetch_config() -> Result<PortalConfig, String> {
    let response = Request::get(CONFIG_URL)
        .send()
        .await
        .map_err(|e| format!("Request failed: {}", e))?;
    if !response.ok() {
        return Err(format!("HTTP {}", response.status()));
    }
    let text = response
        .text()
        .await
        .map_err(|e| format!("Failed to read portal.toml: {}", e))?;
    parse_config(&text)
}

/// The loaded configuration, or the embedded default before loading.
pub fn config() -> &'static PortalConfig {
    CONFIG.get_or_init(embedded_config)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_loads() {
        let config = parse_config(DEFAULT_CONFIG).unwrap();
        assert_eq!(config, PortalConfig::default());
        assert_eq!(config.calendar.overdue_concurrency, 4);
        assert_eq!(config.lists.page_size, 50);
        assert_eq!(config.logging.log_level(), log::Level::Debug);
    }

    #[test]
    fn test_partial_file_keeps_defaults() {
        let config = parse_config(
            r#"
            [api]
            base_url = "https://erp.example.com/ "
            [logging]
            level = "WARN"
            "#,
        )
        .unwrap();
        assert_eq!(config.api.base_url, "https://erp.example.com");
        assert_eq!(config.calendar.overdue_concurrency, 4);
        assert_eq!(config.logging.log_level(), log::Level::Warn);
    }

    #[test]
    fn test_zero_values_are_clamped() {
        let config = parse_config("[calendar]\noverdue_concurrency = 0\n[lists]\npage_size = 0").unwrap();
        assert_eq!(config.calendar.overdue_concurrency, 1);
        assert_eq!(config.lists.page_size, 50);
    }

    #[test]
    fn test_garbage_is_rejected() {
        assert!(parse_config("[calendar\n").is_err());
        assert!(parse_config("[calendar]\noverdue_concurrency = \"many\"").is_err());
    }
}
