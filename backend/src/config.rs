//! Runtime settings of the local companion server, read from the environment.

use common::model::config::{ClientConfig, DEFAULT_API_BASE_URL};
use log::warn;
use std::path::PathBuf;

pub const HOST_VAR: &str = "SIAKAD_HOST";
pub const PORT_VAR: &str = "SIAKAD_PORT";
pub const API_BASE_URL_VAR: &str = "SIAKAD_API_BASE_URL";
pub const FONTS_DIR_VAR: &str = "SIAKAD_FONTS_DIR";
pub const OPEN_BROWSER_VAR: &str = "SIAKAD_OPEN_BROWSER";

const DEFAULT_HOST: &str = "127.0.0.1";
const DEFAULT_PORT: u16 = 8080;
const DEFAULT_FONTS_DIR: &str = "./fonts";

#[derive(Debug, Clone, PartialEq)]
pub struct AppConfig {
    pub host: String,
    pub port: u16,
    /// Remote SIAKAD API the browser talks to.
    pub api_base_url: String,
    /// Directory holding the TTF family used for PDF output.
    pub fonts_dir: PathBuf,
    pub open_browser: bool,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            host: DEFAULT_HOST.to_string(),
            port: DEFAULT_PORT,
            api_base_url: DEFAULT_API_BASE_URL.to_string(),
            fonts_dir: PathBuf::from(DEFAULT_FONTS_DIR),
            open_browser: true,
        }
    }
}

impl AppConfig {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds the configuration from any key lookup; unset or blank values
    /// keep their defaults, malformed ones are logged and ignored.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let value = |key: &str| lookup(key).map(|v| v.trim().to_string()).filter(|v| !v.is_empty());
        let mut config = AppConfig::default();

        if let Some(host) = value(HOST_VAR) {
            config.host = host;
        }
        if let Some(port) = value(PORT_VAR) {
            match port.parse::<u16>() {
                Ok(port) => config.port = port,
                Err(_) => warn!("Ignoring {}={:?}, using port {}", PORT_VAR, port, config.port),
            }
        }
        if let Some(url) = value(API_BASE_URL_VAR) {
            config.api_base_url = url.trim_end_matches('/').to_string();
        }
        if let Some(dir) = value(FONTS_DIR_VAR) {
            config.fonts_dir = PathBuf::from(dir);
        }
        if let Some(flag) = value(OPEN_BROWSER_VAR) {
            match flag.to_ascii_lowercase().as_str() {
                "1" | "true" | "yes" | "on" => config.open_browser = true,
                "0" | "false" | "no" | "off" => config.open_browser = false,
                _ => warn!("Ignoring {}={:?}", OPEN_BROWSER_VAR, flag),
            }
        }
        config
    }

    pub fn url(&self) -> String {
        format!("http://{}:{}", self.host, self.port)
    }

    pub fn client_config(&self) -> ClientConfig {
        ClientConfig {
            api_base_url: self.api_base_url.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn config_from(pairs: &[(&str, &str)]) -> AppConfig {
        let vars: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        AppConfig::from_lookup(|key| vars.get(key).cloned())
    }

    #[test]
    fn defaults_apply_without_variables() {
        assert_eq!(config_from(&[]), AppConfig::default());
        assert_eq!(AppConfig::default().url(), "http://127.0.0.1:8080");
    }

    #[test]
    fn variables_override_defaults() {
        let config = config_from(&[
            (PORT_VAR, "9000"),
            (API_BASE_URL_VAR, "https://siakad.sch.id/api/"),
            (FONTS_DIR_VAR, "/usr/share/fonts/liberation"),
            (OPEN_BROWSER_VAR, "off"),
        ]);
        assert_eq!(config.port, 9000);
        assert_eq!(config.api_base_url, "https://siakad.sch.id/api");
        assert_eq!(config.fonts_dir, PathBuf::from("/usr/share/fonts/liberation"));
        assert!(!config.open_browser);
    }

    #[test]
    fn malformed_values_keep_defaults() {
        let config = config_from(&[(PORT_VAR, "delapan"), (OPEN_BROWSER_VAR, "maybe"), (HOST_VAR, "  ")]);
        assert_eq!(config.port, 8080);
        assert!(config.open_browser);
        assert_eq!(config.host, "127.0.0.1");
    }
}
