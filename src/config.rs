//! Page Configuration
//!
//! Settings read from `<meta name="helpdesk-...">` tags in the host page.

use log::LevelFilter;

pub const DEFAULT_API_URL: &str = "http://127.0.0.1:5000/api";

const META_API_URL: &str = "helpdesk-api-url";
const META_TICKET_TABLE: &str = "helpdesk-ticket-table";
const META_LOG_LEVEL: &str = "helpdesk-log-level";

#[derive(Debug, Clone, PartialEq)]
pub struct AppConfig {
    /// Base URL of the ticket service, without trailing slash
    pub api_url: String,
    /// Whether the page carries the ticket table body
    pub ticket_table: bool,
    pub log_level: LevelFilter,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            api_url: DEFAULT_API_URL.to_string(),
            ticket_table: true,
            log_level: LevelFilter::Info,
        }
    }
}

impl AppConfig {
    /// Build from any name -> content lookup, falling back to defaults
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let mut config = Self::default();

        if let Some(url) = lookup(META_API_URL) {
            let url = url.trim().trim_end_matches('/');
            if !url.is_empty() {
                config.api_url = url.to_string();
            }
        }

        if let Some(raw) = lookup(META_TICKET_TABLE) {
            match raw.trim().to_ascii_lowercase().as_str() {
                "true" | "1" | "yes" => config.ticket_table = true,
                "false" | "0" | "no" => config.ticket_table = false,
                other => log::warn!("ignoring {}={:?}", META_TICKET_TABLE, other),
            }
        }

        if let Some(raw) = lookup(META_LOG_LEVEL) {
            match raw.trim().parse::<LevelFilter>() {
                Ok(level) => config.log_level = level,
                Err(_) => log::warn!("ignoring {}={:?}", META_LOG_LEVEL, raw),
            }
        }

        config
    }

    /// Read `<meta>` tags from the current document
    pub fn from_document() -> Self {
        let document = web_sys::window().and_then(|w| w.document());
        Self::from_lookup(|name| {
            let doc = document.as_ref()?;
            let selector = format!("meta[name=\"{}\"]", name);
            doc.query_selector(&selector)
                .ok()
                .flatten()
                .and_then(|el| el.get_attribute("content"))
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |name| map.get(name).cloned()
    }

    #[test]
    fn test_defaults() {
        let config = AppConfig::from_lookup(|_| None);
        assert_eq!(config, AppConfig::default());
        assert_eq!(config.api_url, "http://127.0.0.1:5000/api");
        assert!(config.ticket_table);
    }

    #[test]
    fn test_overrides() {
        let config = AppConfig::from_lookup(lookup(&[
            ("helpdesk-api-url", "https://desk.example.com/api/"),
            ("helpdesk-ticket-table", "false"),
            ("helpdesk-log-level", "debug"),
        ]));
        assert_eq!(config.api_url, "https://desk.example.com/api");
        assert!(!config.ticket_table);
        assert_eq!(config.log_level, LevelFilter::Debug);
    }

    #[test]
    fn test_bad_values_fall_back() {
        let config = AppConfig::from_lookup(lookup(&[
            ("helpdesk-api-url", "   "),
            ("helpdesk-ticket-table", "maybe"),
            ("helpdesk-log-level", "loud"),
        ]));
        assert_eq!(config, AppConfig::default());
    }
}
