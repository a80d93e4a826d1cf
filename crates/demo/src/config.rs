//! Demo configuration loaded from environment variables.

/// Output format for logs or for the final report.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Format {
    #[default]
    Text,
    Json,
}

impl Format {
    fn parse(value: &str) -> Self {
        if value.eq_ignore_ascii_case("json") {
            Format::Json
        } else {
            Format::Text
        }
    }
}

/// Demo configuration with sensible defaults.
///
/// Reads from environment variables:
/// - `RUST_LOG` — tracing filter directive (default: `"info"`)
/// - `LOG_FORMAT` — `text` or `json` log lines (default: `text`)
/// - `DEMO_USER_ID` — user placing the order (default: `"U001"`)
/// - `DEMO_OUTPUT` — `text` or `json` report (default: `text`)
/// - `SHOW_METRICS` — print Prometheus metrics after the run (default: `false`)
#[derive(Debug, Clone)]
pub struct Config {
    pub log_level: String,
    pub log_format: Format,
    pub user_id: String,
    pub output: Format,
    pub show_metrics: bool,
}

impl Config {
    /// Loads configuration from environment variables, falling back to defaults.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Loads configuration through `lookup`, falling back to defaults.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let defaults = Self::default();
        Self {
            log_level: lookup("RUST_LOG").unwrap_or(defaults.log_level),
            log_format: lookup("LOG_FORMAT")
                .map(|v| Format::parse(&v))
                .unwrap_or(defaults.log_format),
            user_id: lookup("DEMO_USER_ID").unwrap_or(defaults.user_id),
            output: lookup("DEMO_OUTPUT")
                .map(|v| Format::parse(&v))
                .unwrap_or(defaults.output),
            show_metrics: lookup("SHOW_METRICS")
                .map(|v| matches!(v.to_ascii_lowercase().as_str(), "1" | "true" | "yes"))
                .unwrap_or(defaults.show_metrics),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
            log_format: Format::Text,
            user_id: "U001".to_string(),
            output: Format::Text,
            show_metrics: false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key: &str| map.get(key).cloned()
    }

    #[test]
    fn test_default_values() {
        let config = Config::default();
        assert_eq!(config.log_level, "info");
        assert_eq!(config.log_format, Format::Text);
        assert_eq!(config.user_id, "U001");
        assert_eq!(config.output, Format::Text);
        assert!(!config.show_metrics);
    }

    #[test]
    fn test_empty_environment_gives_defaults() {
        let config = Config::from_lookup(|_| None);
        assert_eq!(config.user_id, "U001");
        assert_eq!(config.output, Format::Text);
    }

    #[test]
    fn test_overrides() {
        let config = Config::from_lookup(lookup_from(&[
            ("RUST_LOG", "debug"),
            ("LOG_FORMAT", "JSON"),
            ("DEMO_USER_ID", "U042"),
            ("DEMO_OUTPUT", "json"),
            ("SHOW_METRICS", "true"),
        ]));

        assert_eq!(config.log_level, "debug");
        assert_eq!(config.log_format, Format::Json);
        assert_eq!(config.user_id, "U042");
        assert_eq!(config.output, Format::Json);
        assert!(config.show_metrics);
    }

    #[test]
    fn test_unknown_format_falls_back_to_text() {
        let config = Config::from_lookup(lookup_from(&[("DEMO_OUTPUT", "yaml")]));
        assert_eq!(config.output, Format::Text);
    }
}
