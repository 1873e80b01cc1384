//! Configuration loading from environment variables.

use crate::constants::{
    DEFAULT_FADE_MS, DEFAULT_FETCH_TIMEOUT_MS, DEFAULT_MODAL_ID, DEFAULT_OVERLAY_ID,
    DEFAULT_PAGE_PATH, DEFAULT_PORT, DEFAULT_SIDEBAR_ID, DEFAULT_SIDEBAR_WIDTH, DEFAULT_SLIDE_MS,
    DEFAULT_TOAST_MS, DEFAULT_WWW_DIR,
};
use crate::panel::{PanelLayout, PanelTimings};
use serde::Deserialize;
use std::env;
use std::path::PathBuf;
use std::str::FromStr;
use std::time::Duration;
use tracing::warn;

/// Runtime configuration shared by the GUI and the page server.
///
/// Deserializes with every field optional; missing fields take the defaults.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct Config {
    pub port: u16,
    pub www_dir: String,
    pub page_path: String,
    pub fetch_timeout_ms: u64,
    pub timings: PanelTimings,
    pub layout: PanelLayout,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            port: DEFAULT_PORT,
            www_dir: DEFAULT_WWW_DIR.to_string(),
            page_path: DEFAULT_PAGE_PATH.to_string(),
            fetch_timeout_ms: DEFAULT_FETCH_TIMEOUT_MS,
            timings: PanelTimings::default(),
            layout: PanelLayout::default(),
        }
    }
}

/// Expand a leading `~/` to the user's home directory.
fn expand_tilde(path: String) -> String {
    if let Some(rest) = path.strip_prefix("~/") {
        let home = env::var("HOME")
            .or_else(|_| env::var("USERPROFILE"))
            .ok()
            .filter(|home| !home.trim().is_empty());
        if let Some(home) = home {
            return PathBuf::from(home).join(rest).to_string_lossy().to_string();
        }
    }
    path
}

/// Parse a boolean-like environment flag value.
///
/// # Supported Values
/// - Truthy: `1`, `true`, `yes`, `on`
/// - Falsy: `0`, `false`, `no`, `off`, empty string
///
/// Matching is case-insensitive and ignores surrounding whitespace.
///
/// # Returns
/// `Some(bool)` when the value is recognized, otherwise `None`.
pub fn parse_env_flag(value: &str) -> Option<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "" | "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}

/// Read a boolean flag from the environment.
///
/// Missing or unrecognized values are treated as `false`.
pub fn env_flag_enabled(name: &str) -> bool {
    env::var(name)
        .ok()
        .and_then(|value| parse_env_flag(&value))
        .unwrap_or(false)
}

fn env_parsed<T>(name: &str, default: T) -> T
where
    T: FromStr + Copy,
{
    match env::var(name) {
        Ok(raw) => match raw.trim().parse() {
            Ok(value) => value,
            Err(_) => {
                warn!("Ignoring invalid {}='{}'; using default", name, raw);
                default
            }
        },
        Err(_) => default,
    }
}

fn env_string(name: &str, default: &str) -> String {
    env::var(name)
        .ok()
        .filter(|value| !value.trim().is_empty())
        .unwrap_or_else(|| default.to_string())
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// # Returns
    /// A populated [`Config`] with defaults applied when env vars are missing
    /// or unparseable.
    pub fn from_env() -> Self {
        let timings = PanelTimings {
            fade: Duration::from_millis(env_parsed("FADE_MS", DEFAULT_FADE_MS)),
            slide: Duration::from_millis(env_parsed("SLIDE_MS", DEFAULT_SLIDE_MS)),
            toast_delay: Duration::from_millis(env_parsed("TOAST_MS", DEFAULT_TOAST_MS)),
            sidebar_width: env_parsed("SIDEBAR_WIDTH", DEFAULT_SIDEBAR_WIDTH),
        };
        // Blank ids are kept as-is so controller binding can reject them.
        let layout = PanelLayout {
            sidebar_id: env::var("PANEL_SIDEBAR_ID")
                .unwrap_or_else(|_| DEFAULT_SIDEBAR_ID.to_string()),
            overlay_id: env::var("PANEL_OVERLAY_ID")
                .unwrap_or_else(|_| DEFAULT_OVERLAY_ID.to_string()),
            modal_id: env::var("PANEL_MODAL_ID").unwrap_or_else(|_| DEFAULT_MODAL_ID.to_string()),
        };
        Self {
            port: env_parsed("PORT", DEFAULT_PORT),
            www_dir: expand_tilde(env_string("WWW_DIR", DEFAULT_WWW_DIR)),
            page_path: env_string("PAGE_PATH", DEFAULT_PAGE_PATH)
                .trim_start_matches('/')
                .to_string(),
            fetch_timeout_ms: env_parsed("FETCH_TIMEOUT_MS", DEFAULT_FETCH_TIMEOUT_MS),
            timings,
            layout,
        }
    }

    /// Timeout applied to the remote page GET.
    pub fn fetch_timeout(&self) -> Duration {
        Duration::from_millis(self.fetch_timeout_ms)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{env_lock, EnvOverrides};

    #[test]
    fn parse_env_flag_accepts_truthy_values() {
        for value in ["1", "true", "TRUE", " yes ", "on"] {
            assert_eq!(parse_env_flag(value), Some(true), "value: {}", value);
        }
    }

    #[test]
    fn parse_env_flag_accepts_falsy_values() {
        for value in ["", "0", "false", "FALSE", " no ", "off"] {
            assert_eq!(parse_env_flag(value), Some(false), "value: {}", value);
        }
    }

    #[test]
    fn parse_env_flag_rejects_unknown_values() {
        assert_eq!(parse_env_flag("maybe"), None);
        assert_eq!(parse_env_flag("enabled"), None);
    }

    #[test]
    fn from_env_applies_defaults_when_unset() {
        let _lock = env_lock().lock().expect("env lock");
        let _env = EnvOverrides::cleared(&[
            "PORT",
            "WWW_DIR",
            "PAGE_PATH",
            "FADE_MS",
            "SLIDE_MS",
            "TOAST_MS",
            "SIDEBAR_WIDTH",
            "FETCH_TIMEOUT_MS",
            "PANEL_SIDEBAR_ID",
            "PANEL_OVERLAY_ID",
            "PANEL_MODAL_ID",
        ]);

        let config = Config::from_env();
        assert_eq!(config.port, DEFAULT_PORT);
        assert_eq!(config.www_dir, DEFAULT_WWW_DIR);
        assert_eq!(config.page_path, "page.html");
        assert_eq!(config.timings, PanelTimings::default());
        assert_eq!(config.layout, PanelLayout::default());
        assert_eq!(config.fetch_timeout(), Duration::from_secs(10));
    }

    #[test]
    fn from_env_reads_overrides_and_ignores_garbage() {
        let _lock = env_lock().lock().expect("env lock");
        let _env = EnvOverrides::set(&[
            ("PORT", "4100"),
            ("PAGE_PATH", "/fragments/about.html"),
            ("FADE_MS", "50"),
            ("SLIDE_MS", "not-a-number"),
            ("SIDEBAR_WIDTH", "320"),
            ("PANEL_MODAL_ID", "dialog"),
        ]);

        let config = Config::from_env();
        assert_eq!(config.port, 4100);
        assert_eq!(config.page_path, "fragments/about.html");
        assert_eq!(config.timings.fade, Duration::from_millis(50));
        assert_eq!(
            config.timings.slide,
            Duration::from_millis(DEFAULT_SLIDE_MS)
        );
        assert_eq!(config.timings.sidebar_width, 320.0);
        assert_eq!(config.layout.modal_id, "dialog");
    }

    #[test]
    fn expand_tilde_uses_home() {
        let _lock = env_lock().lock().expect("env lock");
        let _env = EnvOverrides::set(&[("HOME", "/home/panel")]);
        assert_eq!(expand_tilde("~/www".to_string()), "/home/panel/www");
        assert_eq!(expand_tilde("/srv/www".to_string()), "/srv/www");
    }

    #[test]
    fn config_deserializes_with_duration_fields() {
        let raw = r#"{
            "port": 4100,
            "www_dir": "/srv/www",
            "page_path": "about.html",
            "fetch_timeout_ms": 2500,
            "timings": {
                "fade": { "secs": 0, "nanos": 150000000 },
                "slide": { "secs": 0, "nanos": 400000000 },
                "toast_delay": { "secs": 3, "nanos": 0 },
                "sidebar_width": 320.0
            },
            "layout": { "sidebar_id": "nav", "overlay_id": "dim", "modal_id": "dialog" }
        }"#;
        let config: Config = serde_json::from_str(raw).expect("config json");

        assert_eq!(config.port, 4100);
        assert_eq!(config.page_path, "about.html");
        assert_eq!(config.fetch_timeout(), Duration::from_millis(2500));
        assert_eq!(config.timings.fade, Duration::from_millis(150));
        assert_eq!(config.timings.slide, Duration::from_millis(400));
        assert_eq!(config.timings.toast_delay, Duration::from_secs(3));
        assert_eq!(config.layout.overlay_id, "dim");
        assert!(config.layout.validate().is_ok());
    }

    #[test]
    fn partial_config_json_falls_back_to_defaults() {
        let config: Config =
            serde_json::from_str(r#"{ "port": 4100, "timings": { "sidebar_width": 180.0 } }"#)
                .expect("config json");

        assert_eq!(config.port, 4100);
        assert_eq!(config.www_dir, DEFAULT_WWW_DIR);
        assert_eq!(config.timings.sidebar_width, 180.0);
        assert_eq!(config.timings.fade, Duration::from_millis(DEFAULT_FADE_MS));
        assert_eq!(config.layout, PanelLayout::default());
    }

    #[test]
    fn malformed_duration_is_rejected() {
        let err = serde_json::from_str::<Config>(r#"{ "timings": { "fade": 200 } }"#)
            .expect_err("durations are secs/nanos objects");
        assert!(err.is_data(), "{}", err);
    }
}
