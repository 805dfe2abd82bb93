//! Runtime configuration
//!
//! Read once from the environment (after `.env` is loaded) and cached for
//! the life of the process.

use std::path::PathBuf;
use std::sync::OnceLock;

use jot_core::util::normalize_text_option;
use jot_core::Theme;

const DATA_DIR_ENV: &str = "JOT_DATA_DIR";
const LOG_FILTER_ENV: &str = "JOT_LOG";
const THEME_ENV: &str = "JOT_THEME";
const DEFAULT_LOG_FILTER: &str = "jot=info,jot_core=info";

static APP_CONFIG: OnceLock<AppConfig> = OnceLock::new();

/// Desktop shell configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    /// Directory holding the notes storage slot
    pub data_dir: PathBuf,
    /// Log filter used when `RUST_LOG` is unset
    pub log_filter: String,
    /// Theme at startup
    pub theme: Theme,
}

impl AppConfig {
    /// Build config from the process environment.
    pub fn from_env() -> Self {
        Self::from_values(
            std::env::var(DATA_DIR_ENV).ok(),
            std::env::var(LOG_FILTER_ENV).ok(),
            std::env::var(THEME_ENV).ok(),
        )
    }

    fn from_values(
        data_dir: Option<String>,
        log_filter: Option<String>,
        theme: Option<String>,
    ) -> Self {
        let data_dir = normalize_text_option(data_dir)
            .map_or_else(default_data_dir, PathBuf::from);
        let log_filter =
            normalize_text_option(log_filter).unwrap_or_else(|| DEFAULT_LOG_FILTER.to_string());
        let theme = normalize_text_option(theme)
            .and_then(|value| value.parse::<Theme>().ok())
            .unwrap_or_default();

        Self {
            data_dir,
            log_filter,
            theme,
        }
    }
}

/// Process-wide config, resolved on first use.
pub fn app_config() -> &'static AppConfig {
    APP_CONFIG.get_or_init(AppConfig::from_env)
}

fn default_data_dir() -> PathBuf {
    dirs::data_local_dir()
        .or_else(dirs::data_dir)
        .unwrap_or_else(|| PathBuf::from("."))
        .join("jot")
}
