use std::path::PathBuf;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Environment {
    Development,
    Test,
    Production,
}

impl std::fmt::Display for Environment {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Environment::Development => write!(f, "development"),
            Environment::Test => write!(f, "test"),
            Environment::Production => write!(f, "production"),
        }
    }
}

impl Environment {
    /// Log filter used when `ADINTEL_LOG_LEVEL` is unset.
    #[must_use]
    pub fn default_log_level(&self) -> &'static str {
        match self {
            Environment::Development => "info",
            Environment::Test | Environment::Production => "warn",
        }
    }
}

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub env: Environment,
    pub log_level: String,
    /// Dataset YAML to load instead of the built-in demo data.
    pub dataset_path: Option<PathBuf>,
    /// Brands revealed per "load more" step on the discovery view.
    pub page_size: usize,
    pub alert_page_size: usize,
    pub history_page_size: usize,
    pub history_window_days: u32,
}
