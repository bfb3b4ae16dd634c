/// Configuration for tracing initialization.
#[derive(Debug, Clone)]
pub struct TracingConfig {
    /// Default filter directive when `RUST_LOG` is unset.
    pub level: String,
    pub json_format: bool,
}

pub const DEFAULT_LOG_FILTER: &str = "info,layout_translate=debug";
pub const LOG_FORMAT_ENV: &str = "LOG_FORMAT";

impl TracingConfig {
    pub fn new(level: impl Into<String>, json_format: bool) -> Self {
        Self {
            level: level.into(),
            json_format,
        }
    }

    /// Applies `LOG_FORMAT` from the environment on top of this config.
    pub fn with_env_overrides(self) -> Self {
        let format = std::env::var(LOG_FORMAT_ENV).ok();
        self.with_log_format(format.as_deref())
    }

    /// `json` selects JSON output, `text` or `pretty` plain text; anything
    /// else keeps the current choice.
    pub fn with_log_format(mut self, format: Option<&str>) -> Self {
        match format.map(|f| f.trim().to_ascii_lowercase()).as_deref() {
            Some("json") => self.json_format = true,
            Some("text" | "pretty") => self.json_format = false,
            _ => {}
        }
        self
    }
}

impl Default for TracingConfig {
    fn default() -> Self {
        Self::new(DEFAULT_LOG_FILTER, false).with_env_overrides()
    }
}
