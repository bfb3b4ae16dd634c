use std::path::Path;

use config::{Config, Environment, File};
use serde::Deserialize;

use crate::application::services::{
    DEFAULT_CONFIDENCE_THRESHOLD, DEFAULT_FALLBACK_CODE, DEFAULT_MAX_ATTEMPTS,
    DEFAULT_MAX_SAMPLE_CHARS, DEFAULT_MAX_SEGMENT_CHARS, DEFAULT_MIN_TEXT_CHARS,
    DEFAULT_WINDOW_CAPACITY,
};
use crate::domain::MergePolicy;
use crate::infrastructure::observability::DEFAULT_LOG_FILTER;
use crate::infrastructure::text_processing::DEFAULT_TEXT_KEY_PATTERN;
use crate::infrastructure::translation::LINDAT_BASE_URL;

pub const DEFAULT_CONFIG_FILE: &str = "layout-translate";
pub const ENV_PREFIX: &str = "LAYOUT_TRANSLATE";

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub reading_order: ReadingOrderSettings,
    pub language: LanguageSettings,
    pub translation: TranslationSettings,
    pub extraction: ExtractionSettings,
    pub logging: LoggingSettings,
    /// Upper bound for processing one document, in seconds.
    pub timeout_secs: Option<u64>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ReadingOrderProvider {
    #[default]
    Heuristic,
    Http,
    Identity,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ReadingOrderSettings {
    pub provider: ReadingOrderProvider,
    pub endpoint: Option<String>,
    pub window_capacity: usize,
    pub merge_policy: MergePolicy,
    pub max_concurrent_requests: usize,
    pub timeout_secs: u64,
}

impl Default for ReadingOrderSettings {
    fn default() -> Self {
        Self {
            provider: ReadingOrderProvider::default(),
            endpoint: None,
            window_capacity: DEFAULT_WINDOW_CAPACITY,
            merge_policy: MergePolicy::default(),
            max_concurrent_requests: 1,
            timeout_secs: 60,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LanguageProvider {
    #[default]
    Lingua,
    Fixed,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct LanguageSettings {
    pub provider: LanguageProvider,
    /// ISO 639-3 answer of the fixed provider.
    pub fixed_code: Option<String>,
    pub confidence_threshold: f64,
    pub fallback_code: String,
    pub min_text_chars: usize,
    pub max_sample_chars: usize,
}

impl Default for LanguageSettings {
    fn default() -> Self {
        Self {
            provider: LanguageProvider::default(),
            fixed_code: None,
            confidence_threshold: DEFAULT_CONFIDENCE_THRESHOLD,
            fallback_code: DEFAULT_FALLBACK_CODE.to_string(),
            min_text_chars: DEFAULT_MIN_TEXT_CHARS,
            max_sample_chars: DEFAULT_MAX_SAMPLE_CHARS,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TranslationProvider {
    #[default]
    Lindat,
    Identity,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct TranslationSettings {
    pub provider: TranslationProvider,
    pub base_url: String,
    pub max_segment_chars: usize,
    pub max_attempts: u32,
    pub initial_backoff_ms: u64,
    pub max_backoff_ms: u64,
    pub max_concurrent_requests: usize,
    pub timeout_secs: u64,
}

impl Default for TranslationSettings {
    fn default() -> Self {
        Self {
            provider: TranslationProvider::default(),
            base_url: LINDAT_BASE_URL.to_string(),
            max_segment_chars: DEFAULT_MAX_SEGMENT_CHARS,
            max_attempts: DEFAULT_MAX_ATTEMPTS,
            initial_backoff_ms: 500,
            max_backoff_ms: 8_000,
            max_concurrent_requests: 1,
            timeout_secs: 120,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ExtractionSettings {
    pub text_key_pattern: String,
    pub max_file_size_mb: usize,
    pub timeout_secs: u64,
}

impl Default for ExtractionSettings {
    fn default() -> Self {
        Self {
            text_key_pattern: DEFAULT_TEXT_KEY_PATTERN.to_string(),
            max_file_size_mb: 200,
            timeout_secs: 30,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct LoggingSettings {
    pub level: String,
    pub json: bool,
}

impl Default for LoggingSettings {
    fn default() -> Self {
        Self {
            level: DEFAULT_LOG_FILTER.to_string(),
            json: false,
        }
    }
}

impl Settings {
    /// Layers built-in defaults, an optional TOML file and
    /// `LAYOUT_TRANSLATE_<SECTION>__<KEY>` environment variables.
    ///
    /// An explicit `path` must exist; the default file is optional.
    pub fn load(path: Option<&Path>) -> Result<Self, config::ConfigError> {
        let file = match path {
            Some(path) => File::from(path).required(true),
            None => File::with_name(DEFAULT_CONFIG_FILE).required(false),
        };

        Config::builder()
            .add_source(file)
            .add_source(
                Environment::with_prefix(ENV_PREFIX)
                    .prefix_separator("_")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?
            .try_deserialize()
    }
}
