mod settings;

pub use settings::{
    DEFAULT_CONFIG_FILE, ENV_PREFIX, ExtractionSettings, LanguageProvider, LanguageSettings,
    LoggingSettings, ReadingOrderProvider, ReadingOrderSettings, Settings, TranslationProvider,
    TranslationSettings,
};
