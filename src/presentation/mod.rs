pub mod cli;
pub mod config;

pub use cli::{Cli, DEFAULT_TARGET_LANGUAGE, default_output_path};
pub use self::config::Settings;
