use std::path::{Path, PathBuf};

use clap::Parser;

pub const DEFAULT_TARGET_LANGUAGE: &str = "en";

/// Extract, reorder and translate a document.
#[derive(Debug, Parser)]
#[command(name = "layout-translate", version, about)]
pub struct Cli {
    /// Document to translate (pdf, xml/alto, docx, html, csv, json, txt).
    pub input_file: PathBuf,

    /// Output file. Defaults to `<input stem>_<target>.txt` next to the input.
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Two-letter target language code.
    #[arg(long, visible_alias = "target_lang", default_value = DEFAULT_TARGET_LANGUAGE)]
    pub target_lang: String,

    /// Settings file (TOML). Overrides `layout-translate.toml`.
    #[arg(short, long)]
    pub config: Option<PathBuf>,
}

impl Cli {
    pub fn output_path(&self) -> PathBuf {
        self.output
            .clone()
            .unwrap_or_else(|| default_output_path(&self.input_file, &self.target_lang))
    }
}

pub fn default_output_path(input: &Path, target: &str) -> PathBuf {
    let stem = input
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_else(|| "output".to_string());
    input.with_file_name(format!("{stem}_{target}.txt"))
}
