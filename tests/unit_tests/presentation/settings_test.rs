use std::io::Write;

use layout_translate::domain::MergePolicy;
use layout_translate::presentation::config::{
    LanguageProvider, ReadingOrderProvider, Settings, TranslationProvider,
};
use layout_translate::presentation::{Cli, default_output_path};

use clap::Parser;

fn write_toml(contents: &str) -> tempfile::NamedTempFile {
    let mut file = tempfile::Builder::new().suffix(".toml").tempfile().unwrap();
    file.write_all(contents.as_bytes()).unwrap();
    file
}

#[test]
fn given_no_overrides_when_using_defaults_then_named_values_match() {
    let settings = Settings::default();

    assert_eq!(settings.reading_order.provider, ReadingOrderProvider::Heuristic);
    assert_eq!(settings.reading_order.window_capacity, 350);
    assert_eq!(settings.reading_order.merge_policy, MergePolicy::ConcatenateWindows);
    assert_eq!(settings.language.provider, LanguageProvider::Lingua);
    assert_eq!(settings.language.confidence_threshold, 0.4);
    assert_eq!(settings.language.fallback_code, "cs");
    assert_eq!(settings.translation.provider, TranslationProvider::Lindat);
    assert_eq!(settings.translation.max_segment_chars, 5000);
    assert_eq!(settings.translation.max_attempts, 3);
    assert_eq!(settings.extraction.text_key_pattern, "text");
}

#[test]
fn given_partial_toml_file_when_loading_then_overrides_merge_with_defaults() {
    let file = write_toml(
        r#"
[reading_order]
provider = "identity"
window_capacity = 128
merge_policy = "concatenate_windows"

[language]
provider = "fixed"
fixed_code = "ces"

[translation]
provider = "identity"
max_concurrent_requests = 4
"#,
    );

    let settings = Settings::load(Some(file.path())).unwrap();

    assert_eq!(settings.reading_order.provider, ReadingOrderProvider::Identity);
    assert_eq!(settings.reading_order.window_capacity, 128);
    assert_eq!(settings.language.provider, LanguageProvider::Fixed);
    assert_eq!(settings.language.fixed_code.as_deref(), Some("ces"));
    assert_eq!(settings.translation.provider, TranslationProvider::Identity);
    assert_eq!(settings.translation.max_concurrent_requests, 4);
    assert_eq!(settings.translation.max_attempts, 3);
    assert_eq!(settings.language.confidence_threshold, 0.4);
}

#[test]
fn given_unknown_provider_when_loading_then_error() {
    let file = write_toml("[translation]\nprovider = \"deepl\"\n");

    assert!(Settings::load(Some(file.path())).is_err());
}

#[test]
fn given_missing_explicit_file_when_loading_then_error() {
    let result = Settings::load(Some(std::path::Path::new("/nonexistent/settings.toml")));

    assert!(result.is_err());
}

#[test]
fn given_input_path_when_no_output_then_defaults_next_to_input() {
    let path = default_output_path(std::path::Path::new("/data/report.pdf"), "en");

    assert_eq!(path, std::path::PathBuf::from("/data/report_en.txt"));
}

#[test]
fn given_cli_args_when_parsing_then_target_lang_alias_and_default_apply() {
    let defaulted = Cli::try_parse_from(["layout-translate", "scan.xml"]).unwrap();
    let aliased =
        Cli::try_parse_from(["layout-translate", "scan.xml", "--target_lang", "de"]).unwrap();

    assert_eq!(defaulted.target_lang, "en");
    assert_eq!(defaulted.output_path(), std::path::PathBuf::from("scan_en.txt"));
    assert_eq!(aliased.target_lang, "de");
}

#[test]
fn given_missing_input_when_parsing_cli_then_error() {
    assert!(Cli::try_parse_from(["layout-translate"]).is_err());
}
