use layout_translate::infrastructure::observability::{
    DEFAULT_LOG_FILTER, TracingConfig, sanitize_for_log,
};

#[test]
fn given_default_config_when_created_then_uses_crate_debug_filter() {
    let config = TracingConfig::default();
    assert_eq!(config.level, DEFAULT_LOG_FILTER);
}

#[test]
fn given_explicit_values_when_creating_then_kept() {
    let config = TracingConfig::new("warn", true);
    assert_eq!(config.level, "warn");
    assert!(config.json_format);
}

#[test]
fn given_blank_text_when_sanitizing_for_log_then_placeholder() {
    assert_eq!(sanitize_for_log("  \n"), "[EMPTY]");
}

#[test]
fn given_long_multibyte_text_when_sanitizing_for_log_then_truncates_on_char_boundary() {
    let text = "ř".repeat(150);

    let preview = sanitize_for_log(&text);

    assert!(preview.starts_with(&"ř".repeat(100)));
    assert!(preview.ends_with("(150 chars total)"));
}

#[test]
fn given_newlines_when_sanitizing_for_log_then_single_line() {
    assert_eq!(sanitize_for_log("a\nb"), "a b");
}

#[test]
fn given_json_log_format_when_applied_over_text_settings_then_json_output() {
    let config = TracingConfig::new("info", false).with_log_format(Some("JSON"));

    assert!(config.json_format);
}

#[test]
fn given_text_log_format_when_applied_over_json_settings_then_text_output() {
    let config = TracingConfig::new("info", true).with_log_format(Some("text"));

    assert!(!config.json_format);
}

#[test]
fn given_missing_or_unknown_log_format_when_applied_then_settings_choice_kept() {
    assert!(TracingConfig::new("info", true).with_log_format(None).json_format);
    assert!(!TracingConfig::new("info", false).with_log_format(Some("xml")).json_format);
}
