use std::sync::Arc;
use std::sync::atomic::Ordering;
use std::time::Duration;

use crate::helpers::{FlakyTranslator, RejectingTranslator, UppercaseTranslator};
use layout_translate::application::ports::TranslationError;
use layout_translate::application::services::{RetryPolicy, TranslationService};
use layout_translate::infrastructure::translation::IdentityTranslator;

fn long_text() -> String {
    "alpha beta gamma delta ".repeat(1000)
}

#[tokio::test]
async fn given_identity_translator_when_translating_long_text_then_output_equals_input() {
    let text = long_text();
    let service = TranslationService::new(Arc::new(IdentityTranslator));

    let outcome = service.translate(&text, "cs", "en").await;

    assert_eq!(outcome.text, text);
    assert_eq!(outcome.segments, 5);
    assert!(outcome.translated);
    assert!(outcome.is_complete());
}

#[tokio::test]
async fn given_same_source_and_target_when_translating_then_skips_translator() {
    let translator = Arc::new(UppercaseTranslator::default());
    let service = TranslationService::new(translator.clone());

    let outcome = service.translate("hello world", "en", "en").await;

    assert_eq!(outcome.text, "hello world");
    assert!(!outcome.translated);
    assert_eq!(translator.calls.load(Ordering::SeqCst), 0);
}

#[tokio::test]
async fn given_blank_text_when_translating_then_skips_translator() {
    let translator = Arc::new(UppercaseTranslator::default());
    let service = TranslationService::new(translator.clone());

    let outcome = service.translate("  \n", "cs", "en").await;

    assert_eq!(outcome.text, "  \n");
    assert_eq!(translator.calls.load(Ordering::SeqCst), 0);
}

#[tokio::test(start_paused = true)]
async fn given_transient_server_errors_when_translating_then_retries_until_success() {
    let translator = Arc::new(FlakyTranslator::new(2));
    let service = TranslationService::new(translator.clone()).with_retry_policy(RetryPolicy {
        max_attempts: 3,
        initial_backoff: Duration::from_millis(100),
        max_backoff: Duration::from_secs(1),
    });

    let outcome = service.translate("ahoj světe", "cs", "en").await;

    assert_eq!(outcome.text, "ahoj světe");
    assert!(outcome.is_complete());
    assert_eq!(translator.calls.load(Ordering::SeqCst), 3);
}

#[tokio::test(start_paused = true)]
async fn given_retries_exhausted_when_translating_then_segment_keeps_source_text() {
    let translator = Arc::new(FlakyTranslator::new(10));
    let service = TranslationService::new(translator.clone());

    let outcome = service.translate("ahoj světe", "cs", "en").await;

    assert_eq!(outcome.text, "ahoj světe");
    assert_eq!(outcome.failures.len(), 1);
    assert_eq!(outcome.failures[0].attempts, 3);
    assert_eq!(translator.calls.load(Ordering::SeqCst), 3);
}

#[tokio::test]
async fn given_non_retryable_error_when_translating_then_fails_segment_immediately() {
    let translator = Arc::new(RejectingTranslator::new("BAD"));
    let service = TranslationService::new(translator.clone()).with_max_segment_chars(10);

    let outcome = service.translate("good one BAD part fine end", "cs", "en").await;

    assert!(!outcome.is_complete());
    assert_eq!(outcome.failures.len(), 1);
    assert_eq!(outcome.failures[0].attempts, 1);
    assert_eq!(outcome.text, "good one BAD part fine end");
    assert_eq!(translator.calls.load(Ordering::SeqCst), outcome.segments);
}

#[tokio::test]
async fn given_partial_failure_when_translating_then_successful_segments_are_preserved() {
    let service = TranslationService::new(Arc::new(UppercaseTranslator::default()))
        .with_max_segment_chars(6);

    let outcome = service.translate("ab cd ef gh", "cs", "en").await;

    assert_eq!(outcome.text, "AB CD EF GH");
    assert!(outcome.is_complete());
}

#[tokio::test]
async fn given_concurrent_dispatch_when_translating_then_output_order_is_stable() {
    let text = long_text();
    let service = TranslationService::new(Arc::new(UppercaseTranslator::default()))
        .with_max_segment_chars(100)
        .with_max_concurrent_requests(8);

    let outcome = service.translate(&text, "cs", "en").await;

    assert_eq!(outcome.text, text.to_uppercase());
}

#[test]
fn given_error_kinds_when_classifying_then_only_transient_ones_retry() {
    assert!(TranslationError::Network("reset".to_string()).is_retryable());
    assert!(TranslationError::from_status(429, String::new()).is_retryable());
    assert!(TranslationError::from_status(502, String::new()).is_retryable());
    assert!(!TranslationError::from_status(400, String::new()).is_retryable());
    assert!(!TranslationError::UnsupportedModel("xx-en".to_string()).is_retryable());
}

#[tokio::test]
async fn given_whitespace_only_segment_when_translating_then_passed_through_without_request() {
    let translator = Arc::new(UppercaseTranslator::default());
    let service = TranslationService::new(translator.clone()).with_max_segment_chars(4);

    let outcome = service.translate("aaaa bbbb", "cs", "en").await;

    assert_eq!(outcome.segments, 3);
    assert_eq!(outcome.text, "AAAA BBBB");
    assert!(outcome.is_complete());
    assert_eq!(translator.calls.load(Ordering::SeqCst), 2);
}

#[tokio::test]
async fn given_blank_segment_and_strict_translator_when_translating_then_document_complete() {
    let translator = Arc::new(RejectingTranslator::new(" "));
    let service = TranslationService::new(translator.clone()).with_max_segment_chars(4);

    let outcome = service.translate("aaaa bbbb", "cs", "en").await;

    assert!(outcome.is_complete());
    assert_eq!(outcome.text, "aaaa bbbb");
    assert_eq!(translator.calls.load(Ordering::SeqCst), 2);
}
