#![allow(dead_code)]

use std::collections::HashSet;
use std::io::{Cursor, Write};
use std::sync::Mutex;
use std::sync::atomic::{AtomicUsize, Ordering};

use async_trait::async_trait;
use zip::ZipWriter;
use zip::write::SimpleFileOptions;

use layout_translate::application::ports::{
    InferenceError, LanguageClassifier, ReadingOrderModel, TranslationError, Translator,
};
use layout_translate::domain::{BoundingBox, LanguagePrediction, NormalizedToken, Page, Token};

/// Reverses every window it sees.
pub struct ReversingModel;

#[async_trait]
impl ReadingOrderModel for ReversingModel {
    async fn predict_order(&self, tokens: &[NormalizedToken]) -> Result<Vec<usize>, InferenceError> {
        Ok((0..tokens.len()).rev().collect())
    }

    fn name(&self) -> &'static str {
        "reversing"
    }
}

/// Fails on the given call numbers (0-based), reverses otherwise.
pub struct FailingOnCallsModel {
    calls: AtomicUsize,
    failing: HashSet<usize>,
}

impl FailingOnCallsModel {
    pub fn new(failing: impl IntoIterator<Item = usize>) -> Self {
        Self {
            calls: AtomicUsize::new(0),
            failing: failing.into_iter().collect(),
        }
    }
}

#[async_trait]
impl ReadingOrderModel for FailingOnCallsModel {
    async fn predict_order(&self, tokens: &[NormalizedToken]) -> Result<Vec<usize>, InferenceError> {
        let call = self.calls.fetch_add(1, Ordering::SeqCst);
        if self.failing.contains(&call) {
            return Err(InferenceError::Unavailable("model offline".to_string()));
        }
        Ok((0..tokens.len()).rev().collect())
    }

    fn name(&self) -> &'static str {
        "failing"
    }
}

/// Returns a permutation with a duplicate index.
pub struct DuplicateIndexModel;

#[async_trait]
impl ReadingOrderModel for DuplicateIndexModel {
    async fn predict_order(&self, tokens: &[NormalizedToken]) -> Result<Vec<usize>, InferenceError> {
        Ok(vec![0; tokens.len()])
    }

    fn name(&self) -> &'static str {
        "duplicate"
    }
}

pub struct ErrorClassifier;

#[async_trait]
impl LanguageClassifier for ErrorClassifier {
    async fn classify(&self, _text: &str) -> Result<LanguagePrediction, InferenceError> {
        Err(InferenceError::Unavailable("no model".to_string()))
    }
}

/// Records every sample it is asked to classify.
pub struct RecordingClassifier {
    pub samples: Mutex<Vec<String>>,
    prediction: LanguagePrediction,
}

impl RecordingClassifier {
    pub fn new(code: &str, confidence: f64) -> Self {
        Self {
            samples: Mutex::new(Vec::new()),
            prediction: LanguagePrediction::new(code, confidence),
        }
    }
}

#[async_trait]
impl LanguageClassifier for RecordingClassifier {
    async fn classify(&self, text: &str) -> Result<LanguagePrediction, InferenceError> {
        self.samples.lock().unwrap().push(text.to_string());
        Ok(self.prediction.clone())
    }
}

/// Uppercases text and counts calls.
#[derive(Default)]
pub struct UppercaseTranslator {
    pub calls: AtomicUsize,
}

#[async_trait]
impl Translator for UppercaseTranslator {
    async fn translate(&self, text: &str, _source: &str, _target: &str) -> Result<String, TranslationError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        Ok(text.to_uppercase())
    }
}

/// Fails with a retryable error a fixed number of times, then echoes.
pub struct FlakyTranslator {
    remaining_failures: AtomicUsize,
    pub calls: AtomicUsize,
}

impl FlakyTranslator {
    pub fn new(failures: usize) -> Self {
        Self {
            remaining_failures: AtomicUsize::new(failures),
            calls: AtomicUsize::new(0),
        }
    }
}

#[async_trait]
impl Translator for FlakyTranslator {
    async fn translate(&self, text: &str, _source: &str, _target: &str) -> Result<String, TranslationError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        let failed = self
            .remaining_failures
            .fetch_update(Ordering::SeqCst, Ordering::SeqCst, |n| n.checked_sub(1))
            .is_ok();
        if failed {
            return Err(TranslationError::Server {
                status: 503,
                body: "busy".to_string(),
            });
        }
        Ok(text.to_string())
    }
}

/// Rejects any segment containing `marker`; echoes the rest.
pub struct RejectingTranslator {
    pub marker: &'static str,
    pub calls: AtomicUsize,
}

impl RejectingTranslator {
    pub fn new(marker: &'static str) -> Self {
        Self {
            marker,
            calls: AtomicUsize::new(0),
        }
    }
}

#[async_trait]
impl Translator for RejectingTranslator {
    async fn translate(&self, text: &str, _source: &str, _target: &str) -> Result<String, TranslationError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        if text.contains(self.marker) {
            return Err(TranslationError::Rejected {
                status: 400,
                body: "bad input".to_string(),
            });
        }
        Ok(text.to_string())
    }
}

/// Page of `count` tokens laid out in rows of ten words.
pub fn grid_page(index: usize, count: usize) -> Page {
    let tokens = (0..count)
        .map(|i| {
            let row = (i / 10) as f64;
            let col = (i % 10) as f64;
            Token::positioned(
                format!("w{i}"),
                BoundingBox::from_origin_size(col * 50.0, row * 20.0, 40.0, 10.0),
            )
        })
        .collect();
    Page::new(index, 600.0, 800.0).with_tokens(tokens)
}

/// DOCX package holding only `word/document.xml`.
pub fn build_docx(document_xml: &str) -> Vec<u8> {
    let mut zip = ZipWriter::new(Cursor::new(Vec::new()));
    let options = SimpleFileOptions::default().compression_method(zip::CompressionMethod::Stored);
    zip.start_file("word/document.xml", options).unwrap();
    zip.write_all(document_xml.as_bytes()).unwrap();
    zip.finish().unwrap().into_inner()
}
