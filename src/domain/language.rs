use std::fmt;

/// Raw classifier output.
#[derive(Debug, Clone, PartialEq)]
pub struct LanguagePrediction {
    pub iso639_3: String,
    pub confidence: f64,
}

impl LanguagePrediction {
    pub fn new(iso639_3: impl Into<String>, confidence: f64) -> Self {
        Self {
            iso639_3: iso639_3.into(),
            confidence,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum FallbackReason {
    EmptyText,
    TextTooShort { chars: usize, min: usize },
    LowConfidence { confidence: f64, threshold: f64 },
    UnmappedCode(String),
    ClassifierUnavailable(String),
}

impl fmt::Display for FallbackReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyText => write!(f, "no text to classify"),
            Self::TextTooShort { chars, min } => {
                write!(f, "text too short to classify ({chars} < {min} chars)")
            }
            Self::LowConfidence {
                confidence,
                threshold,
            } => write!(f, "confidence {confidence:.3} below {threshold}"),
            Self::UnmappedCode(code) => write!(f, "no two-letter code for '{code}'"),
            Self::ClassifierUnavailable(reason) => write!(f, "classifier unavailable: {reason}"),
        }
    }
}

/// Source language chosen for translation.
#[derive(Debug, Clone, PartialEq)]
pub struct LanguageDecision {
    pub code: String,
    pub prediction: Option<LanguagePrediction>,
    pub fallback: Option<FallbackReason>,
}

impl LanguageDecision {
    pub fn detected(code: impl Into<String>, prediction: LanguagePrediction) -> Self {
        Self {
            code: code.into(),
            prediction: Some(prediction),
            fallback: None,
        }
    }

    pub fn fallback(
        code: impl Into<String>,
        prediction: Option<LanguagePrediction>,
        reason: FallbackReason,
    ) -> Self {
        Self {
            code: code.into(),
            prediction,
            fallback: Some(reason),
        }
    }

    pub fn is_fallback(&self) -> bool {
        self.fallback.is_some()
    }
}

const ISO639_3_TO_1: &[(&str, &str)] = &[
    ("ces", "cs"),
    ("eng", "en"),
    ("fra", "fr"),
    ("deu", "de"),
    ("rus", "ru"),
    ("pol", "pl"),
    ("ukr", "uk"),
    ("slk", "sk"),
    ("bul", "bg"),
    ("hrv", "hr"),
    ("slv", "sl"),
    ("lav", "lv"),
    ("lit", "lt"),
    ("est", "et"),
    ("hun", "hu"),
    ("ron", "ro"),
    ("spa", "es"),
    ("ita", "it"),
    ("nld", "nl"),
    ("hin", "hi"),
];

/// Maps a three-letter ISO 639-3 code to the two-letter code the translation
/// service expects. Classifier labels such as `ces_Latn` are accepted.
pub fn iso639_3_to_iso639_1(code: &str) -> Option<&'static str> {
    let base = code.split('_').next().unwrap_or(code).to_ascii_lowercase();
    ISO639_3_TO_1
        .iter()
        .find(|(three, _)| *three == base)
        .map(|(_, two)| *two)
}
