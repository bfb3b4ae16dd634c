pub const DEFAULT_TEXT_KEY_PATTERN: &str = "text";

/// Case-insensitive substring matcher for CSV headers and JSON keys.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeyPattern(String);

impl KeyPattern {
    pub fn new(pattern: &str) -> Self {
        Self(pattern.to_lowercase())
    }

    pub fn matches(&self, key: &str) -> bool {
        key.to_lowercase().contains(&self.0)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Default for KeyPattern {
    fn default() -> Self {
        Self::new(DEFAULT_TEXT_KEY_PATTERN)
    }
}
