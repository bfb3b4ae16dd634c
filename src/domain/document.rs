use std::fmt;
use std::path::Path;

use uuid::Uuid;

#[derive(Debug, Clone, PartialEq)]
pub struct Document {
    pub id: DocumentId,
    pub filename: String,
    pub format: DocumentFormat,
    pub size_bytes: u64,
}

impl Document {
    pub fn new(filename: String, format: DocumentFormat, size_bytes: u64) -> Self {
        Self {
            id: DocumentId::new(),
            filename,
            format,
            size_bytes,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct DocumentId(Uuid);

impl DocumentId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    pub fn from_uuid(uuid: Uuid) -> Self {
        Self(uuid)
    }

    pub fn as_uuid(&self) -> Uuid {
        self.0
    }
}

impl Default for DocumentId {
    fn default() -> Self {
        Self::new()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DocumentFormat {
    Pdf,
    AltoXml,
    Txt,
    Docx,
    Html,
    Csv,
    Json,
}

impl DocumentFormat {
    pub const ALL: [DocumentFormat; 7] = [
        Self::Pdf,
        Self::AltoXml,
        Self::Txt,
        Self::Docx,
        Self::Html,
        Self::Csv,
        Self::Json,
    ];

    pub fn from_extension(extension: &str) -> Option<Self> {
        match extension.to_ascii_lowercase().as_str() {
            "pdf" => Some(Self::Pdf),
            "xml" | "alto" => Some(Self::AltoXml),
            "txt" => Some(Self::Txt),
            "docx" => Some(Self::Docx),
            "html" | "htm" => Some(Self::Html),
            "csv" => Some(Self::Csv),
            "json" => Some(Self::Json),
            _ => None,
        }
    }

    pub fn from_path(path: &Path) -> Option<Self> {
        path.extension()
            .and_then(|ext| ext.to_str())
            .and_then(Self::from_extension)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Pdf => "PDF",
            Self::AltoXml => "ALTO-XML",
            Self::Txt => "TXT",
            Self::Docx => "DOCX",
            Self::Html => "HTML",
            Self::Csv => "CSV",
            Self::Json => "JSON",
        }
    }

    /// Formats whose extraction carries per-token bounding boxes and therefore
    /// goes through reading-order reconstruction.
    pub fn is_positional(&self) -> bool {
        matches!(self, Self::Pdf | Self::AltoXml)
    }
}

impl fmt::Display for DocumentFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
