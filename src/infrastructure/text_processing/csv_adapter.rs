use async_trait::async_trait;

use crate::application::ports::{DocumentExtractor, ExtractionError};
use crate::domain::{Document, DocumentFormat, ExtractedContent};

use super::key_pattern::KeyPattern;

/// Text from every column whose header matches the key pattern.
pub struct CsvAdapter {
    pattern: KeyPattern,
}

impl CsvAdapter {
    pub fn new(pattern: KeyPattern) -> Self {
        Self { pattern }
    }
}

impl Default for CsvAdapter {
    fn default() -> Self {
        Self::new(KeyPattern::default())
    }
}

/// Non-empty cells of matching columns, row-major, one per line.
pub fn csv_to_text(data: &[u8], pattern: &KeyPattern) -> Result<String, ExtractionError> {
    let corrupt = |e: csv::Error| ExtractionError::corrupt(DocumentFormat::Csv, e);

    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_reader(data);

    let columns: Vec<usize> = reader
        .headers()
        .map_err(corrupt)?
        .iter()
        .enumerate()
        .filter(|(_, header)| pattern.matches(header))
        .map(|(i, _)| i)
        .collect();

    if columns.is_empty() {
        tracing::debug!(pattern = pattern.as_str(), "No CSV column matches key pattern");
        return Ok(String::new());
    }

    let mut cells = Vec::new();
    for record in reader.records() {
        let record = record.map_err(corrupt)?;
        cells.extend(
            columns
                .iter()
                .filter_map(|&i| record.get(i))
                .map(str::trim)
                .filter(|cell| !cell.is_empty())
                .map(str::to_string),
        );
    }

    Ok(cells.join("\n"))
}

#[async_trait]
impl DocumentExtractor for CsvAdapter {
    #[tracing::instrument(skip(self, data), fields(filename = %document.filename))]
    async fn extract(
        &self,
        data: &[u8],
        document: &Document,
    ) -> Result<ExtractedContent, ExtractionError> {
        if document.format != DocumentFormat::Csv {
            return Err(ExtractionError::UnsupportedFormat(
                document.format.to_string(),
            ));
        }

        csv_to_text(data, &self.pattern).map(ExtractedContent::Flat)
    }
}
