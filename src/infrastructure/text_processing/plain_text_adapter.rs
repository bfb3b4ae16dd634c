use async_trait::async_trait;

use crate::application::ports::{DocumentExtractor, ExtractionError};
use crate::domain::{Document, DocumentFormat, ExtractedContent};

pub struct PlainTextAdapter;

#[async_trait]
impl DocumentExtractor for PlainTextAdapter {
    async fn extract(
        &self,
        data: &[u8],
        document: &Document,
    ) -> Result<ExtractedContent, ExtractionError> {
        if document.format != DocumentFormat::Txt {
            return Err(ExtractionError::UnsupportedFormat(
                document.format.to_string(),
            ));
        }

        let text = String::from_utf8(data.to_vec())
            .map_err(|e| ExtractionError::corrupt(DocumentFormat::Txt, e))?;

        Ok(ExtractedContent::Flat(text))
    }
}
