use layout_translate::application::ports::{DocumentExtractor, ExtractionError};
use layout_translate::domain::{BoundingBox, Document, DocumentFormat};
use layout_translate::infrastructure::text_processing::{
    PdfAdapter, SpanGeometry, flip_to_top_left, spans_to_words,
};

fn span(text: &str, x: f64, y: f64, w: f64, h: f64) -> SpanGeometry {
    SpanGeometry {
        text: text.to_string(),
        bbox: BoundingBox::from_origin_size(x, y, w, h),
    }
}

#[test]
fn given_bottom_left_rect_when_flipping_then_measured_from_page_top() {
    let bbox = flip_to_top_left(10.0, 700.0, 50.0, 12.0, 792.0);

    assert_eq!(bbox.y0, 80.0);
    assert_eq!(bbox.y1, 92.0);
}

#[test]
fn given_multi_word_span_when_splitting_then_boxes_proportional_to_char_offsets() {
    let tokens = spans_to_words(&[span("ab cd", 0.0, 0.0, 50.0, 10.0)]);

    assert_eq!(tokens.len(), 2);
    assert_eq!(tokens[0].text, "ab");
    assert_eq!(tokens[1].text, "cd");
    let second = tokens[1].bbox.unwrap();
    assert_eq!(second.x0, 30.0);
    assert_eq!(second.x1, 50.0);
}

#[test]
fn given_hyphen_closing_a_line_when_splitting_then_only_that_word_flagged() {
    let tokens = spans_to_words(&[
        span("an inter-", 0.0, 0.0, 90.0, 10.0),
        span("national treaty", 0.0, 20.0, 150.0, 10.0),
    ]);

    assert!(tokens[1].hyphenated);
    assert!(!tokens[2].hyphenated);
}

#[test]
fn given_hyphen_followed_by_span_on_same_line_when_splitting_then_not_flagged() {
    let tokens = spans_to_words(&[
        span("well-", 0.0, 0.0, 50.0, 10.0),
        span("known", 55.0, 0.0, 50.0, 10.0),
    ]);

    assert!(!tokens[0].hyphenated);
}

#[tokio::test]
async fn given_corrupt_bytes_when_extracting_pdf_then_corrupt_error() {
    let adapter = PdfAdapter::new();
    let garbage = b"not a pdf at all";
    let document = Document::new("corrupt.pdf".to_string(), DocumentFormat::Pdf, garbage.len() as u64);

    let result = adapter.extract(garbage, &document).await;

    assert!(matches!(
        result,
        Err(ExtractionError::Corrupt {
            format: DocumentFormat::Pdf,
            ..
        })
    ));
}
