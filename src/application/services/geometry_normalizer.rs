use crate::domain::{BoundingBox, NormalizedBox, NormalizedToken, Page};

const GRID: f64 = NormalizedBox::MAX as f64;

/// Rescales a box from page units onto the 0..=1000 grid.
///
/// Non-positive or non-finite page dimensions, and non-finite coordinates,
/// yield `NormalizedBox::ZERO`.
pub fn normalize_box(bbox: &BoundingBox, page_width: f64, page_height: f64) -> NormalizedBox {
    if !valid_dimension(page_width) || !valid_dimension(page_height) {
        tracing::debug!(page_width, page_height, "Invalid page dimensions, zeroing box");
        return NormalizedBox::ZERO;
    }

    if !bbox.is_finite() {
        tracing::debug!(?bbox, "Non-finite token geometry, zeroing box");
        return NormalizedBox::ZERO;
    }

    let sx = GRID / page_width;
    let sy = GRID / page_height;

    NormalizedBox::new(
        scale(bbox.x0, sx),
        scale(bbox.y0, sy),
        scale(bbox.x1, sx),
        scale(bbox.y1, sy),
    )
}

/// Normalizes every token of a page, keeping extraction order.
///
/// Tokens without a box get `NormalizedBox::ZERO`.
pub fn normalize_page(page: &Page) -> Vec<NormalizedToken> {
    page.tokens
        .iter()
        .map(|token| {
            let bbox = token
                .bbox
                .as_ref()
                .map(|b| normalize_box(b, page.width, page.height))
                .unwrap_or(NormalizedBox::ZERO);
            NormalizedToken::new(token.text.clone(), bbox).with_hyphenation(token.hyphenated)
        })
        .collect()
}

fn valid_dimension(value: f64) -> bool {
    value.is_finite() && value > 0.0
}

fn scale(value: f64, factor: f64) -> u16 {
    (value * factor).round().clamp(0.0, GRID) as u16
}
