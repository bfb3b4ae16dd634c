use layout_translate::application::services::{normalize_box, normalize_page};
use layout_translate::domain::{BoundingBox, NormalizedBox, Page, Token};

#[test]
fn given_box_in_page_units_when_normalizing_then_scales_to_thousand_grid() {
    let bbox = BoundingBox::new(50.0, 100.0, 150.0, 200.0);

    let normalized = normalize_box(&bbox, 500.0, 1000.0);

    assert_eq!(normalized, NormalizedBox::new(100, 100, 300, 200));
}

#[test]
fn given_fractional_coordinates_when_normalizing_then_rounds_to_nearest() {
    let bbox = BoundingBox::new(0.1234, 0.0, 0.9996, 1.0);

    let normalized = normalize_box(&bbox, 1.0, 1.0);

    assert_eq!(normalized.x0, 123);
    assert_eq!(normalized.x1, 1000);
}

#[test]
fn given_box_outside_page_when_normalizing_then_clamps() {
    let bbox = BoundingBox::new(-20.0, -5.0, 700.0, 900.0);

    let normalized = normalize_box(&bbox, 600.0, 800.0);

    assert_eq!(normalized, NormalizedBox::new(0, 0, 1000, 1000));
}

#[test]
fn given_zero_page_width_when_normalizing_then_returns_zero_box() {
    let bbox = BoundingBox::new(1.0, 2.0, 3.0, 4.0);

    assert_eq!(normalize_box(&bbox, 0.0, 100.0), NormalizedBox::ZERO);
    assert_eq!(normalize_box(&bbox, 100.0, -1.0), NormalizedBox::ZERO);
    assert_eq!(normalize_box(&bbox, f64::NAN, 100.0), NormalizedBox::ZERO);
}

#[test]
fn given_non_finite_coordinate_when_normalizing_then_returns_zero_box() {
    let bbox = BoundingBox::new(f64::INFINITY, 2.0, 3.0, 4.0);

    assert_eq!(normalize_box(&bbox, 100.0, 100.0), NormalizedBox::ZERO);
}

#[test]
fn given_normalized_box_when_normalizing_on_thousand_page_then_is_fixed_point() {
    let original = NormalizedBox::new(12, 340, 567, 999);

    let again = normalize_box(&BoundingBox::from(original), 1000.0, 1000.0);

    assert_eq!(again, original);
}

#[test]
fn given_page_with_unpositioned_token_when_normalizing_page_then_keeps_order_and_flags() {
    let page = Page::new(0, 100.0, 100.0).with_tokens(vec![
        Token::positioned("inter-", BoundingBox::new(10.0, 10.0, 20.0, 20.0)).with_hyphenation(true),
        Token::plain("national"),
    ]);

    let tokens = normalize_page(&page);

    assert_eq!(tokens.len(), 2);
    assert_eq!(tokens[0].text, "inter-");
    assert!(tokens[0].hyphenated);
    assert_eq!(tokens[0].bbox, NormalizedBox::new(100, 100, 200, 200));
    assert_eq!(tokens[1].bbox, NormalizedBox::ZERO);
}
