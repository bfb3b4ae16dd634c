use std::cmp::Ordering;

use async_trait::async_trait;

use crate::application::ports::{InferenceError, ReadingOrderModel};
use crate::domain::{NormalizedBox, NormalizedToken};

const GRID_MID: u16 = NormalizedBox::MAX / 2;
const COLUMN_MARGIN: u16 = NormalizedBox::MAX / 10;
/// Share of tokens allowed to straddle the page centre on a two-column page.
const MAX_STRADDLING_RATIO: f64 = 0.05;
const MIN_COLUMN_TOKENS: usize = 2;

/// Geometry-only reading order: columns left to right, lines top to bottom,
/// words left to right.
#[derive(Debug, Default, Clone, Copy)]
pub struct HeuristicReadingOrder;

impl HeuristicReadingOrder {
    pub fn new() -> Self {
        Self
    }

    pub fn order(tokens: &[NormalizedToken]) -> Vec<usize> {
        if is_two_column(tokens) {
            let (left, right): (Vec<usize>, Vec<usize>) =
                (0..tokens.len()).partition(|&i| tokens[i].bbox.center_x() < GRID_MID);
            let mut order = order_lines(tokens, left);
            order.extend(order_lines(tokens, right));
            order
        } else {
            order_lines(tokens, (0..tokens.len()).collect())
        }
    }
}

fn is_two_column(tokens: &[NormalizedToken]) -> bool {
    if tokens.len() < 2 * MIN_COLUMN_TOKENS {
        return false;
    }

    let left = tokens
        .iter()
        .filter(|t| t.bbox.x1 < GRID_MID - COLUMN_MARGIN / 2)
        .count();
    let right = tokens
        .iter()
        .filter(|t| t.bbox.x0 > GRID_MID + COLUMN_MARGIN / 2)
        .count();
    let straddling = tokens
        .iter()
        .filter(|t| t.bbox.x0 < GRID_MID && t.bbox.x1 > GRID_MID)
        .count();

    left >= MIN_COLUMN_TOKENS
        && right >= MIN_COLUMN_TOKENS
        && (straddling as f64) <= tokens.len() as f64 * MAX_STRADDLING_RATIO
}

/// Groups tokens into lines by vertical overlap with the line's first token,
/// then reads each line left to right.
fn order_lines(tokens: &[NormalizedToken], mut indices: Vec<usize>) -> Vec<usize> {
    indices.sort_by(|&a, &b| by_top_then_left(&tokens[a].bbox, &tokens[b].bbox));

    let mut order = Vec::with_capacity(indices.len());
    let mut line: Vec<usize> = Vec::new();
    let mut anchor: Option<NormalizedBox> = None;

    for i in indices {
        let bbox = tokens[i].bbox;
        let same_line = anchor.is_some_and(|a| bbox.center_y() <= a.y1.max(a.center_y()));
        if !same_line {
            flush_line(tokens, &mut line, &mut order);
            anchor = Some(bbox);
        }
        line.push(i);
    }
    flush_line(tokens, &mut line, &mut order);

    order
}

fn flush_line(tokens: &[NormalizedToken], line: &mut Vec<usize>, order: &mut Vec<usize>) {
    line.sort_by_key(|&i| (tokens[i].bbox.x0, i));
    order.append(line);
}

fn by_top_then_left(a: &NormalizedBox, b: &NormalizedBox) -> Ordering {
    a.y0.cmp(&b.y0).then(a.x0.cmp(&b.x0))
}

#[async_trait]
impl ReadingOrderModel for HeuristicReadingOrder {
    async fn predict_order(&self, tokens: &[NormalizedToken]) -> Result<Vec<usize>, InferenceError> {
        Ok(Self::order(tokens))
    }

    fn name(&self) -> &'static str {
        "heuristic"
    }
}
