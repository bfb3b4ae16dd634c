use std::sync::Arc;

use futures::stream::{self, StreamExt};

use crate::application::ports::{InferenceError, ReadingOrderModel};
use crate::domain::{Degradation, MergePolicy, NormalizedToken, Page, ReadingOrder, Window};

use super::geometry_normalizer::normalize_page;
use super::hyphenation::join_tokens;
use super::windowing::WindowingEngine;

pub const PAGE_SEPARATOR: &str = "\n\n";

/// A window whose inference failed and kept extraction order.
#[derive(Debug, Clone, PartialEq)]
pub struct WindowFailure {
    pub page: usize,
    pub window: usize,
    pub reason: String,
}

impl From<WindowFailure> for Degradation {
    fn from(f: WindowFailure) -> Self {
        Degradation::ReadingOrderFallback {
            page: f.page,
            window: f.window,
            reason: f.reason,
        }
    }
}

#[derive(Debug, Clone)]
pub struct PageReconstruction {
    pub page_index: usize,
    pub tokens: Vec<NormalizedToken>,
    pub order: ReadingOrder,
    pub failures: Vec<WindowFailure>,
}

impl PageReconstruction {
    /// Page text in reading order with hyphenated words rejoined.
    pub fn text(&self) -> String {
        join_tokens(self.order.iter().map(|i| {
            let token = &self.tokens[i];
            (token.text.as_str(), token.hyphenated)
        }))
    }
}

#[derive(Debug, Clone, Default)]
pub struct DocumentReconstruction {
    pub pages: Vec<PageReconstruction>,
}

impl DocumentReconstruction {
    /// Non-empty pages joined by a blank line.
    pub fn text(&self) -> String {
        self.pages
            .iter()
            .map(PageReconstruction::text)
            .filter(|t| !t.is_empty())
            .collect::<Vec<_>>()
            .join(PAGE_SEPARATOR)
    }

    pub fn failures(&self) -> impl Iterator<Item = &WindowFailure> {
        self.pages.iter().flat_map(|p| p.failures.iter())
    }
}

/// Orders the tokens of positional pages by calling the reading-order model
/// on each window and merging the window orders.
pub struct ReadingOrderReconstructor {
    model: Arc<dyn ReadingOrderModel>,
    windowing: WindowingEngine,
    merge_policy: MergePolicy,
    max_concurrent_requests: usize,
}

impl ReadingOrderReconstructor {
    pub fn new(model: Arc<dyn ReadingOrderModel>, windowing: WindowingEngine) -> Self {
        Self {
            model,
            windowing,
            merge_policy: MergePolicy::default(),
            max_concurrent_requests: 1,
        }
    }

    pub fn with_merge_policy(mut self, merge_policy: MergePolicy) -> Self {
        self.merge_policy = merge_policy;
        self
    }

    pub fn with_max_concurrent_requests(mut self, limit: usize) -> Self {
        self.max_concurrent_requests = limit.max(1);
        self
    }

    pub async fn reconstruct_pages(&self, pages: &[Page]) -> DocumentReconstruction {
        let mut reconstructed = Vec::with_capacity(pages.len());
        for page in pages {
            reconstructed.push(self.reconstruct_page(page).await);
        }
        DocumentReconstruction {
            pages: reconstructed,
        }
    }

    #[tracing::instrument(
        skip(self, page),
        fields(page = page.index, tokens = page.tokens.len(), model = self.model.name())
    )]
    pub async fn reconstruct_page(&self, page: &Page) -> PageReconstruction {
        let tokens = normalize_page(page);
        let windows = self.windowing.partition(&tokens);

        let results: Vec<(Window<'_>, Result<ReadingOrder, InferenceError>)> =
            stream::iter(windows)
                .map(|window| async move {
                    let result = self.order_window(&window).await;
                    (window, result)
                })
                .buffered(self.max_concurrent_requests)
                .collect()
                .await;

        let (order, failures) = self.merge(page.index, results);

        if !failures.is_empty() {
            tracing::warn!(
                failed_windows = failures.len(),
                "Kept extraction order for windows with failed inference"
            );
        }

        PageReconstruction {
            page_index: page.index,
            order,
            failures,
            tokens,
        }
    }

    async fn order_window(&self, window: &Window<'_>) -> Result<ReadingOrder, InferenceError> {
        let order = self.model.predict_order(window.tokens).await?;
        Ok(ReadingOrder::from_permutation(order, window.len())?)
    }

    fn merge(
        &self,
        page: usize,
        results: Vec<(Window<'_>, Result<ReadingOrder, InferenceError>)>,
    ) -> (ReadingOrder, Vec<WindowFailure>) {
        match self.merge_policy {
            MergePolicy::ConcatenateWindows => {
                let len = results.iter().map(|(w, _)| w.len()).sum();
                let mut order = Vec::with_capacity(len);
                let mut failures = Vec::new();

                for (window, result) in results {
                    let local = result.unwrap_or_else(|e| {
                        tracing::debug!(window = window.index, error = %e, "Window inference failed");
                        failures.push(WindowFailure {
                            page,
                            window: window.index,
                            reason: e.to_string(),
                        });
                        ReadingOrder::identity(window.len())
                    });
                    order.extend(local.iter().map(|i| window.page_index_of(i)));
                }

                let order = ReadingOrder::from_permutation(order, len)
                    .unwrap_or_else(|_| ReadingOrder::identity(len));
                (order, failures)
            }
        }
    }
}
