use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};

use crate::application::ports::{InferenceError, ReadingOrderModel};
use crate::domain::NormalizedToken;

/// Client for a LayoutReader-style inference server.
///
/// Sends `{"words": [...], "boxes": [[x0, y0, x1, y1], ...]}` and expects
/// `{"order": [...]}` back.
pub struct HttpReadingOrder {
    client: Client,
    endpoint: String,
}

#[derive(Serialize)]
pub struct OrderRequest<'a> {
    pub words: Vec<&'a str>,
    pub boxes: Vec<[u16; 4]>,
}

#[derive(Debug, Deserialize)]
pub struct OrderResponse {
    pub order: Vec<usize>,
}

impl<'a> OrderRequest<'a> {
    pub fn from_tokens(tokens: &'a [NormalizedToken]) -> Self {
        Self {
            words: tokens.iter().map(|t| t.text.as_str()).collect(),
            boxes: tokens.iter().map(|t| t.bbox.as_array()).collect(),
        }
    }
}

impl HttpReadingOrder {
    pub fn new(endpoint: String, timeout: Duration) -> Result<Self, reqwest::Error> {
        let client = Client::builder().timeout(timeout).build()?;
        Ok(Self { client, endpoint })
    }
}

fn request_error(e: reqwest::Error) -> InferenceError {
    if e.is_timeout() {
        InferenceError::TimedOut
    } else {
        InferenceError::Unavailable(e.to_string())
    }
}

#[async_trait]
impl ReadingOrderModel for HttpReadingOrder {
    #[tracing::instrument(skip(self, tokens), fields(endpoint = %self.endpoint, tokens = tokens.len()))]
    async fn predict_order(&self, tokens: &[NormalizedToken]) -> Result<Vec<usize>, InferenceError> {
        if tokens.is_empty() {
            return Ok(Vec::new());
        }

        let response = self
            .client
            .post(&self.endpoint)
            .json(&OrderRequest::from_tokens(tokens))
            .send()
            .await
            .map_err(request_error)?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            return Err(InferenceError::Unavailable(format!("HTTP {status}: {body}")));
        }

        let parsed: OrderResponse = response
            .json()
            .await
            .map_err(|e| InferenceError::InvalidResponse(e.to_string()))?;

        Ok(parsed.order)
    }

    fn name(&self) -> &'static str {
        "http"
    }
}
