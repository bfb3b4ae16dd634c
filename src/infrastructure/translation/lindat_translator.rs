use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;
use tokio::sync::OnceCell;

use crate::application::ports::{TranslationError, Translator};
use crate::infrastructure::observability::sanitize_for_log;

pub const LINDAT_BASE_URL: &str = "https://lindat.mff.cuni.cz/services/translation/api/v2";
pub const FALLBACK_MODELS: [&str; 6] = ["fr-en", "cs-en", "de-en", "uk-en", "ru-en", "pl-en"];

/// Client for the LINDAT translation service.
pub struct LindatTranslator {
    client: Client,
    base_url: String,
    models: OnceCell<Vec<String>>,
}

/// Body of `GET /models`: either a HAL collection or a plain list.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
pub enum ModelsResponse {
    Hal {
        #[serde(rename = "_embedded")]
        embedded: EmbeddedModels,
    },
    List(Vec<String>),
}

#[derive(Debug, Default, Deserialize)]
pub struct EmbeddedModels {
    #[serde(default)]
    pub item: Vec<ModelItem>,
}

#[derive(Debug, Deserialize)]
pub struct ModelItem {
    pub model: String,
}

impl ModelsResponse {
    pub fn into_models(self) -> Vec<String> {
        match self {
            Self::Hal { embedded } => embedded.item.into_iter().map(|i| i.model).collect(),
            Self::List(models) => models,
        }
    }
}

impl LindatTranslator {
    pub fn new(base_url: &str, timeout: Duration) -> Result<Self, reqwest::Error> {
        let client = Client::builder().timeout(timeout).build()?;
        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
            models: OnceCell::new(),
        })
    }

    /// Supported `src-tgt` pairs, fetched once. An empty list means the
    /// service could not say and requests go through unchecked.
    pub async fn supported_models(&self) -> &[String] {
        self.models.get_or_init(|| self.fetch_models()).await
    }

    async fn fetch_models(&self) -> Vec<String> {
        let url = format!("{}/models", self.base_url);
        let result = async {
            self.client
                .get(&url)
                .send()
                .await?
                .error_for_status()?
                .json::<ModelsResponse>()
                .await
        }
        .await;

        match result {
            Ok(response) => {
                let models = response.into_models();
                tracing::debug!(count = models.len(), "Fetched translation models");
                models
            }
            Err(e) => {
                tracing::warn!(error = %e, "Could not fetch translation models, using defaults");
                FALLBACK_MODELS.iter().map(|m| m.to_string()).collect()
            }
        }
    }
}

fn request_error(e: reqwest::Error) -> TranslationError {
    TranslationError::Network(e.to_string())
}

#[async_trait]
impl Translator for LindatTranslator {
    #[tracing::instrument(skip(self, text), fields(chars = text.chars().count()))]
    async fn translate(
        &self,
        text: &str,
        source: &str,
        target: &str,
    ) -> Result<String, TranslationError> {
        let model = format!("{source}-{target}");
        let models = self.supported_models().await;

        if models.is_empty() {
            tracing::warn!(model = %model, "Model list unavailable, sending unchecked request");
        } else if !models.iter().any(|m| m == &model) {
            return Err(TranslationError::UnsupportedModel(model));
        }

        tracing::debug!(model = %model, preview = %sanitize_for_log(text), "Sending segment");

        let response = self
            .client
            .post(format!("{}/models/{model}", self.base_url))
            .query(&[("src", source), ("tgt", target)])
            .form(&[("input_text", text)])
            .send()
            .await
            .map_err(request_error)?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(TranslationError::from_status(status.as_u16(), body));
        }

        let body = response
            .text()
            .await
            .map_err(|e| TranslationError::InvalidResponse(e.to_string()))?;

        Ok(body.trim().to_string())
    }
}
