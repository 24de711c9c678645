use serde::Deserialize;
use serde_json::Value;
use thiserror::Error;
use tracing::{error, info};

use crate::models::analysis::{parse_analyses, AnalysisParseError, CurrencyAnalysis};

#[derive(Debug, Error)]
pub enum FetchError {
    #[error("{0}")]
    Network(String),
    #[error("HTTP error! status: {0}")]
    Status(u16),
    #[error("Unexpected API response structure.")]
    Envelope,
    #[error(transparent)]
    Parse(#[from] AnalysisParseError),
}

#[derive(Debug, Deserialize)]
struct Envelope {
    result: Option<String>,
}

/// HTTP client for the analysis proxy.
pub struct AnalysisClient {
    client: reqwest::Client,
    base_url: String,
}

impl AnalysisClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            client: reqwest::Client::new(),
            base_url: base_url.into(),
        }
    }

    fn endpoint(&self) -> String {
        format!("{}/api/trading-data", self.base_url)
    }

    /// POST the prompt payload and parse the relayed model text into records.
    /// The rows come back in model order; sorting happens in the view state.
    pub async fn fetch_analysis(&self, payload: &Value) -> Result<Vec<CurrencyAnalysis>, FetchError> {
        info!("Requesting currency analysis from {}", self.endpoint());

        let response = self
            .client
            .post(self.endpoint())
            .json(payload)
            .send()
            .await
            .map_err(|e| FetchError::Network(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            error!("Analysis proxy returned HTTP {}", status);
            return Err(FetchError::Status(status.as_u16()));
        }

        let envelope: Envelope = response
            .json()
            .await
            .map_err(|_| FetchError::Envelope)?;
        let text = envelope.result.ok_or(FetchError::Envelope)?;

        let rows = parse_analyses(&text).map_err(|e| {
            error!("Failed to parse model output: {}", e);
            e
        })?;

        info!("Received analysis for {} currency pairs", rows.len());
        Ok(rows)
    }
}
