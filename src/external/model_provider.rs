use async_trait::async_trait;
use serde_json::Value;

use crate::errors::ModelError;

#[async_trait]
pub trait ModelProvider: Send + Sync {
    /// Send a `generateContent`-shaped payload (contents plus
    /// generationConfig) to the hosted model and return its raw text output.
    async fn generate_content(&self, payload: Value) -> Result<String, ModelError>;
}
