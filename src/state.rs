use std::sync::Arc;
use crate::external::model_provider::ModelProvider;

#[derive(Clone)]
pub struct AppState {
    pub model_provider: Arc<dyn ModelProvider>,
}
