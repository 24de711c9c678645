pub mod gemini;
pub mod model_provider;
