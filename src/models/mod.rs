pub mod analysis;

pub use analysis::{parse_analyses, sort_by_sentiment, AnalysisParseError, CurrencyAnalysis, Sentiment};
