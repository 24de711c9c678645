use std::fmt;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Overall bias assigned to a currency pair, most positive first.
///
/// The model is asked for one of five labels. Anything else is kept as
/// `Unknown` with the raw label so it can still be shown, ranked last and
/// drawn in the default color.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Sentiment {
    VeryBullish,
    Bullish,
    Neutral,
    Bearish,
    VeryBearish,
    Unknown(String),
}

impl Sentiment {
    pub const ALL: [Sentiment; 5] = [
        Sentiment::VeryBullish,
        Sentiment::Bullish,
        Sentiment::Neutral,
        Sentiment::Bearish,
        Sentiment::VeryBearish,
    ];

    pub fn label(&self) -> &str {
        match self {
            Sentiment::VeryBullish => "Very Bullish",
            Sentiment::Bullish => "Bullish",
            Sentiment::Neutral => "Neutral",
            Sentiment::Bearish => "Bearish",
            Sentiment::VeryBearish => "Very Bearish",
            Sentiment::Unknown(raw) => raw,
        }
    }

    /// Sort rank. Unknown labels rank after every known value.
    pub fn rank(&self) -> u8 {
        match self {
            Sentiment::VeryBullish => 0,
            Sentiment::Bullish => 1,
            Sentiment::Neutral => 2,
            Sentiment::Bearish => 3,
            Sentiment::VeryBearish => 4,
            Sentiment::Unknown(_) => 5,
        }
    }
}

impl From<String> for Sentiment {
    fn from(value: String) -> Self {
        match value.as_str() {
            "Very Bullish" => Sentiment::VeryBullish,
            "Bullish" => Sentiment::Bullish,
            "Neutral" => Sentiment::Neutral,
            "Bearish" => Sentiment::Bearish,
            "Very Bearish" => Sentiment::VeryBearish,
            _ => Sentiment::Unknown(value),
        }
    }
}

impl From<Sentiment> for String {
    fn from(value: Sentiment) -> Self {
        match value {
            Sentiment::Unknown(raw) => raw,
            known => known.label().to_string(),
        }
    }
}

impl fmt::Display for Sentiment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// One model-produced record per currency pair.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CurrencyAnalysis {
    pub pair: String,
    pub sentiment: Sentiment,
    pub description: String,
    pub details: String,
    pub fundamental_drivers: Vec<String>,
    pub sentiment_indicators: Vec<String>,
}

#[derive(Debug, Error)]
#[error("model output does not match the analysis schema: {0}")]
pub struct AnalysisParseError(#[from] serde_json::Error);

/// Parse the model's text into records. Fails closed: a non-array, a missing
/// field or a wrongly typed field rejects the whole payload.
pub fn parse_analyses(text: &str) -> Result<Vec<CurrencyAnalysis>, AnalysisParseError> {
    Ok(serde_json::from_str(text.trim())?)
}

/// Stable sort by sentiment rank; rows with equal rank keep source order.
pub fn sort_by_sentiment(rows: &mut [CurrencyAnalysis]) {
    rows.sort_by_key(|row| row.sentiment.rank());
}
