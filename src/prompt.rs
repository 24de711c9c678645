//! Prompt and structured-output schema sent to the model.
//!
//! The wording, the pair list and the schema are part of the contract the
//! model output is parsed against; change them together with
//! [`crate::models::analysis`].

use chrono::NaiveDate;
use serde_json::{json, Value};

/// Pairs requested on every dashboard load, in prompt order.
pub const CURRENCY_PAIRS: [&str; 19] = [
    "EURUSD", "GBPUSD", "USDJPY", "USDCHF", "AUDUSD", "USDCAD", "NZDUSD", "XAUUSD", "BTCUSD",
    "EURJPY", "EURGBP", "NZDJPY", "GBPJPY", "GBPCHF", "GBPCAD", "AUDJPY", "CHFJPY", "NZDCAD",
    "CADJPY",
];

/// Long en-US date, e.g. "October 17, 2026".
pub fn analysis_date_label(date: NaiveDate) -> String {
    date.format("%B %-d, %Y").to_string()
}

pub fn build_prompt(analysis_date: &str) -> String {
    let pairs = CURRENCY_PAIRS.join(", ");
    format!(
        r#"As a senior forex analyst specializing in swing trading, provide a comprehensive sentiment and fundamental analysis for each of the following currency pairs as of today, {analysis_date}. For each pair, perform a detailed analysis considering:
      - Global Macroeconomic Environment: Current state of major economies (US, Eurozone, UK, Japan, Canada, Australia, New Zealand, Switzerland), including recent GDP, inflation (CPI/PCE), employment data (NFP, jobless claims), and interest rate outlooks.
      - Central Bank Monetary Policy: Recent decisions, forward guidance, and projected policy paths from the Federal Reserve, European Central Bank, Bank of England, Bank of Japan, Bank of Canada, Reserve Bank of Australia, Reserve Bank of New Zealand, and Swiss National Bank, highlighting any divergences.
      - Geopolitical & Trade Factors: Significant geopolitical events, trade tensions, and their potential impact on global capital flows and specific currencies.
      - Intermarket Correlations: How movements in commodities (e.g., oil for CAD, gold for AUD/NZD, other metals), bond yields, and major stock indices might influence the currency pairs.
      - Sentiment & Positioning: Major market sentiment indicators, speculative positioning (e.g., COT data, retail sentiment surveys), significant news headlines, and market liquidity conditions.

      Based on this holistic view, for each currency pair, provide:
      1.  'pair': The currency pair ticker.
      2.  'sentiment': Categorize the overall bias as 'Very Bullish', 'Bullish', 'Neutral', 'Bearish', or 'Very Bearish'.
      3.  'description': A concise summary (1-2 sentences) of the primary driver(s) for the sentiment.
      4.  'details': A more elaborate paragraph (4-6 sentences) explaining the key fundamental and sentiment factors contributing to the bias, including any short-term risks or catalysts.
      5.  'fundamentalDrivers': A comprehensive list of specific macroeconomic, monetary policy, and geopolitical factors driving the pair.
      6.  'sentimentIndicators': A list of observable market sentiment indicators or flows relevant to the pair's bias.

      Ensure the analysis is nuanced, well-reasoned, and specifically tailored for swing trading opportunities. The output MUST be a JSON array of objects, with all fields populated for every specified currency pair.
      Currency Pairs: {pairs}.
      Provide the output as a JSON array of objects, ensuring all specified fields are populated."#
    )
}

pub fn response_schema() -> Value {
    json!({
        "type": "ARRAY",
        "items": {
            "type": "OBJECT",
            "properties": {
                "pair": { "type": "STRING" },
                "sentiment": {
                    "type": "STRING",
                    "enum": ["Very Bullish", "Bullish", "Neutral", "Bearish", "Very Bearish"]
                },
                "description": { "type": "STRING" },
                "details": { "type": "STRING" },
                "fundamentalDrivers": {
                    "type": "ARRAY",
                    "items": { "type": "STRING" }
                },
                "sentimentIndicators": {
                    "type": "ARRAY",
                    "items": { "type": "STRING" }
                }
            },
            "required": ["pair", "sentiment", "description", "details", "fundamentalDrivers", "sentimentIndicators"]
        }
    })
}

/// Full `generateContent` body for one analysis request.
pub fn build_payload(analysis_date: &str) -> Value {
    json!({
        "contents": [
            { "role": "user", "parts": [{ "text": build_prompt(analysis_date) }] }
        ],
        "generationConfig": {
            "responseMimeType": "application/json",
            "responseSchema": response_schema()
        }
    })
}
