use crate::models::analysis::{sort_by_sentiment, CurrencyAnalysis};

/// Lifecycle of the single analysis fetch.
///
/// Only `Idle -> Loading -> (Loaded | Failed)` is reachable; every other
/// transition is refused and leaves the state untouched.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum FetchState {
    #[default]
    Idle,
    Loading,
    /// Rows already sorted by sentiment rank.
    Loaded(Vec<CurrencyAnalysis>),
    Failed(String),
}

impl FetchState {
    /// Enter `Loading`. Returns false (and changes nothing) unless idle, so a
    /// second fetch can never be started.
    pub fn begin(&mut self) -> bool {
        match self {
            FetchState::Idle => {
                *self = FetchState::Loading;
                true
            }
            _ => false,
        }
    }

    /// Settle an in-flight fetch. Ignored unless `Loading`.
    pub fn resolve(&mut self, outcome: Result<Vec<CurrencyAnalysis>, String>) -> bool {
        if !matches!(self, FetchState::Loading) {
            return false;
        }
        *self = match outcome {
            Ok(mut rows) => {
                sort_by_sentiment(&mut rows);
                FetchState::Loaded(rows)
            }
            Err(message) => FetchState::Failed(message),
        };
        true
    }

    pub fn is_loading(&self) -> bool {
        matches!(self, FetchState::Loading)
    }

    pub fn rows(&self) -> &[CurrencyAnalysis] {
        match self {
            FetchState::Loaded(rows) => rows,
            _ => &[],
        }
    }
}
