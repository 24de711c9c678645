//! Terminal dashboard: fetches the analysis once, then shows a sorted list
//! of pairs with a detail view per pair.

pub mod app;
pub mod client;
pub mod state;
pub mod theme;
pub mod ui;

pub use app::DashboardApp;
pub use client::{AnalysisClient, FetchError};
pub use state::FetchState;
