pub mod app;
pub mod config;
pub mod dashboard;
pub mod errors;
pub mod external;
pub mod logging;
pub mod models;
pub mod prompt;
pub mod state;

mod routes;
