//! FX dashboard: terminal view over the analysis proxy.
//!
//! Requests the analysis once on start, then renders the sorted pair list.
//! Enter opens a pair, Esc goes back, q quits.

use std::io::{self, stdout};
use std::time::Duration;

use anyhow::Result;
use crossterm::event::{self, Event};
use crossterm::execute;
use crossterm::terminal::{
    disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen,
};
use ratatui::backend::CrosstermBackend;
use ratatui::Terminal;
use tokio::sync::mpsc;

use fx_sentiment::config::DashboardConfig;
use fx_sentiment::dashboard::{ui, AnalysisClient, DashboardApp, FetchError};
use fx_sentiment::logging::{init_file_logging, LoggingConfig};
use fx_sentiment::models::CurrencyAnalysis;
use fx_sentiment::prompt;

type FetchOutcome = Result<Vec<CurrencyAnalysis>, FetchError>;

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    let config = DashboardConfig::from_env();
    init_file_logging(LoggingConfig::from_env(), config.log_file.as_deref())
        .map_err(|e| anyhow::anyhow!("failed to initialize logging: {e}"))?;

    // Restore the terminal before the panic message is printed.
    let default_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |info| {
        let _ = disable_raw_mode();
        let _ = execute!(io::stderr(), LeaveAlternateScreen);
        default_hook(info);
    }));

    let analysis_date = prompt::analysis_date_label(chrono::Local::now().date_naive());
    let mut app = DashboardApp::new(analysis_date);

    let (tx, mut rx) = mpsc::unbounded_channel::<FetchOutcome>();
    if app.start_fetch() {
        let client = AnalysisClient::new(config.api_url.clone());
        let payload = prompt::build_payload(&app.analysis_date);
        tokio::spawn(async move {
            let outcome = client.fetch_analysis(&payload).await;
            let _ = tx.send(outcome);
        });
    }

    enable_raw_mode()?;
    let mut stdout = stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;
    terminal.clear()?;

    let result = run_app(&mut terminal, &mut app, &mut rx);

    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    if let Err(e) = &result {
        tracing::error!("Dashboard exited with error: {}", e);
    }
    result
}

fn run_app(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    app: &mut DashboardApp,
    rx: &mut mpsc::UnboundedReceiver<FetchOutcome>,
) -> Result<()> {
    loop {
        terminal.draw(|f| ui::draw(f, app))?;

        while let Ok(outcome) = rx.try_recv() {
            if let Err(e) = &outcome {
                tracing::error!("Failed to fetch currency analysis: {}", e);
            }
            app.apply_fetch_result(outcome);
        }

        // 50ms poll keeps the loop responsive while the fetch is pending
        if event::poll(Duration::from_millis(50))? {
            if let Event::Key(key) = event::read()? {
                app.handle_key(key);
            }
        }

        if !app.running {
            break;
        }
    }
    Ok(())
}
