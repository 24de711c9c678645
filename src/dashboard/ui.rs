//! Layout: header, list or detail body, footer.

use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Cell, Paragraph, Row, Table, TableState, Wrap};
use ratatui::Frame;

use crate::dashboard::app::DashboardApp;
use crate::dashboard::state::FetchState;
use crate::dashboard::theme;
use crate::models::analysis::CurrencyAnalysis;

const TITLE: &str = "Currency Sentiment & Fundamental Analysis";
const SUBTITLE: &str = "A snapshot of major currency pairs' sentiment and fundamental bias, color-coded for quick interpretation.";
const DETAIL_DISCLAIMER: &str = "Analysis provided by Gemini AI. While comprehensive, always cross-reference with other sources for trading decisions.";

/// Draw the entire UI.
pub fn draw(f: &mut Frame, app: &DashboardApp) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(5),
            Constraint::Min(5),
            Constraint::Length(3),
        ])
        .split(f.area());

    draw_header(f, chunks[0], app);

    match app.selected_row() {
        Some(row) => draw_detail(f, chunks[1], row, app.detail_scroll),
        None => draw_list(f, chunks[1], app),
    }

    draw_footer(f, chunks[2], app);
}

fn draw_header(f: &mut Frame, area: Rect, app: &DashboardApp) {
    let lines = vec![
        Line::from(Span::styled(TITLE, theme::title())),
        Line::from(Span::styled(SUBTITLE, theme::muted())),
        Line::from(""),
        Line::from(vec![
            Span::raw("Analysis Date: "),
            Span::styled(app.analysis_date.clone(), theme::heading()),
        ]),
    ];
    f.render_widget(Paragraph::new(lines).wrap(Wrap { trim: true }), area);
}

fn draw_list(f: &mut Frame, area: Rect, app: &DashboardApp) {
    let block = Block::default().borders(Borders::ALL);

    let message = match &app.fetch {
        FetchState::Idle | FetchState::Loading => {
            Some(Span::styled("Loading analysis...", theme::loading()))
        }
        FetchState::Failed(msg) => Some(Span::styled(
            format!("Error loading data: {}", msg),
            theme::error(),
        )),
        FetchState::Loaded(rows) if rows.is_empty() => Some(Span::styled(
            "No currency pairs analysis available.",
            theme::muted(),
        )),
        FetchState::Loaded(_) => None,
    };

    if let Some(span) = message {
        let para = Paragraph::new(Line::from(span))
            .block(block)
            .wrap(Wrap { trim: true });
        f.render_widget(para, area);
        return;
    }

    let header = Row::new(vec!["Currency Pair", "Bias", "Description"])
        .style(theme::title())
        .bottom_margin(1);

    let rows: Vec<Row> = app
        .rows()
        .iter()
        .map(|row| {
            Row::new(vec![
                Cell::from(row.pair.clone()),
                Cell::from(Span::styled(
                    format!(" {} ", row.sentiment.label()),
                    theme::badge(&row.sentiment),
                )),
                Cell::from(Span::styled(row.description.clone(), theme::muted())),
            ])
        })
        .collect();

    let table = Table::new(
        rows,
        [
            Constraint::Percentage(20),
            Constraint::Percentage(20),
            Constraint::Percentage(60),
        ],
    )
    .header(header)
    .block(block)
    .row_highlight_style(Style::default().add_modifier(Modifier::BOLD))
    .highlight_symbol("> ");

    let mut state = TableState::default().with_selected(Some(app.cursor));
    f.render_stateful_widget(table, area, &mut state);
}

fn draw_detail(f: &mut Frame, area: Rect, row: &CurrencyAnalysis, scroll: u16) {
    let mut lines = vec![
        Line::from(Span::styled(
            format!("{} - Detailed Analysis", row.pair),
            theme::title(),
        )),
        Line::from(""),
        Line::from(Span::styled(
            format!(" {} ", row.sentiment.label()),
            theme::badge(&row.sentiment),
        )),
        Line::from(""),
        Line::from(Span::styled(row.description.clone(), theme::heading())),
        Line::from(""),
        Line::from(row.details.clone()),
    ];

    push_section(&mut lines, "Key Fundamental Drivers:", &row.fundamental_drivers);
    push_section(&mut lines, "Relevant Sentiment Indicators:", &row.sentiment_indicators);

    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled(
        DETAIL_DISCLAIMER,
        theme::muted().add_modifier(Modifier::ITALIC),
    )));

    let block = Block::default()
        .borders(Borders::ALL)
        .title(" [Esc] Back to List ");
    let para = Paragraph::new(lines)
        .block(block)
        .wrap(Wrap { trim: false })
        .scroll((scroll, 0));
    f.render_widget(para, area);
}

/// Bulleted list under a heading; skipped entirely when empty.
fn push_section<'a>(lines: &mut Vec<Line<'a>>, heading: &'a str, items: &[String]) {
    if items.is_empty() {
        return;
    }
    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled(heading, theme::heading())));
    for item in items {
        lines.push(Line::from(format!("  • {}", item)));
    }
}

fn draw_footer(f: &mut Frame, area: Rect, app: &DashboardApp) {
    let hints = if app.selected.is_some() {
        "[j/k] scroll  [PgUp/PgDn] page  [Esc] back  [q] quit"
    } else {
        "[j/k] move  [Enter] details  [q] quit"
    };
    let lines = vec![
        Line::from(Span::styled(hints, theme::heading())),
        Line::from(Span::styled("Data is for illustrative purposes only.", theme::muted())),
        Line::from(Span::styled(
            "Analysis provided by Gemini AI. Market conditions can change rapidly.",
            theme::muted(),
        )),
    ];
    f.render_widget(Paragraph::new(lines), area);
}
