use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use crate::dashboard::client::FetchError;
use crate::dashboard::state::FetchState;
use crate::models::analysis::CurrencyAnalysis;

/// UI state for the dashboard: the fetch lifecycle plus list navigation.
#[derive(Debug)]
pub struct DashboardApp {
    pub analysis_date: String,
    pub fetch: FetchState,
    /// Highlighted row in the list view.
    pub cursor: usize,
    /// Row shown in the detail view, as an index into the sorted rows.
    pub selected: Option<usize>,
    /// First visible line of the detail view.
    pub detail_scroll: u16,
    pub running: bool,
}

const PAGE_LINES: u16 = 10;

impl DashboardApp {
    pub fn new(analysis_date: impl Into<String>) -> Self {
        Self {
            analysis_date: analysis_date.into(),
            fetch: FetchState::Idle,
            cursor: 0,
            selected: None,
            detail_scroll: 0,
            running: true,
        }
    }

    /// Returns true when the caller should issue the (single) fetch.
    pub fn start_fetch(&mut self) -> bool {
        self.fetch.begin()
    }

    pub fn apply_fetch_result(&mut self, outcome: Result<Vec<CurrencyAnalysis>, FetchError>) {
        let outcome = outcome.map_err(|e| format!("Failed to load analysis: {}", e));
        if self.fetch.resolve(outcome) {
            self.cursor = 0;
            self.selected = None;
            self.detail_scroll = 0;
        }
    }

    pub fn rows(&self) -> &[CurrencyAnalysis] {
        self.fetch.rows()
    }

    pub fn selected_row(&self) -> Option<&CurrencyAnalysis> {
        self.selected.and_then(|idx| self.rows().get(idx))
    }

    pub fn move_down(&mut self) {
        if self.cursor + 1 < self.rows().len() {
            self.cursor += 1;
        }
    }

    pub fn move_up(&mut self) {
        self.cursor = self.cursor.saturating_sub(1);
    }

    /// Switch to the detail view for the highlighted row.
    pub fn open_selected(&mut self) {
        if self.cursor < self.rows().len() {
            self.selected = Some(self.cursor);
            self.detail_scroll = 0;
        }
    }

    /// Back to the list. The fetched rows are kept.
    pub fn back(&mut self) {
        self.selected = None;
        self.detail_scroll = 0;
    }

    pub fn scroll_down(&mut self, lines: u16) {
        self.detail_scroll = self.detail_scroll.saturating_add(lines);
    }

    pub fn scroll_up(&mut self, lines: u16) {
        self.detail_scroll = self.detail_scroll.saturating_sub(lines);
    }

    pub fn quit(&mut self) {
        self.running = false;
    }

    pub fn handle_key(&mut self, key: KeyEvent) {
        if key.kind == KeyEventKind::Release {
            return;
        }
        if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
            self.quit();
            return;
        }

        if self.selected.is_some() {
            match key.code {
                KeyCode::Esc | KeyCode::Backspace | KeyCode::Char('h') | KeyCode::Left => self.back(),
                KeyCode::Char('j') | KeyCode::Down => self.scroll_down(1),
                KeyCode::Char('k') | KeyCode::Up => self.scroll_up(1),
                KeyCode::PageDown | KeyCode::Char(' ') => self.scroll_down(PAGE_LINES),
                KeyCode::PageUp => self.scroll_up(PAGE_LINES),
                KeyCode::Home | KeyCode::Char('g') => self.detail_scroll = 0,
                KeyCode::Char('q') => self.quit(),
                _ => {}
            }
            return;
        }

        match key.code {
            KeyCode::Char('j') | KeyCode::Down => self.move_down(),
            KeyCode::Char('k') | KeyCode::Up => self.move_up(),
            KeyCode::Enter | KeyCode::Char('l') | KeyCode::Right => self.open_selected(),
            KeyCode::Char('q') | KeyCode::Esc => self.quit(),
            _ => {}
        }
    }
}
