//! Color tokens for the dashboard.
//!
//! Sentiment colors run from strong green (Very Bullish) through yellow
//! (Neutral) to strong red (Very Bearish); anything unrecognized is gray.

use ratatui::style::{Color, Modifier, Style};

use crate::models::analysis::Sentiment;

pub const VERY_BULLISH: Color = Color::Rgb(22, 163, 74);
pub const BULLISH: Color = Color::Rgb(132, 204, 22);
pub const NEUTRAL: Color = Color::Rgb(250, 204, 21);
pub const BEARISH: Color = Color::Rgb(249, 115, 22);
pub const VERY_BEARISH: Color = Color::Rgb(220, 38, 38);
pub const UNKNOWN: Color = Color::Rgb(156, 163, 175);

pub const ACCENT: Color = Color::Rgb(29, 78, 216);
pub const ERROR: Color = Color::Rgb(220, 38, 38);
pub const MUTED: Color = Color::Rgb(107, 114, 128);

pub fn sentiment_color(sentiment: &Sentiment) -> Color {
    match sentiment {
        Sentiment::VeryBullish => VERY_BULLISH,
        Sentiment::Bullish => BULLISH,
        Sentiment::Neutral => NEUTRAL,
        Sentiment::Bearish => BEARISH,
        Sentiment::VeryBearish => VERY_BEARISH,
        Sentiment::Unknown(_) => UNKNOWN,
    }
}

/// Pill style for a sentiment label.
pub fn badge(sentiment: &Sentiment) -> Style {
    let fg = match sentiment {
        // dark text stays readable on the light backgrounds
        Sentiment::Bullish | Sentiment::Neutral => Color::Black,
        _ => Color::White,
    };
    Style::default()
        .fg(fg)
        .bg(sentiment_color(sentiment))
        .add_modifier(Modifier::BOLD)
}

pub fn title() -> Style {
    Style::default().add_modifier(Modifier::BOLD)
}

pub fn heading() -> Style {
    Style::default().fg(ACCENT).add_modifier(Modifier::BOLD)
}

pub fn muted() -> Style {
    Style::default().fg(MUTED)
}

pub fn error() -> Style {
    Style::default().fg(ERROR)
}

pub fn loading() -> Style {
    Style::default().fg(ACCENT)
}
