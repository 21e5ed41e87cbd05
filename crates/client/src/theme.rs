//! Styling helpers shared by the screens.

use game_core::PlayerColor;
use ratatui::style::{Color, Modifier, Style};

/// Maps a palette entry to a terminal color.
pub fn player_color(color: PlayerColor) -> Color {
    Color::Rgb(color.r, color.g, color.b)
}

pub fn player_style(color: PlayerColor) -> Style {
    Style::default().fg(player_color(color))
}

/// Emphasis for the player whose turn it is.
pub fn emphasize_current(base_style: Style) -> Style {
    base_style.add_modifier(Modifier::BOLD)
}

/// Colors a score by its progress toward the winning threshold.
pub fn style_score(score: u32, winning_score: u32) -> Style {
    if winning_score == 0 {
        return Style::default().fg(Color::Gray);
    }

    let percent = (score * 100) / winning_score;
    let color = match percent {
        75.. => Color::Green,
        50..=74 => Color::Yellow,
        25..=49 => Color::LightBlue,
        _ => Color::Gray,
    };

    Style::default().fg(color)
}

/// Key name in a footer hint.
pub fn hint_key() -> Style {
    Style::default().fg(Color::Yellow)
}

/// Explanatory text in a footer hint.
pub fn hint_text() -> Style {
    Style::default().fg(Color::Gray)
}
