//! Victory screen announcing the winner.

use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};

use game_core::PlayerState;

use crate::theme;

/// What the app should do after a victory-screen key press.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum VictoryOutcome {
    Continue,
    /// Return to setup for a new game.
    NewGame,
    /// Leave the application.
    Quit,
}

pub fn handle_key(key: KeyEvent) -> VictoryOutcome {
    match key.code {
        KeyCode::Char('n') | KeyCode::Enter => VictoryOutcome::NewGame,
        KeyCode::Char('q') | KeyCode::Esc => VictoryOutcome::Quit,
        _ => VictoryOutcome::Continue,
    }
}

/// Render the victory screen UI.
pub fn render(frame: &mut Frame, winner: &PlayerState) {
    let area = frame.area();

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(5), // Title banner
            Constraint::Min(0),    // Winner announcement
            Constraint::Length(3), // Footer
        ])
        .split(area);

    render_title(frame, chunks[0]);
    render_winner(frame, chunks[1], winner);
    render_footer(frame, chunks[2]);
}

fn render_title(frame: &mut Frame, area: Rect) {
    let title = Paragraph::new(vec![
        Line::from(""),
        Line::from(vec![Span::styled(
            "GéoMath Challenge",
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )]),
        Line::from(vec![Span::styled(
            "Apprenez la géométrie en jouant !",
            Style::default().fg(Color::Gray),
        )]),
    ])
    .alignment(Alignment::Center)
    .block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Cyan)),
    );

    frame.render_widget(title, area);
}

fn render_winner(frame: &mut Frame, area: Rect, winner: &PlayerState) {
    let announcement = Paragraph::new(vec![
        Line::from(""),
        Line::from(vec![Span::styled(
            "★ ★ ★",
            Style::default().fg(Color::Yellow),
        )]),
        Line::from(""),
        Line::from(vec![
            Span::styled("Félicitations ", Style::default().fg(Color::White)),
            Span::styled(
                winner.name.clone(),
                theme::emphasize_current(theme::player_style(winner.color)),
            ),
            Span::styled(" !", Style::default().fg(Color::White)),
        ]),
        Line::from(""),
        Line::from(vec![Span::styled(
            format!("Vous avez gagné avec {} bonnes réponses !", winner.score),
            Style::default().fg(Color::Gray),
        )]),
    ])
    .alignment(Alignment::Center)
    .block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Yellow))
            .title(" Victoire ")
            .title_alignment(Alignment::Center),
    );

    frame.render_widget(announcement, area);
}

fn render_footer(frame: &mut Frame, area: Rect) {
    let footer = Paragraph::new(vec![
        Line::from(""),
        Line::from(vec![
            Span::styled("n/Entrée", theme::hint_key()),
            Span::styled(" Nouvelle partie  ", theme::hint_text()),
            Span::styled("q/Échap", theme::hint_key()),
            Span::styled(" Quitter", theme::hint_text()),
        ]),
    ])
    .alignment(Alignment::Center)
    .block(Block::default().borders(Borders::NONE));

    frame.render_widget(footer, area);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::KeyModifiers;

    fn press(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[test]
    fn new_game_and_quit_keys() {
        assert_eq!(handle_key(press(KeyCode::Char('n'))), VictoryOutcome::NewGame);
        assert_eq!(handle_key(press(KeyCode::Enter)), VictoryOutcome::NewGame);
        assert_eq!(handle_key(press(KeyCode::Char('q'))), VictoryOutcome::Quit);
        assert_eq!(handle_key(press(KeyCode::Esc)), VictoryOutcome::Quit);
        assert_eq!(handle_key(press(KeyCode::Char('x'))), VictoryOutcome::Continue);
    }
}
