//! Setup screen for configuring the players of a new game.

use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};

use game_core::{GameConfig, Lobby, PlayerColor};

use crate::theme;

/// What the app should do after a setup key press.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SetupOutcome {
    /// Keep editing.
    Continue,
    /// Start the game with the lobby's current seats.
    Start,
    /// Leave the application.
    Quit,
}

/// Row focused on the setup screen.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SetupFocus {
    /// The player-count selector.
    PlayerCount,
    /// The name input of a seat.
    Name(usize),
}

/// Local edit state of the setup screen.
#[derive(Clone, Debug)]
pub struct SetupScreen {
    focus: SetupFocus,
}

impl SetupScreen {
    pub fn new() -> Self {
        Self {
            focus: SetupFocus::PlayerCount,
        }
    }

    pub fn focus(&self) -> SetupFocus {
        self.focus
    }

    /// Applies a key press to the lobby and reports what to do next.
    ///
    /// Printable characters edit the focused name; on the count row the
    /// digits 1-4 jump straight to that player count and `q` quits.
    pub fn handle_key(&mut self, key: KeyEvent, lobby: &mut Lobby) -> SetupOutcome {
        match key.code {
            KeyCode::Esc => return SetupOutcome::Quit,
            KeyCode::Enter => return SetupOutcome::Start,
            KeyCode::Up => self.focus_up(),
            KeyCode::Down => self.focus_down(lobby.player_count()),
            KeyCode::Left if self.focus == SetupFocus::PlayerCount => {
                lobby.set_player_count(lobby.player_count().saturating_sub(1));
            }
            KeyCode::Right if self.focus == SetupFocus::PlayerCount => {
                lobby.set_player_count(lobby.player_count() + 1);
            }
            KeyCode::Backspace => {
                if let SetupFocus::Name(seat) = self.focus {
                    lobby.pop_char(seat);
                }
            }
            KeyCode::Char(ch) => match self.focus {
                SetupFocus::PlayerCount => match ch {
                    '1'..='4' => lobby.set_player_count(ch as usize - '0' as usize),
                    'q' => return SetupOutcome::Quit,
                    _ => {}
                },
                SetupFocus::Name(seat) => lobby.push_char(seat, ch),
            },
            _ => {}
        }

        // Shrinking the count can orphan the focused name row.
        if let SetupFocus::Name(seat) = self.focus
            && seat >= lobby.player_count()
        {
            self.focus = SetupFocus::Name(lobby.player_count() - 1);
        }

        SetupOutcome::Continue
    }

    fn focus_up(&mut self) {
        self.focus = match self.focus {
            SetupFocus::PlayerCount | SetupFocus::Name(0) => SetupFocus::PlayerCount,
            SetupFocus::Name(seat) => SetupFocus::Name(seat - 1),
        };
    }

    fn focus_down(&mut self, count: usize) {
        self.focus = match self.focus {
            SetupFocus::PlayerCount if count > 0 => SetupFocus::Name(0),
            SetupFocus::Name(seat) if seat + 1 < count => SetupFocus::Name(seat + 1),
            other => other,
        };
    }

    /// Render the setup screen UI.
    pub fn render(&self, frame: &mut Frame, lobby: &Lobby, config: &GameConfig) {
        let area = frame.area();

        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(5), // Title banner
                Constraint::Min(0),    // Configuration form
                Constraint::Length(3), // Footer
            ])
            .split(area);

        render_title(frame, chunks[0]);
        self.render_form(frame, chunks[1], lobby, config);
        render_footer(frame, chunks[2]);
    }

    fn render_form(
        &self,
        frame: &mut Frame,
        area: ratatui::layout::Rect,
        lobby: &Lobby,
        config: &GameConfig,
    ) {
        let mut lines = vec![Line::from("")];

        let count_focused = self.focus == SetupFocus::PlayerCount;
        lines.push(Line::from(vec![
            Span::styled(
                if count_focused { "► " } else { "  " },
                Style::default().fg(Color::Yellow),
            ),
            Span::styled("Nombre de joueurs : ", Style::default().fg(Color::White)),
            Span::styled(
                format!("◄ {} ►", lobby.player_count()),
                if count_focused {
                    Style::default()
                        .fg(Color::Cyan)
                        .add_modifier(Modifier::BOLD)
                } else {
                    Style::default().fg(Color::Cyan)
                },
            ),
        ]));
        lines.push(Line::from(""));

        for seat in 0..lobby.player_count() {
            let focused = self.focus == SetupFocus::Name(seat);
            let name = lobby.name(seat);

            let name_span = if name.is_empty() && !focused {
                Span::styled(
                    format!("Nom du joueur {}", seat + 1),
                    Style::default().fg(Color::DarkGray),
                )
            } else {
                Span::styled(
                    format!("{}{}", name, if focused { "_" } else { "" }),
                    if focused {
                        Style::default()
                            .fg(Color::White)
                            .add_modifier(Modifier::BOLD)
                    } else {
                        Style::default().fg(Color::White)
                    },
                )
            };

            lines.push(Line::from(vec![
                Span::styled(
                    if focused { "► " } else { "  " },
                    Style::default().fg(Color::Yellow),
                ),
                Span::styled("● ", theme::player_style(PlayerColor::for_seat(seat))),
                name_span,
            ]));
        }

        lines.push(Line::from(""));
        lines.push(Line::from(vec![Span::styled(
            format!(
                "Objectif : atteindre {} bonnes réponses pour gagner !",
                config.winning_score
            ),
            Style::default().fg(Color::Gray),
        )]));

        let form = Paragraph::new(lines).block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::Cyan))
                .title(" Configuration de la partie ")
                .title_alignment(Alignment::Center),
        );

        frame.render_widget(form, area);
    }
}

impl Default for SetupScreen {
    fn default() -> Self {
        Self::new()
    }
}

fn render_title(frame: &mut Frame, area: ratatui::layout::Rect) {
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

fn render_footer(frame: &mut Frame, area: ratatui::layout::Rect) {
    let footer = Paragraph::new(vec![
        Line::from(""),
        Line::from(vec![
            Span::styled("↑/↓", theme::hint_key()),
            Span::styled(" Naviguer  ", theme::hint_text()),
            Span::styled("◄/►", theme::hint_key()),
            Span::styled(" Joueurs  ", theme::hint_text()),
            Span::styled("Entrée", theme::hint_key()),
            Span::styled(" Commencer  ", theme::hint_text()),
            Span::styled("Échap", theme::hint_key()),
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
    fn focus_moves_between_count_and_names() {
        let mut screen = SetupScreen::new();
        let mut lobby = Lobby::new();
        lobby.set_player_count(2);

        assert_eq!(screen.focus(), SetupFocus::PlayerCount);
        screen.handle_key(press(KeyCode::Down), &mut lobby);
        assert_eq!(screen.focus(), SetupFocus::Name(0));
        screen.handle_key(press(KeyCode::Down), &mut lobby);
        assert_eq!(screen.focus(), SetupFocus::Name(1));

        // Bottom row is sticky.
        screen.handle_key(press(KeyCode::Down), &mut lobby);
        assert_eq!(screen.focus(), SetupFocus::Name(1));

        screen.handle_key(press(KeyCode::Up), &mut lobby);
        screen.handle_key(press(KeyCode::Up), &mut lobby);
        assert_eq!(screen.focus(), SetupFocus::PlayerCount);
    }

    #[test]
    fn digits_jump_to_a_player_count() {
        let mut screen = SetupScreen::new();
        let mut lobby = Lobby::new();

        screen.handle_key(press(KeyCode::Char('3')), &mut lobby);
        assert_eq!(lobby.player_count(), 3);
    }

    #[test]
    fn arrows_step_the_player_count() {
        let mut screen = SetupScreen::new();
        let mut lobby = Lobby::new();

        screen.handle_key(press(KeyCode::Right), &mut lobby);
        screen.handle_key(press(KeyCode::Right), &mut lobby);
        assert_eq!(lobby.player_count(), 3);
        screen.handle_key(press(KeyCode::Left), &mut lobby);
        assert_eq!(lobby.player_count(), 2);
    }

    #[test]
    fn typing_edits_the_focused_name() {
        let mut screen = SetupScreen::new();
        let mut lobby = Lobby::new();

        screen.handle_key(press(KeyCode::Down), &mut lobby);
        for ch in "Ali".chars() {
            screen.handle_key(press(KeyCode::Char(ch)), &mut lobby);
        }
        screen.handle_key(press(KeyCode::Backspace), &mut lobby);
        assert_eq!(lobby.name(0), "Al");
    }

    #[test]
    fn shrinking_the_count_refocuses_a_valid_row() {
        let mut screen = SetupScreen::new();
        let mut lobby = Lobby::new();
        lobby.set_player_count(4);

        for _ in 0..4 {
            screen.handle_key(press(KeyCode::Down), &mut lobby);
        }
        assert_eq!(screen.focus(), SetupFocus::Name(3));

        // The lobby can shrink underneath the screen; the next key press
        // must land the focus back on an existing row.
        lobby.set_player_count(2);
        screen.handle_key(press(KeyCode::Down), &mut lobby);
        assert_eq!(screen.focus(), SetupFocus::Name(1));
    }

    #[test]
    fn enter_starts_and_escape_quits() {
        let mut screen = SetupScreen::new();
        let mut lobby = Lobby::new();

        assert_eq!(
            screen.handle_key(press(KeyCode::Enter), &mut lobby),
            SetupOutcome::Start
        );
        assert_eq!(
            screen.handle_key(press(KeyCode::Esc), &mut lobby),
            SetupOutcome::Quit
        );
        assert_eq!(
            screen.handle_key(press(KeyCode::Char('q')), &mut lobby),
            SetupOutcome::Quit
        );
    }
}
