//! Active-turn screen: score cards, question draw, and answer selection.

use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};

use game_core::{GameConfig, GameState, Question};

use crate::theme;

/// What the app should do after a turn-screen key press.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TurnOutcome {
    /// Nothing to execute.
    Continue,
    /// Draw a question for the current player.
    Draw,
    /// Submit the chosen option text.
    Submit(String),
    /// Abandon the game and return to setup.
    Reset,
    /// Leave the application.
    Quit,
}

/// Local edit state of the turn screen: which option is highlighted.
#[derive(Clone, Debug, Default)]
pub struct TurnScreen {
    selected: usize,
}

impl TurnScreen {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn selected(&self) -> usize {
        self.selected
    }

    pub fn reset_selection(&mut self) {
        self.selected = 0;
    }

    /// Applies a key press given the currently pending question, if any.
    pub fn handle_key(&mut self, key: KeyEvent, pending: Option<&Question>) -> TurnOutcome {
        match pending {
            None => match key.code {
                KeyCode::Enter | KeyCode::Char(' ') => TurnOutcome::Draw,
                KeyCode::Char('r') => TurnOutcome::Reset,
                KeyCode::Char('q') | KeyCode::Esc => TurnOutcome::Quit,
                _ => TurnOutcome::Continue,
            },
            Some(question) => match key.code {
                KeyCode::Up => {
                    self.selected = self.selected.saturating_sub(1);
                    TurnOutcome::Continue
                }
                KeyCode::Down => {
                    if self.selected + 1 < question.options.len() {
                        self.selected += 1;
                    }
                    TurnOutcome::Continue
                }
                KeyCode::Enter => {
                    let answer = question
                        .options
                        .get(self.selected)
                        .cloned()
                        .unwrap_or_default();
                    self.selected = 0;
                    TurnOutcome::Submit(answer)
                }
                KeyCode::Esc => TurnOutcome::Quit,
                _ => TurnOutcome::Continue,
            },
        }
    }

    /// Render the turn screen UI.
    pub fn render(&self, frame: &mut Frame, state: &GameState, config: &GameConfig) {
        let area = frame.area();

        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3), // Turn header
                Constraint::Length(5), // Score cards
                Constraint::Min(0),    // Draw prompt or question
                Constraint::Length(3), // Footer
            ])
            .split(area);

        render_header(frame, chunks[0], state);
        render_players(frame, chunks[1], state, config);
        match &state.pending {
            None => render_draw_prompt(frame, chunks[2]),
            Some(question) => self.render_question(frame, chunks[2], question),
        }
        render_footer(frame, chunks[3], state.pending.is_some());
    }

    fn render_question(&self, frame: &mut Frame, area: Rect, question: &Question) {
        let mut lines = vec![
            Line::from(vec![Span::styled(
                question.text.clone(),
                Style::default()
                    .fg(Color::White)
                    .add_modifier(Modifier::BOLD),
            )]),
            Line::from(""),
        ];

        for (index, option) in question.options.iter().enumerate() {
            let is_selected = index == self.selected;
            lines.push(Line::from(vec![
                Span::styled(
                    if is_selected { "► " } else { "  " },
                    Style::default().fg(Color::Yellow),
                ),
                Span::styled(
                    option.clone(),
                    if is_selected {
                        Style::default()
                            .fg(Color::Cyan)
                            .add_modifier(Modifier::BOLD)
                    } else {
                        Style::default().fg(Color::White)
                    },
                ),
            ]));
        }

        let question_block = Paragraph::new(lines).block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::Cyan))
                .title(" Question ")
                .title_alignment(Alignment::Center),
        );

        frame.render_widget(question_block, area);
    }
}

fn render_header(frame: &mut Frame, area: Rect, state: &GameState) {
    let mut spans = vec![Span::styled("Tour de ", Style::default().fg(Color::White))];

    if let Some(player) = state.current_player() {
        spans.push(Span::styled(
            player.name.clone(),
            theme::emphasize_current(theme::player_style(player.color)),
        ));
    }

    spans.push(Span::styled(
        format!("  —  Manche {}", state.turn.round),
        Style::default().fg(Color::DarkGray),
    ));

    let header = Paragraph::new(Line::from(spans))
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::Cyan)),
        );

    frame.render_widget(header, area);
}

fn render_players(frame: &mut Frame, area: Rect, state: &GameState, config: &GameConfig) {
    let constraints =
        vec![Constraint::Ratio(1, state.players.len().max(1) as u32); state.players.len().max(1)];
    let cards = Layout::default()
        .direction(Direction::Horizontal)
        .constraints(constraints)
        .split(area);

    for (card, player) in cards.iter().zip(state.players.iter()) {
        let is_current = player.id == state.turn.current_player;

        let mut name_style = theme::player_style(player.color);
        if is_current {
            name_style = theme::emphasize_current(name_style);
        }

        let lines = vec![
            Line::from(vec![Span::styled(player.name.clone(), name_style)]),
            Line::from(vec![
                Span::styled("Score : ", Style::default().fg(Color::White)),
                Span::styled(
                    format!("{} / {}", player.score, config.winning_score),
                    theme::style_score(player.score, config.winning_score),
                ),
            ]),
        ];

        let border_style = if is_current {
            theme::emphasize_current(theme::player_style(player.color))
        } else {
            Style::default().fg(Color::DarkGray)
        };

        let widget = Paragraph::new(lines).block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(border_style),
        );

        frame.render_widget(widget, *card);
    }
}

fn render_draw_prompt(frame: &mut Frame, area: Rect) {
    let prompt = Paragraph::new(vec![
        Line::from(""),
        Line::from(vec![Span::styled(
            "Appuyez sur Entrée pour répondre à une question",
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )]),
    ])
    .alignment(Alignment::Center)
    .block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::DarkGray)),
    );

    frame.render_widget(prompt, area);
}

fn render_footer(frame: &mut Frame, area: Rect, question_pending: bool) {
    let hints = if question_pending {
        vec![
            Span::styled("↑/↓", theme::hint_key()),
            Span::styled(" Choisir  ", theme::hint_text()),
            Span::styled("Entrée", theme::hint_key()),
            Span::styled(" Valider  ", theme::hint_text()),
            Span::styled("Échap", theme::hint_key()),
            Span::styled(" Quitter", theme::hint_text()),
        ]
    } else {
        vec![
            Span::styled("Entrée", theme::hint_key()),
            Span::styled(" Question  ", theme::hint_text()),
            Span::styled("r", theme::hint_key()),
            Span::styled(" Recommencer  ", theme::hint_text()),
            Span::styled("q/Échap", theme::hint_key()),
            Span::styled(" Quitter", theme::hint_text()),
        ]
    };

    let footer = Paragraph::new(vec![Line::from(""), Line::from(hints)])
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::NONE));

    frame.render_widget(footer, area);
}
