//! Glue code tying the session engine, oracles, and terminal UI together.

use std::io::{self, Stdout};
use std::time::{SystemTime, UNIX_EPOCH};

use anyhow::{Context, Result};
use crossterm::event::{self, Event, KeyEvent, KeyEventKind};
use crossterm::{
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Frame, Terminal, backend::CrosstermBackend};

use game_content::{CatalogLoader, ConfigLoader, StaticCatalog};
use game_core::{
    Action, ActionResult, CatalogOracle, Env, GameConfig, GameEngine, GameState, Lobby, PcgRng,
    SessionPhase,
};

use crate::config::ClientConfig;
use crate::screens::{SetupOutcome, SetupScreen, TurnOutcome, TurnScreen, VictoryOutcome, victory};

pub type Tui = Terminal<CrosstermBackend<Stdout>>;

/// Synchronous terminal application: one session, one screen at a time.
pub struct App {
    catalog: StaticCatalog,
    game_config: GameConfig,
    rng: PcgRng,
    lobby: Lobby,
    state: GameState,
    setup: SetupScreen,
    turn: TurnScreen,
}

impl App {
    /// Builds the application from its configuration: catalog, rules, and a
    /// seeded session.
    pub fn new(config: &ClientConfig) -> Result<Self> {
        let catalog = match &config.questions_file {
            Some(path) => CatalogLoader::load(path)
                .with_context(|| format!("loading catalog {}", path.display()))?,
            None => StaticCatalog::embedded()?,
        };

        let game_config = match &config.config_file {
            Some(path) => ConfigLoader::load(path)
                .with_context(|| format!("loading game config {}", path.display()))?,
            None => GameConfig::default(),
        };

        let seed = config.seed.unwrap_or_else(entropy_seed);
        tracing::info!(
            questions = catalog.question_count(),
            winning_score = game_config.winning_score,
            seed,
            "client ready"
        );

        Ok(Self {
            catalog,
            game_config,
            rng: PcgRng,
            lobby: Lobby::new(),
            state: GameState::with_seed(seed),
            setup: SetupScreen::new(),
            turn: TurnScreen::new(),
        })
    }

    /// Runs the UI until the player quits, restoring the terminal on exit.
    pub fn run(mut self) -> Result<()> {
        let mut terminal = init_terminal()?;
        let result = self.event_loop(&mut terminal);
        restore_terminal()?;
        result
    }

    fn event_loop(&mut self, terminal: &mut Tui) -> Result<()> {
        loop {
            terminal.draw(|frame| self.render(frame))?;

            if let Event::Key(key) = event::read()? {
                if key.kind != KeyEventKind::Press {
                    continue;
                }
                if !self.handle_key(key)? {
                    return Ok(());
                }
            }
        }
    }

    fn render(&self, frame: &mut Frame) {
        match self.state.phase() {
            SessionPhase::Setup => self.setup.render(frame, &self.lobby, &self.game_config),
            SessionPhase::Active => self.turn.render(frame, &self.state, &self.game_config),
            SessionPhase::Victory => {
                if let Some(winner) = &self.state.winner {
                    victory::render(frame, winner);
                }
            }
        }
    }

    /// Dispatches a key press to the active screen. Returns false to quit.
    fn handle_key(&mut self, key: KeyEvent) -> Result<bool> {
        match self.state.phase() {
            SessionPhase::Setup => match self.setup.handle_key(key, &mut self.lobby) {
                SetupOutcome::Continue => {}
                SetupOutcome::Start => self.start_game()?,
                SetupOutcome::Quit => return Ok(false),
            },
            SessionPhase::Active => match self.turn.handle_key(key, self.state.pending.as_ref()) {
                TurnOutcome::Continue => {}
                TurnOutcome::Draw => self.draw_question()?,
                TurnOutcome::Submit(answer) => self.submit_answer(answer)?,
                TurnOutcome::Reset => self.reset()?,
                TurnOutcome::Quit => return Ok(false),
            },
            SessionPhase::Victory => match victory::handle_key(key) {
                VictoryOutcome::Continue => {}
                VictoryOutcome::NewGame => self.reset()?,
                VictoryOutcome::Quit => return Ok(false),
            },
        }
        Ok(true)
    }

    fn execute(&mut self, action: Action) -> Result<ActionResult> {
        let env = Env::with_all(&self.catalog, &self.game_config, &self.rng).into_quiz_env();
        let result = GameEngine::new(&mut self.state).execute(env, &action)?;
        Ok(result)
    }

    fn start_game(&mut self) -> Result<()> {
        self.execute(Action::start_from_lobby(&self.lobby))?;
        self.turn.reset_selection();
        tracing::info!(players = self.state.players.len(), "partie démarrée");
        Ok(())
    }

    fn draw_question(&mut self) -> Result<()> {
        if let ActionResult::QuestionDrawn(question) = self.execute(Action::draw_question())? {
            tracing::info!(question = %question.text, "question tirée");
        }
        self.turn.reset_selection();
        Ok(())
    }

    fn submit_answer(&mut self, answer: String) -> Result<()> {
        if let ActionResult::Answered(outcome) = self.execute(Action::submit_answer(answer))? {
            tracing::info!(
                player = %outcome.player,
                correct = outcome.correct,
                score = outcome.score,
                "réponse enregistrée"
            );
            if let Some(winner) = outcome.winner {
                tracing::info!(player = %winner, "partie gagnée");
            }
        }
        Ok(())
    }

    fn reset(&mut self) -> Result<()> {
        self.execute(Action::reset())?;
        self.lobby.clear_names();
        self.setup = SetupScreen::new();
        self.turn.reset_selection();
        tracing::info!("retour à la configuration");
        Ok(())
    }
}

/// Seed derived from the clock when no fixed seed is configured.
fn entropy_seed() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|elapsed| elapsed.as_nanos() as u64)
        .unwrap_or(0)
}

fn init_terminal() -> Result<Tui> {
    enable_raw_mode()?;

    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;

    let backend = CrosstermBackend::new(stdout);
    let terminal = Terminal::new(backend)?;

    Ok(terminal)
}

fn restore_terminal() -> Result<()> {
    execute!(io::stdout(), LeaveAlternateScreen)?;
    disable_raw_mode()?;
    Ok(())
}
