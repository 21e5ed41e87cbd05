//! Action execution pipeline for the quiz session.
//!
//! The [`GameEngine`] is the authoritative reducer for [`GameState`]. Every
//! operation, from starting a game to submitting an answer, flows through
//! the same execute() pipeline so that validation and the RNG nonce stay
//! consistent no matter which frontend drives the session.

mod errors;
mod transition;

pub use errors::{ExecuteError, TransitionPhase, TransitionPhaseError};

use crate::action::{Action, ActionResult};
use crate::env::QuizEnv;
use crate::state::{GameState, PlayerId, PlayerState, SessionPhase};

/// Game engine that executes actions against a session state.
///
/// All state mutations flow through the three-phase action pipeline:
/// pre_validate → apply → post_validate
pub struct GameEngine<'a> {
    state: &'a mut GameState,
}

impl<'a> GameEngine<'a> {
    /// Creates a new game engine with the given state.
    pub fn new(state: &'a mut GameState) -> Self {
        Self { state }
    }

    /// Executes an action by routing it through its transition pipeline.
    ///
    /// Increments the RNG nonce after a successful execution so consecutive
    /// draws sample fresh seeds. Returns the action-specific result.
    pub fn execute(
        &mut self,
        env: QuizEnv<'_>,
        action: &Action,
    ) -> Result<ActionResult, ExecuteError> {
        let result = transition::execute_transition(action, self.state, &env)?;

        // Increment nonce after successful execution
        self.state.nonce += 1;

        Ok(result)
    }

    /// Current phase of the session.
    pub fn phase(&self) -> SessionPhase {
        self.state.phase()
    }

    /// Seat whose turn it is.
    pub fn current_player(&self) -> PlayerId {
        self.state.turn.current_player
    }

    /// The declared winner, if the session has one.
    pub fn winner(&self) -> Option<&PlayerState> {
        self.state.winner.as_ref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::action::{AnswerError, DrawError, StartError};
    use crate::config::GameConfig;
    use crate::env::{CatalogOracle, Env, PcgRng, Question, RngOracle};
    use crate::state::PALETTE;

    #[derive(Debug)]
    struct StubCatalog {
        questions: Vec<Question>,
    }

    impl StubCatalog {
        fn single() -> Self {
            Self {
                questions: vec![Question::new(
                    "Combien de côtés possède un hexagone ?",
                    vec!["4".into(), "5".into(), "6".into(), "8".into()],
                    "6",
                )],
            }
        }

        fn many() -> Self {
            Self {
                questions: vec![
                    Question::new("Que vaut 7 × 8 ?", vec!["54".into(), "56".into()], "56"),
                    Question::new(
                        "Un angle droit mesure...",
                        vec!["45°".into(), "90°".into()],
                        "90°",
                    ),
                    Question::new(
                        "Combien de faces possède un cube ?",
                        vec!["6".into(), "8".into()],
                        "6",
                    ),
                ],
            }
        }
    }

    impl CatalogOracle for StubCatalog {
        fn question_count(&self) -> usize {
            self.questions.len()
        }

        fn question(&self, index: usize) -> Option<Question> {
            self.questions.get(index).cloned()
        }
    }

    /// Rng stub returning a constant, so the single-question catalog is
    /// always drawn at index 0.
    #[derive(Debug)]
    struct FixedRng(u32);

    impl RngOracle for FixedRng {
        fn next_u32(&self, _seed: u64) -> u32 {
            self.0
        }
    }

    fn execute(
        state: &mut GameState,
        catalog: &StubCatalog,
        config: &GameConfig,
        action: Action,
    ) -> Result<ActionResult, ExecuteError> {
        let rng = FixedRng(0);
        let env = Env::with_all(catalog, config, &rng).into_quiz_env();
        GameEngine::new(state).execute(env, &action)
    }

    fn blank_names(n: usize) -> Vec<String> {
        vec![String::new(); n]
    }

    fn started_state(catalog: &StubCatalog, config: &GameConfig, names: Vec<String>) -> GameState {
        let mut state = GameState::new();
        execute(&mut state, catalog, config, Action::start(names)).expect("start");
        state
    }

    #[test]
    fn start_creates_players_with_palette_colors() {
        let catalog = StubCatalog::single();
        let config = GameConfig::default();

        for n in 1..=GameConfig::MAX_PLAYERS {
            let state = started_state(&catalog, &config, blank_names(n));

            assert_eq!(state.phase(), SessionPhase::Active);
            assert_eq!(state.players.len(), n);
            assert_eq!(state.turn.current_player, PlayerId::FIRST);

            for (seat, player) in state.players.iter().enumerate() {
                assert_eq!(player.score, 0);
                assert_eq!(player.color, PALETTE[seat]);
                assert_eq!(player.name, format!("Joueur {}", seat + 1));
            }
        }
    }

    #[test]
    fn start_keeps_typed_names_and_defaults_blanks() {
        let catalog = StubCatalog::single();
        let config = GameConfig::default();
        let state = started_state(&catalog, &config, vec!["Alice".into(), "  ".into()]);

        assert_eq!(state.players[0].name, "Alice");
        assert_eq!(state.players[1].name, "Joueur 2");
    }

    #[test]
    fn start_twice_is_rejected() {
        let catalog = StubCatalog::single();
        let config = GameConfig::default();
        let mut state = started_state(&catalog, &config, blank_names(2));

        let err = execute(&mut state, &catalog, &config, Action::start(blank_names(2)))
            .expect_err("second start");
        assert!(matches!(
            err,
            ExecuteError::Start(TransitionPhaseError {
                phase: TransitionPhase::PreValidate,
                error: StartError::AlreadyStarted,
            })
        ));
    }

    #[test]
    fn start_rejects_out_of_range_counts() {
        let catalog = StubCatalog::single();
        let config = GameConfig::default();

        for n in [0, GameConfig::MAX_PLAYERS + 1] {
            let mut state = GameState::new();
            let err = execute(&mut state, &catalog, &config, Action::start(blank_names(n)))
                .expect_err("count out of range");
            assert!(matches!(
                err,
                ExecuteError::Start(TransitionPhaseError {
                    error: StartError::PlayerCountOutOfRange(_),
                    ..
                })
            ));
            assert_eq!(state.phase(), SessionPhase::Setup);
        }
    }

    #[test]
    fn draw_stores_the_question_as_pending() {
        let catalog = StubCatalog::single();
        let config = GameConfig::default();
        let mut state = started_state(&catalog, &config, blank_names(1));

        let result = execute(&mut state, &catalog, &config, Action::draw_question()).expect("draw");
        let ActionResult::QuestionDrawn(question) = result else {
            panic!("expected a drawn question");
        };

        assert!(state.awaiting_answer());
        assert_eq!(state.pending.as_ref(), Some(&question));

        // Drawing with a question already pending is rejected.
        let err = execute(&mut state, &catalog, &config, Action::draw_question())
            .expect_err("double draw");
        assert!(matches!(
            err,
            ExecuteError::DrawQuestion(TransitionPhaseError {
                error: DrawError::QuestionPending,
                ..
            })
        ));
    }

    #[test]
    fn draw_before_start_is_rejected() {
        let catalog = StubCatalog::single();
        let config = GameConfig::default();
        let mut state = GameState::new();

        let err = execute(&mut state, &catalog, &config, Action::draw_question())
            .expect_err("draw in setup");
        assert!(matches!(
            err,
            ExecuteError::DrawQuestion(TransitionPhaseError {
                error: DrawError::NotStarted,
                ..
            })
        ));
    }

    #[test]
    fn correct_answer_scores_exactly_one_point() {
        let catalog = StubCatalog::single();
        let config = GameConfig::default();
        let mut state = started_state(&catalog, &config, blank_names(2));

        execute(&mut state, &catalog, &config, Action::draw_question()).expect("draw");
        let result = execute(&mut state, &catalog, &config, Action::submit_answer("6"))
            .expect("submit");

        let ActionResult::Answered(outcome) = result else {
            panic!("expected an answer outcome");
        };
        assert!(outcome.correct);
        assert_eq!(outcome.score, 1);
        assert_eq!(outcome.player, PlayerId(0));
        assert_eq!(state.players[0].score, 1);
        assert!(!state.awaiting_answer());
    }

    #[test]
    fn wrong_answer_leaves_the_score_unchanged() {
        let catalog = StubCatalog::single();
        let config = GameConfig::default();
        let mut state = started_state(&catalog, &config, blank_names(2));

        execute(&mut state, &catalog, &config, Action::draw_question()).expect("draw");
        let result = execute(&mut state, &catalog, &config, Action::submit_answer("5"))
            .expect("submit");

        let ActionResult::Answered(outcome) = result else {
            panic!("expected an answer outcome");
        };
        assert!(!outcome.correct);
        assert_eq!(outcome.score, 0);
        assert_eq!(state.players[0].score, 0);
        // The turn still advances.
        assert_eq!(state.turn.current_player, PlayerId(1));
    }

    #[test]
    fn submit_without_pending_question_is_rejected() {
        let catalog = StubCatalog::single();
        let config = GameConfig::default();
        let mut state = started_state(&catalog, &config, blank_names(2));

        let err = execute(&mut state, &catalog, &config, Action::submit_answer("6"))
            .expect_err("no pending question");
        assert!(matches!(
            err,
            ExecuteError::SubmitAnswer(TransitionPhaseError {
                error: AnswerError::NoPendingQuestion,
                ..
            })
        ));
    }

    #[test]
    fn turn_order_is_round_robin() {
        let catalog = StubCatalog::single();
        let config = GameConfig::default();
        let mut state = started_state(&catalog, &config, blank_names(3));

        let mut seats = Vec::new();
        for _ in 0..5 {
            seats.push(state.turn.current_player.0);
            execute(&mut state, &catalog, &config, Action::draw_question()).expect("draw");
            execute(&mut state, &catalog, &config, Action::submit_answer("wrong"))
                .expect("submit");
        }

        assert_eq!(seats, vec![0, 1, 2, 0, 1]);
        assert_eq!(state.turn.round, 2);
    }

    #[test]
    fn winner_is_the_lowest_seat_at_threshold() {
        let catalog = StubCatalog::single();
        let config = GameConfig::with_winning_score(3);
        let mut state = started_state(&catalog, &config, blank_names(2));

        // Both seats end the submission at or past the threshold; the scan
        // picks the lowest seat.
        state.players[0].score = 2;
        state.players[1].score = 3;

        execute(&mut state, &catalog, &config, Action::draw_question()).expect("draw");
        let result = execute(&mut state, &catalog, &config, Action::submit_answer("6"))
            .expect("submit");

        let ActionResult::Answered(outcome) = result else {
            panic!("expected an answer outcome");
        };
        assert_eq!(outcome.winner, Some(PlayerId(0)));
        assert_eq!(state.phase(), SessionPhase::Victory);
        assert_eq!(state.winner.as_ref().map(|w| w.id), Some(PlayerId(0)));
    }

    #[test]
    fn victory_is_terminal_until_reset() {
        let catalog = StubCatalog::single();
        let config = GameConfig::with_winning_score(1);
        let mut state = started_state(&catalog, &config, blank_names(2));

        execute(&mut state, &catalog, &config, Action::draw_question()).expect("draw");
        execute(&mut state, &catalog, &config, Action::submit_answer("6")).expect("submit");
        assert_eq!(state.phase(), SessionPhase::Victory);

        let scores: Vec<u32> = state.players.iter().map(|p| p.score).collect();

        let draw_err = execute(&mut state, &catalog, &config, Action::draw_question())
            .expect_err("draw after victory");
        assert!(matches!(
            draw_err,
            ExecuteError::DrawQuestion(TransitionPhaseError {
                error: DrawError::SessionOver,
                ..
            })
        ));

        let submit_err = execute(&mut state, &catalog, &config, Action::submit_answer("6"))
            .expect_err("submit after victory");
        assert!(matches!(
            submit_err,
            ExecuteError::SubmitAnswer(TransitionPhaseError {
                error: AnswerError::SessionOver,
                ..
            })
        ));

        let after: Vec<u32> = state.players.iter().map(|p| p.score).collect();
        assert_eq!(scores, after);
    }

    #[test]
    fn alice_wins_on_her_tenth_correct_answer() {
        let catalog = StubCatalog::single();
        let config = GameConfig::default();
        let mut state = started_state(&catalog, &config, vec!["Alice".into(), String::new()]);

        // Alice answers correctly on every one of her turns; Joueur 2 never
        // does. The game ends during Alice's tenth turn.
        while state.phase() == SessionPhase::Active {
            let alice_turn = state.turn.current_player == PlayerId(0);
            execute(&mut state, &catalog, &config, Action::draw_question()).expect("draw");
            let answer = if alice_turn { "6" } else { "5" };
            execute(&mut state, &catalog, &config, Action::submit_answer(answer))
                .expect("submit");
        }

        let winner = state.winner.as_ref().expect("winner");
        assert_eq!(winner.name, "Alice");
        assert_eq!(winner.score, 10);
        assert_eq!(state.players[1].name, "Joueur 2");
        assert_eq!(state.players[1].score, 0);
    }

    #[test]
    fn reset_returns_to_setup_from_active_and_victory() {
        let catalog = StubCatalog::single();
        let config = GameConfig::with_winning_score(1);

        // From Active, with a question pending.
        let mut state = started_state(&catalog, &config, blank_names(2));
        execute(&mut state, &catalog, &config, Action::draw_question()).expect("draw");
        execute(&mut state, &catalog, &config, Action::reset()).expect("reset");
        assert_eq!(state.phase(), SessionPhase::Setup);
        assert!(state.players.is_empty());
        assert!(state.pending.is_none());

        // From Victory.
        let mut state = started_state(&catalog, &config, blank_names(2));
        execute(&mut state, &catalog, &config, Action::draw_question()).expect("draw");
        execute(&mut state, &catalog, &config, Action::submit_answer("6")).expect("submit");
        assert_eq!(state.phase(), SessionPhase::Victory);

        execute(&mut state, &catalog, &config, Action::reset()).expect("reset");
        assert_eq!(state.phase(), SessionPhase::Setup);
        assert!(state.winner.is_none());
        assert!(state.players.is_empty());
    }

    #[test]
    fn nonce_advances_with_every_action() {
        let catalog = StubCatalog::single();
        let config = GameConfig::default();
        let mut state = started_state(&catalog, &config, blank_names(1));
        assert_eq!(state.nonce, 1);

        execute(&mut state, &catalog, &config, Action::draw_question()).expect("draw");
        execute(&mut state, &catalog, &config, Action::submit_answer("6")).expect("submit");
        assert_eq!(state.nonce, 3);

        // Reset keeps counting so the next game draws fresh seeds.
        execute(&mut state, &catalog, &config, Action::reset()).expect("reset");
        assert_eq!(state.nonce, 4);
    }

    #[test]
    fn seeded_sessions_replay_the_same_draws() {
        let catalog = StubCatalog::many();
        let config = GameConfig::default();
        let rng = PcgRng;

        let mut draws = Vec::new();
        for _ in 0..2 {
            let mut state = GameState::with_seed(0xCAFE);
            let env = Env::with_all(&catalog, &config, &rng).into_quiz_env();

            GameEngine::new(&mut state)
                .execute(env, &Action::start(blank_names(1)))
                .expect("start");

            let mut sequence = Vec::new();
            for _ in 0..8 {
                GameEngine::new(&mut state)
                    .execute(env, &Action::draw_question())
                    .expect("draw");
                sequence.push(state.pending.clone().expect("pending").text);
                GameEngine::new(&mut state)
                    .execute(env, &Action::submit_answer("wrong"))
                    .expect("submit");
            }
            draws.push(sequence);
        }

        assert_eq!(draws[0], draws[1]);
    }
}
