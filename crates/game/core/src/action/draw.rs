use crate::action::ActionTransition;
use crate::env::{Question, QuizEnv, compute_seed};
use crate::state::GameState;

/// Seed context distinguishing the question draw from any future roll kinds.
const DRAW_CONTEXT: u32 = 0;

/// Draw action - selects one question uniformly at random (with
/// replacement) from the catalog and stores it as pending.
///
/// Repeats across turns and across a full game are possible and expected.
/// No side effects on scores.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct DrawQuestionAction;

/// Errors raised while drawing a question.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum DrawError {
    #[error("session not started")]
    NotStarted,

    #[error("session already has a winner")]
    SessionOver,

    #[error("a question is already pending")]
    QuestionPending,

    #[error("catalog has no questions")]
    EmptyCatalog,

    #[error("catalog has no question at index {0}")]
    MissingQuestion(usize),

    #[error(transparent)]
    Oracle(#[from] crate::env::OracleError),
}

impl ActionTransition for DrawQuestionAction {
    type Error = DrawError;
    type Output = Question;

    fn pre_validate(&self, state: &GameState, _env: &QuizEnv<'_>) -> Result<(), Self::Error> {
        if !state.started {
            return Err(DrawError::NotStarted);
        }
        if state.winner.is_some() {
            return Err(DrawError::SessionOver);
        }
        if state.pending.is_some() {
            return Err(DrawError::QuestionPending);
        }
        Ok(())
    }

    fn apply(&self, state: &mut GameState, env: &QuizEnv<'_>) -> Result<Question, Self::Error> {
        let catalog = env.catalog()?;

        let count = catalog.question_count();
        if count == 0 {
            return Err(DrawError::EmptyCatalog);
        }

        let seed = compute_seed(state.game_seed, state.nonce, DRAW_CONTEXT);
        let index = env.rng()?.index(seed, count);
        let question = catalog
            .question(index)
            .ok_or(DrawError::MissingQuestion(index))?;

        state.pending = Some(question.clone());
        Ok(question)
    }

    fn post_validate(&self, state: &GameState, _env: &QuizEnv<'_>) -> Result<(), Self::Error> {
        if state.pending.is_none() {
            return Err(DrawError::EmptyCatalog);
        }
        Ok(())
    }
}
