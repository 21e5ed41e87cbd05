use crate::action::ActionTransition;
use crate::env::QuizEnv;
use crate::state::{GameState, PlayerId};

/// Submit action - compares the chosen option against the pending
/// question's correct answer, scores the current player, and either declares
/// a winner or advances the rotation.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SubmitAnswerAction {
    pub answer: String,
}

impl SubmitAnswerAction {
    pub fn new(answer: impl Into<String>) -> Self {
        Self {
            answer: answer.into(),
        }
    }
}

/// Outcome of an answer submission.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AnswerOutcome {
    /// Seat that answered.
    pub player: PlayerId,
    /// Whether the submitted text matched the correct answer exactly.
    pub correct: bool,
    /// The player's score after the submission.
    pub score: u32,
    /// Winner declared by this submission, if any.
    pub winner: Option<PlayerId>,
}

/// Errors raised while submitting an answer.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum AnswerError {
    #[error("session already has a winner")]
    SessionOver,

    #[error("no question is pending")]
    NoPendingQuestion,

    #[error("current seat {0} has no player")]
    CurrentPlayerMissing(PlayerId),

    #[error(transparent)]
    Oracle(#[from] crate::env::OracleError),
}

impl ActionTransition for SubmitAnswerAction {
    type Error = AnswerError;
    type Output = AnswerOutcome;

    fn pre_validate(&self, state: &GameState, _env: &QuizEnv<'_>) -> Result<(), Self::Error> {
        if state.winner.is_some() {
            return Err(AnswerError::SessionOver);
        }
        if state.pending.is_none() {
            return Err(AnswerError::NoPendingQuestion);
        }
        Ok(())
    }

    fn apply(&self, state: &mut GameState, env: &QuizEnv<'_>) -> Result<AnswerOutcome, Self::Error> {
        let Some(question) = state.pending.take() else {
            return Err(AnswerError::NoPendingQuestion);
        };

        let winning_score = env.winning_score()?;
        let seat = state.turn.current_player;
        let player = state
            .players
            .get_mut(seat.index())
            .ok_or(AnswerError::CurrentPlayerMissing(seat))?;

        let correct = question.is_correct(&self.answer);
        if correct {
            player.score += 1;
        }
        let score = player.score;

        // First seat at or past the threshold wins; the scan reads the score
        // incremented just above, so the check fires the same turn.
        let winner = state
            .players
            .iter()
            .find(|player| player.score >= winning_score)
            .cloned();

        match winner {
            Some(winner_state) => {
                let winner_id = winner_state.id;
                state.winner = Some(winner_state);
                Ok(AnswerOutcome {
                    player: seat,
                    correct,
                    score,
                    winner: Some(winner_id),
                })
            }
            None => {
                state.turn.advance(state.players.len());
                Ok(AnswerOutcome {
                    player: seat,
                    correct,
                    score,
                    winner: None,
                })
            }
        }
    }

    fn post_validate(&self, state: &GameState, _env: &QuizEnv<'_>) -> Result<(), Self::Error> {
        if state.pending.is_some() {
            return Err(AnswerError::NoPendingQuestion);
        }
        Ok(())
    }
}
