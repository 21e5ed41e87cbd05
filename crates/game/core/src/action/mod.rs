//! Session operations expressed as action types.
//!
//! Each operation is a concrete [`ActionTransition`] routed through the
//! engine's execute pipeline. The UI never mutates state directly; it
//! submits one of these.
mod answer;
mod draw;
mod reset;
mod start;
mod transition;

pub use answer::{AnswerError, AnswerOutcome, SubmitAnswerAction};
pub use draw::{DrawError, DrawQuestionAction};
pub use reset::ResetAction;
pub use start::{StartAction, StartError};
pub use transition::ActionTransition;

use crate::env::Question;
use crate::lobby::Lobby;

/// Every operation the engine can execute.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Action {
    /// Materialize players and enter the active phase.
    Start(StartAction),
    /// Draw a random question for the current player.
    DrawQuestion(DrawQuestionAction),
    /// Answer the pending question.
    SubmitAnswer(SubmitAnswerAction),
    /// Return to setup, discarding the roster.
    Reset(ResetAction),
}

impl Action {
    /// Start from the lobby's current seats.
    pub fn start_from_lobby(lobby: &Lobby) -> Self {
        Self::Start(StartAction::from_lobby(lobby))
    }

    pub fn start(names: Vec<String>) -> Self {
        Self::Start(StartAction::new(names))
    }

    pub fn draw_question() -> Self {
        Self::DrawQuestion(DrawQuestionAction)
    }

    pub fn submit_answer(answer: impl Into<String>) -> Self {
        Self::SubmitAnswer(SubmitAnswerAction::new(answer))
    }

    pub fn reset() -> Self {
        Self::Reset(ResetAction)
    }
}

/// Action-specific payload returned from a successful execute.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ActionResult {
    /// The roster was materialized.
    Started,
    /// The drawn question, also stored as pending.
    QuestionDrawn(Question),
    /// Scoring outcome of an answer submission.
    Answered(AnswerOutcome),
    /// The session returned to setup.
    ResetDone,
}
