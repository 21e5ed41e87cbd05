use core::convert::Infallible;

use arrayvec::ArrayVec;

use crate::action::ActionTransition;
use crate::env::QuizEnv;
use crate::state::{GameState, TurnState};

/// Reset action - clears all active/victory state back to setup defaults.
///
/// The game seed is retained and the action nonce keeps counting, so a new
/// game on the same session draws a fresh question sequence.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ResetAction;

impl ActionTransition for ResetAction {
    type Error = Infallible;
    type Output = ();

    fn apply(&self, state: &mut GameState, _env: &QuizEnv<'_>) -> Result<(), Self::Error> {
        state.started = false;
        state.turn = TurnState::new();
        state.players = ArrayVec::new();
        state.pending = None;
        state.winner = None;
        Ok(())
    }
}
