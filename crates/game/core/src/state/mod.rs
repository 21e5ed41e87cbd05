//! Authoritative session state representation.
//!
//! This module owns the data structures that describe players, turn
//! bookkeeping, and the pending question. Client layers clone or query this
//! state but mutate it exclusively through the engine.
mod phase;
mod player;
mod turn;

use arrayvec::ArrayVec;

use crate::config::GameConfig;
use crate::env::Question;
pub use phase::SessionPhase;
pub use player::{PALETTE, PlayerColor, PlayerId, PlayerState};
pub use turn::TurnState;

/// Canonical snapshot of the deterministic session state.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GameState {
    /// RNG seed for deterministic question draws.
    ///
    /// Set once at session creation and never modified. Combined with
    /// `nonce` to derive a unique seed for each random event.
    pub game_seed: u64,

    /// Action sequence number, incremented after every successful execute.
    ///
    /// Survives resets so that consecutive games on one seed draw different
    /// question sequences.
    pub nonce: u64,

    /// True once `Start` has materialized the player roster.
    pub started: bool,

    /// Turn bookkeeping for the active rotation.
    pub turn: TurnState,

    /// Players seated for the current game, in seat order.
    pub players: ArrayVec<PlayerState, { GameConfig::MAX_PLAYERS }>,

    /// Question currently awaiting an answer, if any.
    pub pending: Option<Question>,

    /// Copy of the winning player once a score reaches the threshold.
    pub winner: Option<PlayerState>,
}

impl GameState {
    /// Creates a fresh pre-game state with the default seed.
    pub fn new() -> Self {
        Self::with_seed(0)
    }

    /// Creates a fresh pre-game state with a specific game seed.
    pub fn with_seed(game_seed: u64) -> Self {
        Self {
            game_seed,
            nonce: 0,
            started: false,
            turn: TurnState::new(),
            players: ArrayVec::new(),
            pending: None,
            winner: None,
        }
    }

    /// Derives the current phase from the `started` and `winner` flags.
    ///
    /// Exactly one phase holds at any time; the three UI screens map onto
    /// these one-to-one.
    pub fn phase(&self) -> SessionPhase {
        if !self.started {
            SessionPhase::Setup
        } else if self.winner.is_some() {
            SessionPhase::Victory
        } else {
            SessionPhase::Active
        }
    }

    /// Returns the player whose turn it is, if the roster is populated.
    pub fn current_player(&self) -> Option<&PlayerState> {
        self.players.get(self.turn.current_player.index())
    }

    /// True while a drawn question awaits an answer.
    pub fn awaiting_answer(&self) -> bool {
        self.pending.is_some()
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fresh_state_is_in_setup() {
        let state = GameState::new();
        assert_eq!(state.phase(), SessionPhase::Setup);
        assert!(state.players.is_empty());
        assert!(!state.awaiting_answer());
    }

    #[test]
    fn phase_follows_started_and_winner_flags() {
        let mut state = GameState::new();
        state.started = true;
        assert_eq!(state.phase(), SessionPhase::Active);

        state.winner = Some(PlayerState::new(
            PlayerId(0),
            "Alice",
            PlayerColor::for_seat(0),
        ));
        assert_eq!(state.phase(), SessionPhase::Victory);

        state.started = false;
        state.winner = None;
        assert_eq!(state.phase(), SessionPhase::Setup);
    }
}
