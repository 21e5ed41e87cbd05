use arrayvec::ArrayVec;

use crate::action::ActionTransition;
use crate::config::GameConfig;
use crate::env::QuizEnv;
use crate::lobby::Lobby;
use crate::state::{GameState, PlayerColor, PlayerId, PlayerState, TurnState};

/// Start action - materializes the player roster from provisional names and
/// transitions the session to its active phase.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct StartAction {
    names: Vec<String>,
}

/// Errors raised while starting a session.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum StartError {
    #[error("session already started")]
    AlreadyStarted,

    #[error("player count {0} outside 1..={max}", max = GameConfig::MAX_PLAYERS)]
    PlayerCountOutOfRange(usize),

    #[error(transparent)]
    Oracle(#[from] crate::env::OracleError),
}

impl StartAction {
    /// Builds a start action from raw provisional names, one per seat.
    pub fn new(names: Vec<String>) -> Self {
        Self { names }
    }

    /// Snapshot the lobby's current seats into a start action.
    pub fn from_lobby(lobby: &Lobby) -> Self {
        Self::new(lobby.names().to_vec())
    }

    /// Resolved display name for a seat: the provisional name, or the
    /// generated default when blank.
    fn display_name(&self, seat: usize) -> String {
        let name = self.names[seat].trim();
        if name.is_empty() {
            format!("Joueur {}", seat + 1)
        } else {
            name.to_string()
        }
    }
}

impl ActionTransition for StartAction {
    type Error = StartError;
    type Output = ();

    fn pre_validate(&self, state: &GameState, env: &QuizEnv<'_>) -> Result<(), Self::Error> {
        if state.started {
            return Err(StartError::AlreadyStarted);
        }

        let count = self.names.len();
        if count == 0 || count > env.config()?.max_players() {
            return Err(StartError::PlayerCountOutOfRange(count));
        }

        Ok(())
    }

    fn apply(&self, state: &mut GameState, _env: &QuizEnv<'_>) -> Result<(), Self::Error> {
        let mut players = ArrayVec::new();
        for seat in 0..self.names.len() {
            let player = PlayerState::new(
                PlayerId(seat as u8),
                self.display_name(seat),
                PlayerColor::for_seat(seat),
            );
            players
                .try_push(player)
                .map_err(|_| StartError::PlayerCountOutOfRange(self.names.len()))?;
        }

        state.players = players;
        state.turn = TurnState::new();
        state.pending = None;
        state.winner = None;
        state.started = true;

        Ok(())
    }

    fn post_validate(&self, state: &GameState, _env: &QuizEnv<'_>) -> Result<(), Self::Error> {
        if state.players.len() != self.names.len() {
            return Err(StartError::PlayerCountOutOfRange(state.players.len()));
        }
        Ok(())
    }
}
