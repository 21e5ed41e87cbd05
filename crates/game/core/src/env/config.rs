//! Configuration oracle.

use crate::config::GameConfig;

/// Read-only access to tunable game rules.
pub trait ConfigOracle: Send + Sync {
    /// Score a player must reach (or exceed) to win.
    fn winning_score(&self) -> u32;

    /// Upper bound on the number of players per session.
    fn max_players(&self) -> usize {
        GameConfig::MAX_PLAYERS
    }
}

impl ConfigOracle for GameConfig {
    fn winning_score(&self) -> u32 {
        self.winning_score
    }
}
