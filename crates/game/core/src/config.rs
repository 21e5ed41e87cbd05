/// Game configuration constants and tunable parameters.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GameConfig {
    /// Score a player must reach (or exceed) to win the game.
    /// The winner check reads the freshly incremented score, so in practice
    /// a winning score equals this value exactly.
    pub winning_score: u32,
}

impl GameConfig {
    // ===== compile-time constants used as type parameters =====
    /// Maximum number of players per session. Bounded by the color palette.
    pub const MAX_PLAYERS: usize = 4;

    // ===== runtime-tunable defaults =====
    pub const DEFAULT_WINNING_SCORE: u32 = 10;

    pub fn new() -> Self {
        Self {
            winning_score: Self::DEFAULT_WINNING_SCORE,
        }
    }

    pub fn with_winning_score(winning_score: u32) -> Self {
        Self { winning_score }
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        Self::new()
    }
}
