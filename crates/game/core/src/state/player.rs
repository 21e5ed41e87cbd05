use std::fmt;

use crate::config::GameConfig;

/// Seat index identifying a player within a session.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PlayerId(pub u8);

impl PlayerId {
    /// Returns the seat index as a usize, for indexing the roster.
    #[inline]
    pub const fn index(self) -> usize {
        self.0 as usize
    }

    /// Seat of the player who acts first after `Start`.
    pub const FIRST: Self = Self(0);
}

impl fmt::Display for PlayerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Display color assigned to a seat, as an RGB triple.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PlayerColor {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

/// Fixed palette assigned to seats in order. Its length bounds the player
/// count.
pub const PALETTE: [PlayerColor; GameConfig::MAX_PLAYERS] = [
    PlayerColor {
        r: 0xFF,
        g: 0x6B,
        b: 0x6B,
    },
    PlayerColor {
        r: 0x4E,
        g: 0xCD,
        b: 0xC4,
    },
    PlayerColor {
        r: 0x45,
        g: 0xB7,
        b: 0xD1,
    },
    PlayerColor {
        r: 0x96,
        g: 0xCE,
        b: 0xB4,
    },
];

impl PlayerColor {
    /// Returns the palette entry for a seat.
    pub const fn for_seat(seat: usize) -> Self {
        PALETTE[seat % PALETTE.len()]
    }
}

/// Per-player game state: identity, display name, and score.
///
/// Created by the start action, mutated in place on each answer, discarded
/// on reset.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PlayerState {
    pub id: PlayerId,
    pub name: String,
    /// Count of correct answers. Monotonically non-decreasing; never clamped
    /// at the winning threshold.
    pub score: u32,
    pub color: PlayerColor,
}

impl PlayerState {
    pub fn new(id: PlayerId, name: impl Into<String>, color: PlayerColor) -> Self {
        Self {
            id,
            name: name.into(),
            score: 0,
            color,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn palette_entries_are_distinct() {
        for (i, a) in PALETTE.iter().enumerate() {
            for b in PALETTE.iter().skip(i + 1) {
                assert_ne!(a, b);
            }
        }
    }

    #[test]
    fn seats_map_to_palette_in_order() {
        for seat in 0..GameConfig::MAX_PLAYERS {
            assert_eq!(PlayerColor::for_seat(seat), PALETTE[seat]);
        }
    }

    #[test]
    fn new_player_starts_at_zero() {
        let player = PlayerState::new(PlayerId(2), "Chloé", PlayerColor::for_seat(2));
        assert_eq!(player.score, 0);
        assert_eq!(player.id.index(), 2);
    }
}
