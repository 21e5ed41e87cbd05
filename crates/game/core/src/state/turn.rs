use super::PlayerId;

/// Turn state managing the round-robin rotation.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TurnState {
    /// Seat whose turn it is.
    pub current_player: PlayerId,

    /// Completed rotations through the roster. Starts at 1 for display.
    pub round: u32,
}

impl TurnState {
    /// Creates a fresh turn state pointing at the first seat.
    pub fn new() -> Self {
        Self {
            current_player: PlayerId::FIRST,
            round: 1,
        }
    }

    /// Advances to the next seat, bumping the round counter on wrap-around.
    ///
    /// `player_count` must be non-zero; the rotation is
    /// `(current + 1) % player_count`.
    pub fn advance(&mut self, player_count: usize) {
        let next = (self.current_player.index() + 1) % player_count;
        if next == 0 {
            self.round += 1;
        }
        self.current_player = PlayerId(next as u8);
    }
}

impl Default for TurnState {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn advance_cycles_round_robin() {
        let mut turn = TurnState::new();
        let seen: Vec<u8> = (0..6)
            .map(|_| {
                let seat = turn.current_player.0;
                turn.advance(3);
                seat
            })
            .collect();
        assert_eq!(seen, vec![0, 1, 2, 0, 1, 2]);
        assert_eq!(turn.round, 3);
    }

    #[test]
    fn single_player_wraps_every_turn() {
        let mut turn = TurnState::new();
        turn.advance(1);
        assert_eq!(turn.current_player, PlayerId(0));
        assert_eq!(turn.round, 2);
    }
}
