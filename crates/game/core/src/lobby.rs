//! Setup-time provisional configuration.
//!
//! The lobby holds the player count and name slots edited on the setup
//! screen. Nothing here is validated beyond the count bounds; blank names
//! are substituted with a generated default only when the game starts.

use crate::config::GameConfig;

/// Provisional player configuration, edited before `Start`.
///
/// The slot count doubles as the player count: resizing preserves existing
/// entries up to the new length, truncates beyond it, and blank-fills new
/// slots.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Lobby {
    names: Vec<String>,
}

impl Lobby {
    /// Creates a lobby configured for a single player with a blank name.
    pub fn new() -> Self {
        Self {
            names: vec![String::new()],
        }
    }

    /// Number of seats currently configured.
    pub fn player_count(&self) -> usize {
        self.names.len()
    }

    /// Resizes the name slots, clamping the count to `1..=MAX_PLAYERS`.
    pub fn set_player_count(&mut self, count: usize) {
        let count = count.clamp(1, GameConfig::MAX_PLAYERS);
        self.names.resize(count, String::new());
    }

    /// Provisional name for a seat; empty until the player types one.
    pub fn name(&self, seat: usize) -> &str {
        self.names.get(seat).map(String::as_str).unwrap_or("")
    }

    /// Replaces the provisional name for a seat. Out-of-range seats are
    /// ignored.
    pub fn set_name(&mut self, seat: usize, name: impl Into<String>) {
        if let Some(slot) = self.names.get_mut(seat) {
            *slot = name.into();
        }
    }

    /// Appends a character to a seat's provisional name.
    pub fn push_char(&mut self, seat: usize, ch: char) {
        if let Some(slot) = self.names.get_mut(seat) {
            slot.push(ch);
        }
    }

    /// Removes the last character of a seat's provisional name.
    pub fn pop_char(&mut self, seat: usize) {
        if let Some(slot) = self.names.get_mut(seat) {
            slot.pop();
        }
    }

    /// All provisional names in seat order.
    pub fn names(&self) -> &[String] {
        &self.names
    }

    /// Blanks every name slot while keeping the configured count, as reset
    /// requires.
    pub fn clear_names(&mut self) {
        for name in &mut self.names {
            name.clear();
        }
    }
}

impl Default for Lobby {
    fn default() -> Self {
        Self::new()
    }
}
