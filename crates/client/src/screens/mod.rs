//! One screen per session phase, each owning its local edit state.
pub mod setup;
pub mod turn;
pub mod victory;

pub use setup::{SetupOutcome, SetupScreen};
pub use turn::{TurnOutcome, TurnScreen};
pub use victory::VictoryOutcome;
