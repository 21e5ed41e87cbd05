//! Deterministic quiz game logic and data types shared across clients.
//!
//! `game-core` defines the canonical rules (actions, engine, session state)
//! and exposes pure APIs with no I/O of their own. All state mutation flows
//! through [`engine::GameEngine`], and supporting crates depend on the types
//! re-exported here.
pub mod action;
pub mod config;
pub mod engine;
pub mod env;
pub mod lobby;
pub mod state;

pub use action::{
    Action, ActionResult, ActionTransition, AnswerError, AnswerOutcome, DrawError,
    DrawQuestionAction, ResetAction, StartAction, StartError, SubmitAnswerAction,
};
pub use config::GameConfig;
pub use engine::{ExecuteError, GameEngine, TransitionPhase, TransitionPhaseError};
pub use env::{
    CatalogOracle, ConfigOracle, Env, OracleError, PcgRng, Question, QuizEnv, RngOracle,
    compute_seed,
};
pub use lobby::Lobby;
pub use state::{GameState, PALETTE, PlayerColor, PlayerId, PlayerState, SessionPhase, TurnState};
