use crate::env::QuizEnv;
use crate::state::GameState;

/// Defines how a concrete action variant mutates session state.
///
/// Implementors can override the validation hooks to surface pre- and
/// post-conditions that must hold around the state mutation. All hooks
/// receive read-only access to the environment oracles via [`QuizEnv`] and
/// must stay side-effect free outside the state itself.
pub trait ActionTransition {
    type Error;

    /// Action-specific payload returned from a successful `apply`.
    type Output;

    /// Validates pre-conditions using the state **before** mutation.
    fn pre_validate(&self, _state: &GameState, _env: &QuizEnv<'_>) -> Result<(), Self::Error> {
        Ok(())
    }

    /// Applies the action by mutating the session state directly.
    /// Implementations should assume that `pre_validate` has already run
    /// successfully.
    fn apply(&self, state: &mut GameState, env: &QuizEnv<'_>) -> Result<Self::Output, Self::Error>;

    /// Validates post-conditions using the state **after** mutation.
    fn post_validate(&self, _state: &GameState, _env: &QuizEnv<'_>) -> Result<(), Self::Error> {
        Ok(())
    }
}
