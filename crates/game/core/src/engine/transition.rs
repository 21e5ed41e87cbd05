use crate::action::{Action, ActionResult, ActionTransition};
use crate::env::QuizEnv;
use crate::state::GameState;

use super::errors::{ExecuteError, TransitionPhase, TransitionPhaseError};

/// Routes an action through its transition pipeline.
pub(super) fn execute_transition(
    action: &Action,
    state: &mut GameState,
    env: &QuizEnv<'_>,
) -> Result<ActionResult, ExecuteError> {
    match action {
        Action::Start(start) => drive_transition(start, state, env)
            .map(|()| ActionResult::Started)
            .map_err(ExecuteError::Start),

        Action::DrawQuestion(draw) => drive_transition(draw, state, env)
            .map(ActionResult::QuestionDrawn)
            .map_err(ExecuteError::DrawQuestion),

        Action::SubmitAnswer(submit) => drive_transition(submit, state, env)
            .map(ActionResult::Answered)
            .map_err(ExecuteError::SubmitAnswer),

        // Reset is infallible; the empty match discharges the error arm.
        Action::Reset(reset) => drive_transition(reset, state, env)
            .map(|()| ActionResult::ResetDone)
            .map_err(|phase_error| match phase_error.error {}),
    }
}

#[inline]
fn drive_transition<T>(
    transition: &T,
    state: &mut GameState,
    env: &QuizEnv<'_>,
) -> Result<T::Output, TransitionPhaseError<T::Error>>
where
    T: ActionTransition,
{
    transition
        .pre_validate(&*state, env)
        .map_err(|error| TransitionPhaseError::new(TransitionPhase::PreValidate, error))?;

    let output = transition
        .apply(state, env)
        .map_err(|error| TransitionPhaseError::new(TransitionPhase::Apply, error))?;

    transition
        .post_validate(&*state, env)
        .map_err(|error| TransitionPhaseError::new(TransitionPhase::PostValidate, error))?;

    Ok(output)
}
