use std::fmt;

use crate::action::{ActionTransition, ClimbAction, DigAction, MoveAction, PlaceLadderAction};

/// Identifies which stage of the transition pipeline produced an error.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum TransitionPhase {
    PreValidate,
    Apply,
    PostValidate,
}

impl fmt::Display for TransitionPhase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            TransitionPhase::PreValidate => "pre-validate",
            TransitionPhase::Apply => "apply",
            TransitionPhase::PostValidate => "post-validate",
        };
        f.write_str(name)
    }
}

/// Associates a transition phase with the underlying error.
#[derive(Clone, Copy, Debug, PartialEq, Eq, thiserror::Error)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[error("{phase} phase failed: {error}")]
pub struct TransitionPhaseError<E> {
    pub phase: TransitionPhase,
    pub error: E,
}

impl<E> TransitionPhaseError<E> {
    pub fn new(phase: TransitionPhase, error: E) -> Self {
        Self { phase, error }
    }
}

/// Errors surfaced while executing a command through the game engine.
///
/// Every reachable gameplay situation is absorbed as a no-op outcome, so one
/// of these indicates a violated internal invariant.
#[derive(Clone, Copy, Debug, PartialEq, Eq, thiserror::Error)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ExecuteError {
    #[error("move command failed: {0}")]
    Move(TransitionPhaseError<<MoveAction as ActionTransition>::Error>),

    #[error("climb command failed: {0}")]
    Climb(TransitionPhaseError<<ClimbAction as ActionTransition>::Error>),

    #[error("dig command failed: {0}")]
    Dig(TransitionPhaseError<<DigAction as ActionTransition>::Error>),

    #[error("ladder placement failed: {0}")]
    PlaceLadder(TransitionPhaseError<<PlaceLadderAction as ActionTransition>::Error>),
}
