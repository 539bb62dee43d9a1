//! Command execution pipeline.
//!
//! The [`GameEngine`] is the authoritative reducer for [`GameState`]: every
//! command is routed through the `pre_validate → apply → post_validate`
//! transition pipeline, and no other component mutates cross-cell
//! relationships.
mod errors;

pub use errors::{ExecuteError, TransitionPhase, TransitionPhaseError};

use crate::action::{Action, ActionOutcome, ActionTransition};
use crate::config::GameConfig;
use crate::state::GameState;

type TransitionResult<O, E> = Result<O, TransitionPhaseError<E>>;

/// Game engine that routes player commands through the transition pipeline.
///
/// Commands run to completion synchronously, cascading gravity resolution
/// included, before the next command is accepted.
pub struct GameEngine<'a> {
    state: &'a mut GameState,
    config: &'a GameConfig,
}

impl<'a> GameEngine<'a> {
    /// Creates a new game engine with the given state and configuration.
    pub fn new(state: &'a mut GameState, config: &'a GameConfig) -> Self {
        Self { state, config }
    }

    /// Executes a command by routing it through the appropriate transition
    /// pipeline.
    pub fn execute(&mut self, action: &Action) -> Result<ActionOutcome, ExecuteError> {
        match action {
            Action::Move(transition) => drive_transition(transition, self.state, self.config)
                .map(ActionOutcome::Move)
                .map_err(ExecuteError::Move),
            Action::Climb(transition) => drive_transition(transition, self.state, self.config)
                .map(ActionOutcome::Climb)
                .map_err(ExecuteError::Climb),
            Action::Dig(transition) => drive_transition(transition, self.state, self.config)
                .map(ActionOutcome::Dig)
                .map_err(ExecuteError::Dig),
            Action::PlaceLadder(transition) => {
                drive_transition(transition, self.state, self.config)
                    .map(ActionOutcome::PlaceLadder)
                    .map_err(ExecuteError::PlaceLadder)
            }
        }
    }
}

#[inline]
fn drive_transition<T>(
    transition: &T,
    state: &mut GameState,
    config: &GameConfig,
) -> TransitionResult<T::Outcome, T::Error>
where
    T: ActionTransition,
{
    transition
        .pre_validate(&*state, config)
        .map_err(|error| TransitionPhaseError::new(TransitionPhase::PreValidate, error))?;

    let outcome = transition
        .apply(state, config)
        .map_err(|error| TransitionPhaseError::new(TransitionPhase::Apply, error))?;

    transition
        .post_validate(&*state, config)
        .map_err(|error| TransitionPhaseError::new(TransitionPhase::PostValidate, error))?;

    Ok(outcome)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::action::{DigAction, Direction, LateralDirection, MoveAction, PlaceLadderAction};
    use crate::env::{GridDimensions, WorldGenerator};
    use crate::state::{Position, Resource, ResourceKind, SpriteKey};

    struct StubWorld;

    impl WorldGenerator for StubWorld {
        fn dimensions(&self) -> GridDimensions {
            GridDimensions::new(3, 3)
        }

        fn resource(&self, position: Position) -> Option<Resource> {
            (position.row == 2).then_some(Resource::new(ResourceKind::Soil, SpriteKey::SOIL))
        }

        fn spawn_position(&self) -> Position {
            Position::new(1, 0)
        }
    }

    #[test]
    fn engine_executes_commands_end_to_end() {
        let config = GameConfig::default();
        let mut state = GameState::generate(&StubWorld, &config).expect("generate");
        let mut engine = GameEngine::new(&mut state, &config);

        let outcome = engine
            .execute(&Action::Move(MoveAction::new(LateralDirection::Right)))
            .expect("move should execute");
        assert_eq!(
            outcome.movement().map(|movement| movement.to),
            Some(Position::new(1, 1))
        );

        engine
            .execute(&Action::Dig(DigAction::new(Direction::Down)))
            .expect("dig should execute");
        engine
            .execute(&Action::PlaceLadder(PlaceLadderAction))
            .expect("placement should execute");

        assert_eq!(state.player.position(), Position::new(2, 1));
        assert_eq!(state.player.inventory.len(), 1);
    }
}
