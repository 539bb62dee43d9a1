use crate::config::GameConfig;
use crate::state::{GameState, GridError, Position};

use super::movement::MoveOutcome;
use super::{ActionTransition, VerticalDirection};

/// Vertical traversal along ladders.
///
/// Requires a ladder in the player's current cell and an in-bounds,
/// empty-or-ladder destination one row away. Ladder climbing overrides
/// gravity: no resolution runs afterwards, so a climber can hang from the
/// top of a ladder.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ClimbAction {
    pub direction: VerticalDirection,
}

impl ClimbAction {
    pub fn new(direction: VerticalDirection) -> Self {
        Self { direction }
    }
}

impl ActionTransition for ClimbAction {
    type Error = GridError;
    type Outcome = MoveOutcome;

    fn apply(&self, state: &mut GameState, _config: &GameConfig) -> Result<MoveOutcome, GridError> {
        let grid = &state.world.grid;
        let movable = &mut state.player.movable;
        let from = movable.position;

        // An empty current cell is not a ladder; check emptiness before the
        // kind comparison.
        if !grid.cell(from)?.has_ladder() {
            return Ok(MoveOutcome::stationary(from));
        }

        let destination = Position::new(from.row + self.direction.delta_row(), from.column);
        if grid.contains(destination) && grid.cell(destination)?.is_traversable() {
            movable.position = destination;
        }

        Ok(MoveOutcome {
            from,
            to: movable.position,
        })
    }

    fn post_validate(&self, state: &GameState, _config: &GameConfig) -> Result<(), GridError> {
        state.world.grid.cell(state.player.position()).map(|_| ())
    }
}
