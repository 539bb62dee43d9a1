use crate::config::GameConfig;
use crate::state::{GameState, Grid, GridError, MovableState, Position};

use super::{ActionTransition, LateralDirection};

/// Horizontal step toward an adjacent column, including obstacle climbing.
///
/// Resolution order:
/// 1. a target column outside the grid absorbs the step as a no-op;
/// 2. an empty-or-ladder target cell takes the step, then gravity resolves;
/// 3. a solid target cell is mounted diagonally when the cell above it is
///    empty-or-ladder; otherwise the step is blocked entirely.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MoveAction {
    pub direction: LateralDirection,
}

impl MoveAction {
    pub fn new(direction: LateralDirection) -> Self {
        Self { direction }
    }
}

/// Start and end positions of an attempted move. `from == to` means the
/// command was absorbed as a no-op.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MoveOutcome {
    pub from: Position,
    pub to: Position,
}

impl MoveOutcome {
    pub(crate) fn stationary(position: Position) -> Self {
        Self {
            from: position,
            to: position,
        }
    }

    pub fn changed(&self) -> bool {
        self.from != self.to
    }
}

impl ActionTransition for MoveAction {
    type Error = GridError;
    type Outcome = MoveOutcome;

    fn apply(&self, state: &mut GameState, _config: &GameConfig) -> Result<MoveOutcome, GridError> {
        let grid = &state.world.grid;
        let movable = &mut state.player.movable;
        let from = movable.position;
        let target = Position::new(from.row, from.column + self.direction.delta_column());

        if !grid.contains(target) {
            return Ok(MoveOutcome::stationary(from));
        }

        if grid.cell(target)?.is_traversable() {
            movable.position.column = target.column;
            settle(grid, movable)?;
        } else {
            let above = target.above();
            if grid.contains(above) && grid.cell(above)?.is_traversable() {
                movable.position = above;
            }
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

/// Gravity resolution: drops the movable through empty cells in its column,
/// stopping at the first cell that refuses passage or at the bottom row.
pub(crate) fn settle(grid: &Grid, movable: &mut MovableState) -> Result<(), GridError> {
    let column = movable.position.column;
    for row in (movable.position.row + 1)..=grid.dimensions().bottom_row() {
        if !grid.cell(Position::new(row, column))?.try_pass(movable) {
            break;
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::env::{GridDimensions, WorldGenerator};
    use crate::state::{Resource, ResourceKind, SpriteKey};

    struct StubWorld {
        dimensions: GridDimensions,
        spawn: Position,
        solid: Vec<Position>,
        ladders: Vec<Position>,
    }

    impl StubWorld {
        fn new(width: u32, height: u32, spawn: Position) -> Self {
            Self {
                dimensions: GridDimensions::new(width, height),
                spawn,
                solid: Vec::new(),
                ladders: Vec::new(),
            }
        }

        fn solid(mut self, row: i32, column: i32) -> Self {
            self.solid.push(Position::new(row, column));
            self
        }

        fn ladder(mut self, row: i32, column: i32) -> Self {
            self.ladders.push(Position::new(row, column));
            self
        }
    }

    impl WorldGenerator for StubWorld {
        fn dimensions(&self) -> GridDimensions {
            self.dimensions
        }

        fn resource(&self, position: Position) -> Option<Resource> {
            if self.ladders.contains(&position) {
                Some(Resource::ladder(SpriteKey::LADDER))
            } else if self.solid.contains(&position) {
                Some(Resource::new(ResourceKind::Stone, SpriteKey::STONE))
            } else {
                None
            }
        }

        fn spawn_position(&self) -> Position {
            self.spawn
        }
    }

    fn state_of(world: StubWorld) -> GameState {
        GameState::generate(&world, &GameConfig::default()).expect("world should materialise")
    }

    #[test]
    fn step_into_open_air_falls_until_obstructed() {
        // Column 1 is empty down to a solid cell at row 4.
        let mut state = state_of(StubWorld::new(2, 5, Position::new(0, 0)).solid(4, 1));
        let config = GameConfig::default();
        let action = MoveAction::new(LateralDirection::Right);

        let outcome = action.apply(&mut state, &config).expect("apply");

        assert_eq!(outcome.to, Position::new(3, 1));
        assert_eq!(state.player.position(), Position::new(3, 1));
    }

    #[test]
    fn step_with_nothing_below_lands_on_the_bottom_row() {
        let mut state = state_of(StubWorld::new(2, 5, Position::new(0, 0)));
        let config = GameConfig::default();

        let outcome = MoveAction::new(LateralDirection::Right)
            .apply(&mut state, &config)
            .expect("apply");

        assert_eq!(outcome.to, Position::new(4, 1));
    }

    #[test]
    fn blocked_step_climbs_onto_a_one_block_obstacle() {
        let mut state = state_of(StubWorld::new(4, 4, Position::new(2, 2)).solid(2, 3).solid(3, 2));

        let outcome = MoveAction::new(LateralDirection::Right)
            .apply(&mut state, &GameConfig::default())
            .expect("apply");

        assert_eq!(outcome.from, Position::new(2, 2));
        assert_eq!(outcome.to, Position::new(1, 3));
    }

    #[test]
    fn step_is_absorbed_when_obstacle_and_cell_above_are_solid() {
        let mut state = state_of(
            StubWorld::new(4, 4, Position::new(2, 2))
                .solid(2, 3)
                .solid(1, 3)
                .solid(3, 2),
        );

        let outcome = MoveAction::new(LateralDirection::Right)
            .apply(&mut state, &GameConfig::default())
            .expect("apply");

        assert!(!outcome.changed());
        assert_eq!(state.player.position(), Position::new(2, 2));
    }

    #[test]
    fn step_off_the_grid_edge_is_absorbed() {
        let mut state = state_of(StubWorld::new(3, 3, Position::new(2, 0)));

        let outcome = MoveAction::new(LateralDirection::Left)
            .apply(&mut state, &GameConfig::default())
            .expect("apply");

        assert!(!outcome.changed());
    }

    #[test]
    fn step_onto_a_ladder_still_resolves_gravity() {
        // Ladder at (2, 1) with open air below it: entering the ladder cell
        // from the side drops the player through the empty column beneath.
        let mut state = state_of(StubWorld::new(2, 5, Position::new(2, 0)).ladder(2, 1).solid(3, 0));

        let outcome = MoveAction::new(LateralDirection::Right)
            .apply(&mut state, &GameConfig::default())
            .expect("apply");

        assert_eq!(outcome.to, Position::new(4, 1));
    }

    #[test]
    fn settle_stops_on_top_of_the_first_occupied_cell() {
        let state = state_of(StubWorld::new(1, 6, Position::new(0, 0)).solid(4, 0));
        let mut movable = MovableState::new(Position::new(0, 0), 3);

        settle(&state.world.grid, &mut movable).expect("settle");

        assert_eq!(movable.position, Position::new(3, 0));
    }
}
