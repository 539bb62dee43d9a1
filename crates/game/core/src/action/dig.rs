use crate::config::GameConfig;
use crate::state::{GameState, GridError, Position};

use super::movement::{self, MoveOutcome};
use super::{ActionTransition, Direction};

/// Extraction of an adjacent cell's resource into the player inventory.
///
/// Digging down, left, or right can remove the player's support, so gravity
/// resolves afterwards for those directions. Digging up never moves the
/// digger.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DigAction {
    pub direction: Direction,
}

impl DigAction {
    pub fn new(direction: Direction) -> Self {
        Self { direction }
    }
}

/// What a dig command did: the targeted cell (when inside the grid), whether
/// a resource moved to the inventory, and the fall it caused.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DigOutcome {
    pub target: Option<Position>,
    pub extracted: bool,
    pub movement: MoveOutcome,
}

impl ActionTransition for DigAction {
    type Error = GridError;
    type Outcome = DigOutcome;

    fn apply(&self, state: &mut GameState, _config: &GameConfig) -> Result<DigOutcome, GridError> {
        let from = state.player.position();
        let (delta_row, delta_column) = self.direction.delta();
        let target = from.offset(delta_row, delta_column);

        if !state.world.grid.contains(target) {
            return Ok(DigOutcome {
                target: None,
                extracted: false,
                movement: MoveOutcome::stationary(from),
            });
        }

        let extracted = state
            .world
            .grid
            .cell_mut(target)?
            .dig(&mut state.player.inventory);

        if self.direction.affects_support() {
            movement::settle(&state.world.grid, &mut state.player.movable)?;
        }

        Ok(DigOutcome {
            target: Some(target),
            extracted,
            movement: MoveOutcome {
                from,
                to: state.player.position(),
            },
        })
    }

    fn post_validate(&self, state: &GameState, _config: &GameConfig) -> Result<(), GridError> {
        state.world.grid.cell(state.player.position()).map(|_| ())
    }
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
    }

    impl StubWorld {
        fn new(width: u32, height: u32, spawn: Position) -> Self {
            Self {
                dimensions: GridDimensions::new(width, height),
                spawn,
                solid: Vec::new(),
            }
        }

        fn solid(mut self, row: i32, column: i32) -> Self {
            self.solid.push(Position::new(row, column));
            self
        }
    }

    impl WorldGenerator for StubWorld {
        fn dimensions(&self) -> GridDimensions {
            self.dimensions
        }

        fn resource(&self, position: Position) -> Option<Resource> {
            self.solid
                .contains(&position)
                .then_some(Resource::new(ResourceKind::Soil, SpriteKey::SOIL))
        }

        fn spawn_position(&self) -> Position {
            self.spawn
        }
    }

    fn state_of(world: StubWorld) -> GameState {
        GameState::generate(&world, &GameConfig::default()).expect("world should materialise")
    }

    #[test]
    fn digging_down_extracts_the_floor_and_drops_the_digger() {
        // Soil directly below the player, open air beneath it.
        let mut state = state_of(StubWorld::new(3, 6, Position::new(2, 2)).solid(3, 2));

        let outcome = DigAction::new(Direction::Down)
            .apply(&mut state, &GameConfig::default())
            .expect("apply");

        assert_eq!(outcome.target, Some(Position::new(3, 2)));
        assert!(outcome.extracted);
        assert_eq!(outcome.movement.to, Position::new(5, 2));

        let emptied = state.world.grid.cell(Position::new(3, 2)).expect("cell");
        assert!(emptied.is_empty());
        assert_eq!(state.player.inventory.len(), 1);
        assert_eq!(
            state.player.inventory.items()[0].kind(),
            ResourceKind::Soil
        );
    }

    #[test]
    fn digging_an_empty_cell_extracts_nothing() {
        let mut state = state_of(StubWorld::new(3, 3, Position::new(1, 1)).solid(2, 1));

        let outcome = DigAction::new(Direction::Left)
            .apply(&mut state, &GameConfig::default())
            .expect("apply");

        assert_eq!(outcome.target, Some(Position::new(1, 0)));
        assert!(!outcome.extracted);
        assert!(state.player.inventory.is_empty());
        // Still supported, so no fall either.
        assert!(!outcome.movement.changed());
    }

    #[test]
    fn digging_sideways_resolves_gravity_for_the_digger() {
        // The player stands on its only support; digging left does not
        // remove it, but gravity still runs and finds nothing to do.
        // Digging the support's neighbour then stepping over it would fall.
        let mut state = state_of(
            StubWorld::new(2, 4, Position::new(1, 1))
                .solid(2, 1)
                .solid(1, 0),
        );

        let outcome = DigAction::new(Direction::Left)
            .apply(&mut state, &GameConfig::default())
            .expect("apply");

        assert!(outcome.extracted);
        assert_eq!(state.player.position(), Position::new(1, 1));
    }

    #[test]
    fn digging_up_never_moves_the_digger() {
        // Ceiling above, nothing below: removing the ceiling must not
        // trigger a fall even though the player is unsupported.
        let mut state = state_of(StubWorld::new(1, 4, Position::new(1, 0)).solid(0, 0));

        let outcome = DigAction::new(Direction::Up)
            .apply(&mut state, &GameConfig::default())
            .expect("apply");

        assert!(outcome.extracted);
        assert!(!outcome.movement.changed());
        assert_eq!(state.player.position(), Position::new(1, 0));
    }

    #[test]
    fn digging_past_the_grid_edge_is_absorbed() {
        let mut state = state_of(StubWorld::new(2, 2, Position::new(1, 0)));

        let outcome = DigAction::new(Direction::Down)
            .apply(&mut state, &GameConfig::default())
            .expect("apply");

        assert_eq!(outcome.target, None);
        assert!(!outcome.extracted);
        assert!(state.player.inventory.is_empty());
    }
}
