//! Authoritative game state representation.
//!
//! This module owns the data structures that describe the grid, the player,
//! and the inventory. Runtime layers query this state but mutate it
//! exclusively through the engine.
pub mod types;

use crate::config::GameConfig;
use crate::env::WorldGenerator;

pub use types::{
    Cell, EntityId, Grid, GridError, HealthMeter, Inventory, InventoryError, MovableState,
    PlayerState, Position, Resource, ResourceKind, SpriteKey, WorldState,
};

/// Failures detected while materialising a generated world.
#[derive(Clone, Copy, Debug, PartialEq, Eq, thiserror::Error)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum InitializationError {
    #[error("generated grid has zero width or height")]
    EmptyGrid,

    #[error("spawn position {position:?} is outside the generated grid")]
    SpawnOutOfBounds { position: Position },
}

/// Canonical snapshot of the deterministic game state.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GameState {
    /// The controllable player. Exactly one per session.
    pub player: PlayerState,
    /// Grid contents mutated by digging and ladder placement.
    pub world: WorldState,
}

impl GameState {
    /// Materialises a fresh state from the generator boundary.
    ///
    /// The grid takes its fixed shape here; the player spawns at the
    /// generator's spawn position with a full health meter.
    pub fn generate<G>(generator: &G, config: &GameConfig) -> Result<Self, InitializationError>
    where
        G: WorldGenerator + ?Sized,
    {
        let dimensions = generator.dimensions();
        if dimensions.width == 0 || dimensions.height == 0 {
            return Err(InitializationError::EmptyGrid);
        }

        let grid = Grid::generate(generator);
        let spawn = generator.spawn_position();
        if !grid.contains(spawn) {
            return Err(InitializationError::SpawnOutOfBounds { position: spawn });
        }

        Ok(Self {
            player: PlayerState::new(spawn, config.player_max_health),
            world: WorldState::new(grid),
        })
    }
}
