//! Deterministic world-simulation rules for the mining sandbox.
//!
//! `game-core` defines the canonical data model (grid, cells, resources,
//! player) and the command pipeline that moves the player, resolves gravity,
//! and extracts terrain into the inventory. All state mutation flows through
//! [`engine::GameEngine`]; the runtime crate layers session orchestration and
//! the presentation boundary on top of the types re-exported here.
pub mod action;
pub mod config;
pub mod engine;
pub mod env;
pub mod state;

pub use action::{
    Action, ActionOutcome, ActionTransition, ClimbAction, DigAction, DigOutcome, Direction,
    LateralDirection, MoveAction, MoveOutcome, PlaceLadderAction, PlaceLadderError, PlaceOutcome,
    VerticalDirection,
};
pub use config::GameConfig;
pub use engine::{ExecuteError, GameEngine, TransitionPhase, TransitionPhaseError};
pub use env::{GridDimensions, WorldGenerator};
pub use state::{
    Cell, EntityId, GameState, Grid, GridError, HealthMeter, InitializationError, Inventory,
    InventoryError, MovableState, PlayerState, Position, Resource, ResourceKind, SpriteKey,
    WorldState,
};
