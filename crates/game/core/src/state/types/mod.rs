mod actor;
mod common;
mod inventory;
mod resource;
mod world;

pub use actor::{MovableState, PlayerState};
pub use common::{EntityId, HealthMeter, Position};
pub use inventory::{Inventory, InventoryError};
pub use resource::{Resource, ResourceKind, SpriteKey};
pub use world::{Cell, Grid, GridError, WorldState};
