use super::{HealthMeter, Inventory, Position};

/// Base state for any grid-bound actor: a position and a health meter.
///
/// Position setters perform no bounds validation at this layer; the engine
/// validates every coordinate before mutating it.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MovableState {
    pub position: Position,
    pub health: HealthMeter,
}

impl MovableState {
    pub fn new(position: Position, max_health: u32) -> Self {
        Self {
            position,
            health: HealthMeter::full(max_health),
        }
    }
}

/// The controllable player: a movable plus its ordered inventory.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PlayerState {
    pub movable: MovableState,
    pub inventory: Inventory,
}

impl PlayerState {
    pub fn new(position: Position, max_health: u32) -> Self {
        Self {
            movable: MovableState::new(position, max_health),
            inventory: Inventory::new(),
        }
    }

    pub fn position(&self) -> Position {
        self.movable.position
    }
}
