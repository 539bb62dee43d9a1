use crate::state::{Position, Resource};

/// Construction-time oracle producing the initial world layout.
pub trait WorldGenerator: Send + Sync {
    fn dimensions(&self) -> GridDimensions;

    /// Initial occupant of the cell at `position`, or `None` for an empty
    /// cell. Only queried for positions inside `dimensions()`.
    fn resource(&self, position: Position) -> Option<Resource>;

    /// Starting position for the player.
    fn spawn_position(&self) -> Position;

    fn contains(&self, position: Position) -> bool {
        self.dimensions().contains(position)
    }
}

/// Fixed grid shape, established at generation time for the whole session.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GridDimensions {
    pub width: u32,
    pub height: u32,
}

impl GridDimensions {
    pub const fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    pub fn contains(&self, position: Position) -> bool {
        position.row >= 0
            && position.column >= 0
            && position.row < self.height as i32
            && position.column < self.width as i32
    }

    /// Index of the lowest row. Row 0 is the top of the grid.
    pub fn bottom_row(&self) -> i32 {
        self.height as i32 - 1
    }
}
