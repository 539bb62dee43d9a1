use crate::env::{GridDimensions, WorldGenerator};

use super::{Inventory, MovableState, Position, Resource, SpriteKey};

/// Out-of-bounds access through the low-level grid accessor.
///
/// The engine bounds-checks every coordinate before touching the grid, so
/// reaching this error from a command indicates a violated internal
/// invariant rather than a gameplay situation.
#[derive(Clone, Copy, Debug, PartialEq, Eq, thiserror::Error)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum GridError {
    #[error("position {position:?} is outside the {dimensions:?} grid")]
    OutOfBounds {
        position: Position,
        dimensions: GridDimensions,
    },
}

/// World-level state mutated by the engine.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct WorldState {
    pub grid: Grid,
}

impl WorldState {
    pub fn new(grid: Grid) -> Self {
        Self { grid }
    }
}

/// Fixed-shape matrix of cells, row-major, row 0 at the top.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Grid {
    dimensions: GridDimensions,
    cells: Vec<Cell>,
}

impl Grid {
    /// Materialises the grid from the generator boundary, one cell per
    /// coordinate inside the generator's dimensions.
    pub fn generate<G>(generator: &G) -> Self
    where
        G: WorldGenerator + ?Sized,
    {
        let dimensions = generator.dimensions();
        let mut cells = Vec::with_capacity(dimensions.width as usize * dimensions.height as usize);
        for row in 0..dimensions.height as i32 {
            for column in 0..dimensions.width as i32 {
                let position = Position::new(row, column);
                let mut cell = Cell::new(position);
                cell.set_resource(generator.resource(position));
                cells.push(cell);
            }
        }

        Self { dimensions, cells }
    }

    pub fn dimensions(&self) -> GridDimensions {
        self.dimensions
    }

    pub fn width(&self) -> u32 {
        self.dimensions.width
    }

    pub fn height(&self) -> u32 {
        self.dimensions.height
    }

    pub fn contains(&self, position: Position) -> bool {
        self.dimensions.contains(position)
    }

    pub fn cell(&self, position: Position) -> Result<&Cell, GridError> {
        let index = self.index_of(position)?;
        Ok(&self.cells[index])
    }

    pub fn cell_mut(&mut self, position: Position) -> Result<&mut Cell, GridError> {
        let index = self.index_of(position)?;
        Ok(&mut self.cells[index])
    }

    /// All cells in row-major order, for initial rendering and snapshots.
    pub fn cells(&self) -> impl Iterator<Item = &Cell> + '_ {
        self.cells.iter()
    }

    fn index_of(&self, position: Position) -> Result<usize, GridError> {
        if !self.dimensions.contains(position) {
            return Err(GridError::OutOfBounds {
                position,
                dimensions: self.dimensions,
            });
        }

        Ok(position.row as usize * self.dimensions.width as usize + position.column as usize)
    }
}

/// A single grid position's terrain state.
///
/// The sprite is derived from the resource and kept in sync by every
/// mutator; it is never written independently.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Cell {
    position: Position,
    resource: Option<Resource>,
    sprite: Option<SpriteKey>,
}

impl Cell {
    /// Creates an empty cell. The coordinate is fixed for the cell's
    /// lifetime.
    pub fn new(position: Position) -> Self {
        Self {
            position,
            resource: None,
            sprite: None,
        }
    }

    pub fn position(&self) -> Position {
        self.position
    }

    pub fn row(&self) -> i32 {
        self.position.row
    }

    pub fn column(&self) -> i32 {
        self.position.column
    }

    pub fn resource(&self) -> Option<&Resource> {
        self.resource.as_ref()
    }

    pub fn sprite(&self) -> Option<SpriteKey> {
        self.sprite
    }

    /// Replaces the occupant, re-deriving the sprite.
    pub fn set_resource(&mut self, resource: Option<Resource>) {
        self.sprite = resource.map(|resource| resource.sprite());
        self.resource = resource;
    }

    /// Copies another cell's resource and sprite onto this one.
    pub fn replace_by(&mut self, other: &Cell) {
        self.resource = other.resource;
        self.sprite = other.sprite;
    }

    /// Extracts the occupant into the collector's inventory.
    ///
    /// Returns whether a resource was present; the transfer is atomic, so a
    /// dug resource leaves the cell and appears at the end of the inventory
    /// in the same step. This is the sole path by which terrain becomes
    /// inventory.
    pub fn dig(&mut self, inventory: &mut Inventory) -> bool {
        let Some(resource) = self.resource else {
            return false;
        };

        inventory.add(resource);
        self.set_resource(None);
        true
    }

    /// Lets a falling movable through when the cell is empty, dropping its
    /// row to this cell's row. Any resource, ladders included, refuses
    /// passage. Used exclusively by gravity resolution.
    pub fn try_pass(&self, movable: &mut MovableState) -> bool {
        if self.resource.is_some() {
            return false;
        }

        movable.position.row = self.position.row;
        true
    }

    pub fn is_empty(&self) -> bool {
        self.resource.is_none()
    }

    pub fn has_ladder(&self) -> bool {
        self.resource.is_some_and(|resource| resource.is_ladder())
    }

    /// Whether a movable may occupy this cell: empty or holding a ladder.
    pub fn is_traversable(&self) -> bool {
        self.is_empty() || self.has_ladder()
    }
}
