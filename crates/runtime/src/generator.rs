//! Seeded terrain generation serving the [`WorldGenerator`] boundary.
use std::collections::HashMap;

use game_core::{GridDimensions, Position, Resource, ResourceKind, SpriteKey, WorldGenerator};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Layered surface terrain: open sky above the surface row, soil beneath it,
/// stone at depth, with wood scattered along the surface line and ore
/// pockets underground.
///
/// Fully deterministic for a given seed, so a session can be regenerated
/// from `(dimensions, surface_row, seed)` alone.
pub struct TerrainGenerator {
    dimensions: GridDimensions,
    surface_row: i32,
    features: HashMap<Position, Resource>,
}

impl TerrainGenerator {
    /// Depth, in rows below the surface, where soil gives way to stone.
    const SOIL_DEPTH: i32 = 3;

    pub fn new(width: u32, height: u32, surface_row: u32) -> Self {
        Self {
            dimensions: GridDimensions::new(width, height),
            surface_row: surface_row as i32,
            features: HashMap::new(),
        }
    }

    /// Scatters `trees` wood blocks on the surface line and `pockets` ore
    /// pockets underground, deterministically for the given seed.
    ///
    /// Column 0 stays clear so the spawn cell is never covered.
    pub fn with_features(mut self, seed: u64, trees: u32, pockets: u32) -> Self {
        let mut rng = StdRng::seed_from_u64(seed);
        let width = self.dimensions.width as i32;
        let height = self.dimensions.height as i32;

        if width > 1 {
            for _ in 0..trees {
                let position = Position::new(self.surface_row - 1, rng.random_range(1..width));
                if self.dimensions.contains(position) {
                    self.features
                        .insert(position, Resource::new(ResourceKind::Wood, SpriteKey::WOOD));
                }
            }
        }

        if self.surface_row + 1 < height {
            for _ in 0..pockets {
                let position = Position::new(
                    rng.random_range(self.surface_row + 1..height),
                    rng.random_range(0..width),
                );
                self.features
                    .insert(position, Resource::new(ResourceKind::Ore, SpriteKey::ORE));
            }
        }

        self
    }
}

impl WorldGenerator for TerrainGenerator {
    fn dimensions(&self) -> GridDimensions {
        self.dimensions
    }

    fn resource(&self, position: Position) -> Option<Resource> {
        if let Some(feature) = self.features.get(&position) {
            return Some(*feature);
        }

        if position.row < self.surface_row {
            None
        } else if position.row < self.surface_row + Self::SOIL_DEPTH {
            Some(Resource::new(ResourceKind::Soil, SpriteKey::SOIL))
        } else {
            Some(Resource::new(ResourceKind::Stone, SpriteKey::STONE))
        }
    }

    /// The player starts standing on the surface, in the leftmost column.
    fn spawn_position(&self) -> Position {
        Position::new(self.surface_row - 1, 0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn layers_follow_the_surface_row() {
        let generator = TerrainGenerator::new(4, 10, 4);

        assert_eq!(generator.resource(Position::new(0, 0)), None);
        assert_eq!(
            generator.resource(Position::new(4, 2)).map(|r| r.kind()),
            Some(ResourceKind::Soil)
        );
        assert_eq!(
            generator.resource(Position::new(8, 2)).map(|r| r.kind()),
            Some(ResourceKind::Stone)
        );
    }

    #[test]
    fn spawn_stands_on_the_surface() {
        let generator = TerrainGenerator::new(4, 10, 4);

        let spawn = generator.spawn_position();
        assert_eq!(spawn, Position::new(3, 0));
        assert_eq!(generator.resource(spawn), None);
        assert!(generator.resource(spawn.below()).is_some());
    }

    #[test]
    fn features_are_deterministic_per_seed() {
        let first = TerrainGenerator::new(16, 12, 4).with_features(7, 5, 5);
        let second = TerrainGenerator::new(16, 12, 4).with_features(7, 5, 5);

        for row in 0..12 {
            for column in 0..16 {
                let position = Position::new(row, column);
                assert_eq!(first.resource(position), second.resource(position));
            }
        }
    }

    #[test]
    fn features_never_cover_the_spawn_cell() {
        let generator = TerrainGenerator::new(16, 12, 4).with_features(42, 200, 0);

        assert_eq!(generator.resource(generator.spawn_position()), None);
    }
}
