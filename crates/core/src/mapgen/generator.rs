//! High-level generation orchestration: partition, carve, link, wall in.

use tracing::debug;

use crate::tiles::TileGrid;

use super::grid::raise_walls;
use super::model::GeneratedWorld;
use super::partition::{MIN_LEAF, PartitionNode, Region};
use super::seed::{Seed, seeded_rng};
use super::{WORLD_HEIGHT, WORLD_WIDTH};

#[derive(Clone, Copy, Debug)]
pub struct MapGenerator {
    width: usize,
    height: usize,
}

impl Default for MapGenerator {
    fn default() -> Self {
        Self::new()
    }
}

impl MapGenerator {
    pub fn new() -> Self {
        Self { width: WORLD_WIDTH, height: WORLD_HEIGHT }
    }

    /// Sides below the minimum partition size are raised to it.
    pub fn with_size(width: usize, height: usize) -> Self {
        Self { width: width.max(MIN_LEAF), height: height.max(MIN_LEAF) }
    }

    pub fn generate(&self, seed: Seed) -> GeneratedWorld {
        let mut rng = seeded_rng(seed);
        let bounds = Region { x: 0, y: 0, width: self.width, height: self.height };
        let tree = PartitionNode::build(bounds, &mut rng);
        debug_assert_eq!(tree.region(), bounds);

        let mut grid = TileGrid::new(self.width, self.height);
        tree.carve(&mut grid, &mut rng);
        raise_walls(&mut grid);

        let rooms = tree.rooms();
        let player_start = tree.first_room().center();
        debug!(%seed, rooms = rooms.len(), ?player_start, "generated world");

        GeneratedWorld { seed, grid, rooms, player_start }
    }
}
