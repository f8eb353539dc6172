//! Light-radius masking for rendered frames.
//! Pure read-side computation: nothing here mutates the world.

use crate::tiles::TileGrid;
use crate::types::{Pos, Tile};
use crate::world::World;

pub const DEFAULT_LIGHT_RADIUS: u32 = 5;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct VisibilityMask {
    width: usize,
    height: usize,
    lit: Vec<bool>,
}

impl VisibilityMask {
    pub fn is_lit(&self, pos: Pos) -> bool {
        if pos.x < 0 || pos.y < 0 {
            return false;
        }
        let (x, y) = (pos.x as usize, pos.y as usize);
        x < self.width && y < self.height && self.lit[y * self.width + x]
    }

    pub fn lit_count(&self) -> usize {
        self.lit.iter().filter(|&&lit| lit).count()
    }

    /// Copy of `grid` with every dark tile blanked to `Nothing`.
    pub fn apply(&self, grid: &TileGrid) -> TileGrid {
        let mut masked = grid.clone();
        for pos in grid.positions().filter(|&pos| !self.is_lit(pos)) {
            masked.set(pos, Tile::Nothing);
        }
        masked
    }
}

/// With the light toggle off every tile is lit. With it on, only tiles within
/// Euclidean `radius` of the player (`dx² + dy² <= radius²`) are lit.
pub fn compute_visible(world: &World, radius: u32) -> VisibilityMask {
    let grid = world.grid();
    let (width, height) = (grid.width(), grid.height());
    if !world.light_on() {
        return VisibilityMask { width, height, lit: vec![true; width * height] };
    }

    let player = world.player();
    let radius_squared = u64::from(radius).pow(2);
    let lit = grid
        .positions()
        .map(|pos| {
            let dx = u64::from(pos.x.abs_diff(player.x));
            let dy = u64::from(pos.y.abs_diff(player.y));
            dx * dx + dy * dy <= radius_squared
        })
        .collect();
    VisibilityMask { width, height, lit }
}
