//! Tile-space helpers used by layout and wall raising.

use crate::tiles::TileGrid;
use crate::types::{Pos, Tile};

pub(super) fn manhattan(a: Pos, b: Pos) -> u32 {
    a.x.abs_diff(b.x) + a.y.abs_diff(b.y)
}

/// Turns every empty tile touching a floor (including diagonally) into wall.
pub(super) fn raise_walls(grid: &mut TileGrid) {
    let wall_positions: Vec<Pos> = grid
        .positions()
        .filter(|&pos| grid.tile_at(pos) == Tile::Nothing && touches_floor(grid, pos))
        .collect();
    for pos in wall_positions {
        grid.set(pos, Tile::Wall);
    }
}

fn touches_floor(grid: &TileGrid, pos: Pos) -> bool {
    (-1..=1).any(|dy| {
        (-1..=1).any(|dx| {
            (dx != 0 || dy != 0) && grid.tile_at(Pos { y: pos.y + dy, x: pos.x + dx }).is_walkable()
        })
    })
}
