//! Fixed-size tile grid shared by generation, movement, visibility, and rendering.

use std::collections::VecDeque;

use crate::types::{Pos, Tile};

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TileGrid {
    width: usize,
    height: usize,
    tiles: Vec<Tile>,
}

impl TileGrid {
    pub fn new(width: usize, height: usize) -> Self {
        Self { width, height, tiles: vec![Tile::Nothing; width * height] }
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn in_bounds(&self, pos: Pos) -> bool {
        pos.x >= 0 && pos.y >= 0 && (pos.x as usize) < self.width && (pos.y as usize) < self.height
    }

    pub fn get(&self, pos: Pos) -> Option<Tile> {
        if !self.in_bounds(pos) {
            return None;
        }
        Some(self.tiles[self.index(pos)])
    }

    /// Like [`TileGrid::get`] but reads out-of-bounds cells as `Nothing`.
    pub fn tile_at(&self, pos: Pos) -> Tile {
        self.get(pos).unwrap_or(Tile::Nothing)
    }

    pub fn set(&mut self, pos: Pos, tile: Tile) {
        if !self.in_bounds(pos) {
            return;
        }
        let idx = self.index(pos);
        self.tiles[idx] = tile;
    }

    pub fn positions(&self) -> impl Iterator<Item = Pos> + '_ {
        (0..self.height)
            .flat_map(move |y| (0..self.width).map(move |x| Pos { y: y as i32, x: x as i32 }))
    }

    pub fn count(&self, tile: Tile) -> usize {
        self.tiles.iter().filter(|&&candidate| candidate == tile).count()
    }

    /// True when every walkable tile reaches every other via 4-directional steps.
    pub fn walkable_tiles_connected(&self) -> bool {
        let walkable = self.tiles.iter().filter(|tile| tile.is_walkable()).count();
        let Some(start) = self.positions().find(|&pos| self.tile_at(pos).is_walkable()) else {
            return true;
        };

        let mut seen = vec![false; self.tiles.len()];
        seen[self.index(start)] = true;
        let mut open = VecDeque::from([start]);
        let mut reached = 1usize;
        while let Some(pos) = open.pop_front() {
            for next in [
                Pos { y: pos.y - 1, x: pos.x },
                Pos { y: pos.y, x: pos.x + 1 },
                Pos { y: pos.y + 1, x: pos.x },
                Pos { y: pos.y, x: pos.x - 1 },
            ] {
                if !self.tile_at(next).is_walkable() {
                    continue;
                }
                let idx = self.index(next);
                if seen[idx] {
                    continue;
                }
                seen[idx] = true;
                reached += 1;
                open.push_back(next);
            }
        }

        reached == walkable
    }

    pub fn canonical_bytes(&self) -> Vec<u8> {
        let mut bytes = Vec::with_capacity(8 + self.tiles.len());
        bytes.extend((self.width as u32).to_le_bytes());
        bytes.extend((self.height as u32).to_le_bytes());
        bytes.extend(self.tiles.iter().map(|tile| tile.code()));
        bytes
    }

    /// One text line per row, top row first.
    pub fn render_ascii(&self) -> String {
        if self.width == 0 {
            return "\n".repeat(self.height);
        }
        let mut text = String::with_capacity((self.width + 1) * self.height);
        for row in self.tiles.chunks(self.width) {
            text.extend(row.iter().map(|tile| tile.glyph()));
            text.push('\n');
        }
        text
    }

    fn index(&self, pos: Pos) -> usize {
        (pos.y as usize) * self.width + (pos.x as usize)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn out_of_bounds_reads_are_nothing_and_writes_are_ignored() {
        let mut grid = TileGrid::new(4, 3);
        let outside = Pos { y: 3, x: 0 };
        grid.set(outside, Tile::Floor);
        assert_eq!(grid.get(outside), None);
        assert_eq!(grid.tile_at(Pos { y: -1, x: 2 }), Tile::Nothing);
        assert_eq!(grid.count(Tile::Floor), 0);
    }

    #[test]
    fn positions_walk_rows_top_to_bottom() {
        let grid = TileGrid::new(2, 2);
        let order: Vec<Pos> = grid.positions().collect();
        assert_eq!(
            order,
            vec![Pos { y: 0, x: 0 }, Pos { y: 0, x: 1 }, Pos { y: 1, x: 0 }, Pos { y: 1, x: 1 }]
        );
    }

    #[test]
    fn detects_split_walkable_regions() {
        let mut grid = TileGrid::new(5, 1);
        grid.set(Pos { y: 0, x: 0 }, Tile::Floor);
        grid.set(Pos { y: 0, x: 1 }, Tile::Player);
        assert!(grid.walkable_tiles_connected());

        grid.set(Pos { y: 0, x: 3 }, Tile::Floor);
        assert!(!grid.walkable_tiles_connected());

        grid.set(Pos { y: 0, x: 2 }, Tile::Floor);
        assert!(grid.walkable_tiles_connected());
    }

    #[test]
    fn diagonal_neighbours_do_not_count_as_connected() {
        let mut grid = TileGrid::new(2, 2);
        grid.set(Pos { y: 0, x: 0 }, Tile::Floor);
        grid.set(Pos { y: 1, x: 1 }, Tile::Floor);
        assert!(!grid.walkable_tiles_connected());
    }

    #[test]
    fn zero_width_grid_renders_empty_rows() {
        let grid = TileGrid::new(0, 3);
        assert_eq!(grid.render_ascii(), "\n\n\n");
        assert_eq!(TileGrid::new(0, 0).render_ascii(), "");
        assert!(grid.walkable_tiles_connected());
    }

    #[test]
    fn ascii_rendering_uses_tile_glyphs() {
        let mut grid = TileGrid::new(3, 2);
        grid.set(Pos { y: 0, x: 0 }, Tile::Wall);
        grid.set(Pos { y: 0, x: 1 }, Tile::Floor);
        grid.set(Pos { y: 1, x: 2 }, Tile::Player);
        assert_eq!(grid.render_ascii(), "#. \n  @\n");
    }
}
