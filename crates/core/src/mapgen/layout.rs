//! Room carving and corridor placement between sibling partitions.

use crate::tiles::TileGrid;
use crate::types::{Pos, Tile};

use super::grid::manhattan;
use super::model::Room;

pub(super) fn carve_room(grid: &mut TileGrid, room: &Room) {
    for y in room.y..=room.bottom() {
        for x in room.x..=room.right() {
            grid.set(Pos { y: y as i32, x: x as i32 }, Tile::Floor);
        }
    }
}

/// Closest pair of room centers across the two sides, first pair wins ties.
pub(super) fn closest_room_pair(first: &[Room], second: &[Room]) -> Option<(Room, Room)> {
    let mut best_choice: Option<(u32, Room, Room)> = None;
    for &left in first {
        for &right in second {
            let distance = manhattan(left.center(), right.center());
            let should_replace = match best_choice {
                None => true,
                Some((best_distance, _, _)) => distance < best_distance,
            };
            if should_replace {
                best_choice = Some((distance, left, right));
            }
        }
    }
    best_choice.map(|(_, left, right)| (left, right))
}

pub(super) fn carve_l_shaped_corridor(
    grid: &mut TileGrid,
    start: Pos,
    end: Pos,
    horizontal_first: bool,
) {
    if horizontal_first {
        carve_horizontal_line(grid, start.y, start.x, end.x);
        carve_vertical_line(grid, end.x, start.y, end.y);
    } else {
        carve_vertical_line(grid, start.x, start.y, end.y);
        carve_horizontal_line(grid, end.y, start.x, end.x);
    }
}

fn carve_horizontal_line(grid: &mut TileGrid, y: i32, left_x: i32, right_x: i32) {
    for x in left_x.min(right_x)..=left_x.max(right_x) {
        grid.set(Pos { y, x }, Tile::Floor);
    }
}

fn carve_vertical_line(grid: &mut TileGrid, x: i32, top_y: i32, bottom_y: i32) {
    for y in top_y.min(bottom_y)..=top_y.max(bottom_y) {
        grid.set(Pos { y, x }, Tile::Floor);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn closest_pair_prefers_nearest_centers() {
        let far = Room { x: 1, y: 1, width: 3, height: 3 };
        let near = Room { x: 10, y: 1, width: 3, height: 3 };
        let target = Room { x: 16, y: 1, width: 3, height: 3 };

        let (left, right) =
            closest_room_pair(&[far, near], &[target]).expect("both sides have rooms");
        assert_eq!(left, near);
        assert_eq!(right, target);
        assert_eq!(closest_room_pair(&[], &[target]), None);
    }

    #[test]
    fn l_shaped_corridor_joins_both_endpoints() {
        for horizontal_first in [true, false] {
            let mut grid = TileGrid::new(12, 12);
            let start = Pos { y: 2, x: 2 };
            let end = Pos { y: 9, x: 8 };
            carve_l_shaped_corridor(&mut grid, start, end, horizontal_first);

            assert_eq!(grid.tile_at(start), Tile::Floor);
            assert_eq!(grid.tile_at(end), Tile::Floor);
            assert_eq!(grid.count(Tile::Floor), 7 + 8 - 1);
            assert!(grid.walkable_tiles_connected());
        }
    }

    #[test]
    fn carved_room_covers_its_whole_rectangle() {
        let mut grid = TileGrid::new(10, 10);
        let room = Room { x: 2, y: 3, width: 4, height: 3 };
        carve_room(&mut grid, &room);
        assert_eq!(grid.count(Tile::Floor), 12);
        assert!(
            grid.positions()
                .filter(|&pos| room.contains(pos))
                .all(|pos| grid.tile_at(pos) == Tile::Floor)
        );
    }
}
