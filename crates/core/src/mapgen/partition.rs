//! Binary space partition of the world rectangle into room-bearing leaves.

use rand_chacha::ChaCha8Rng;
use tracing::trace;

use crate::tiles::TileGrid;

use super::layout::{carve_l_shaped_corridor, carve_room, closest_room_pair};
use super::model::Room;
use super::seed::{coin_flip, random_usize};

/// Smallest side a partition may be cut down to.
pub(super) const MIN_LEAF: usize = 8;
const MIN_ROOM: usize = 3;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(super) struct Region {
    pub(super) x: usize,
    pub(super) y: usize,
    pub(super) width: usize,
    pub(super) height: usize,
}

impl Region {
    pub(super) fn contains_room_with_walls(self, room: &Room) -> bool {
        let ring = room.expanded(1);
        ring.x >= self.x
            && ring.y >= self.y
            && ring.right() < self.x + self.width
            && ring.bottom() < self.y + self.height
    }

    fn splittable_columns(self) -> bool {
        self.width >= MIN_LEAF * 2
    }

    fn splittable_rows(self) -> bool {
        self.height >= MIN_LEAF * 2
    }

    fn choose_axis(self, rng: &mut ChaCha8Rng) -> Option<Axis> {
        match (self.splittable_columns(), self.splittable_rows()) {
            (false, false) => None,
            (true, false) => Some(Axis::Columns),
            (false, true) => Some(Axis::Rows),
            // Cut across the long side once the region is clearly stretched.
            (true, true) if self.width * 4 > self.height * 5 => Some(Axis::Columns),
            (true, true) if self.height * 4 > self.width * 5 => Some(Axis::Rows),
            (true, true) => Some(if coin_flip(rng) { Axis::Columns } else { Axis::Rows }),
        }
    }

    fn split(self, axis: Axis, offset: usize) -> (Region, Region) {
        match axis {
            Axis::Columns => (
                Region { width: offset, ..self },
                Region { x: self.x + offset, width: self.width - offset, ..self },
            ),
            Axis::Rows => (
                Region { height: offset, ..self },
                Region { y: self.y + offset, height: self.height - offset, ..self },
            ),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(super) enum Axis {
    /// Left and right halves.
    Columns,
    /// Top and bottom halves.
    Rows,
}

#[derive(Debug)]
pub(super) enum PartitionNode {
    Leaf {
        region: Region,
        room: Room,
    },
    Split {
        region: Region,
        axis: Axis,
        first: Box<PartitionNode>,
        second: Box<PartitionNode>,
    },
}

impl PartitionNode {
    /// Regions must be at least `MIN_LEAF` on both sides.
    pub(super) fn build(region: Region, rng: &mut ChaCha8Rng) -> Self {
        debug_assert!(region.width >= MIN_LEAF && region.height >= MIN_LEAF);
        let Some(axis) = region.choose_axis(rng) else {
            let room = place_room(region, rng);
            debug_assert!(region.contains_room_with_walls(&room));
            return PartitionNode::Leaf { region, room };
        };

        let length = match axis {
            Axis::Columns => region.width,
            Axis::Rows => region.height,
        };
        let offset = random_usize(rng, MIN_LEAF, length - MIN_LEAF);
        trace!(?region, ?axis, offset, "splitting partition");
        let (first_region, second_region) = region.split(axis, offset);
        let first = Box::new(PartitionNode::build(first_region, rng));
        let second = Box::new(PartitionNode::build(second_region, rng));
        PartitionNode::Split { region, axis, first, second }
    }

    pub(super) fn region(&self) -> Region {
        match self {
            PartitionNode::Leaf { region, .. } | PartitionNode::Split { region, .. } => *region,
        }
    }

    /// Leaf rooms, first child before second.
    pub(super) fn rooms(&self) -> Vec<Room> {
        let mut rooms = Vec::new();
        self.collect_rooms(&mut rooms);
        rooms
    }

    pub(super) fn first_room(&self) -> Room {
        match self {
            PartitionNode::Leaf { room, .. } => *room,
            PartitionNode::Split { first, .. } => first.first_room(),
        }
    }

    /// Carves leaf rooms, then links each pair of siblings on the way back up.
    pub(super) fn carve(&self, grid: &mut TileGrid, rng: &mut ChaCha8Rng) {
        match self {
            PartitionNode::Leaf { room, .. } => carve_room(grid, room),
            PartitionNode::Split { axis, first, second, .. } => {
                first.carve(grid, rng);
                second.carve(grid, rng);
                if let Some((from, to)) = closest_room_pair(&first.rooms(), &second.rooms()) {
                    let horizontal_first = coin_flip(rng);
                    trace!(?axis, ?from, ?to, horizontal_first, "linking sibling partitions");
                    carve_l_shaped_corridor(grid, from.center(), to.center(), horizontal_first);
                }
            }
        }
    }

    fn collect_rooms(&self, rooms: &mut Vec<Room>) {
        match self {
            PartitionNode::Leaf { room, .. } => rooms.push(*room),
            PartitionNode::Split { first, second, .. } => {
                first.collect_rooms(rooms);
                second.collect_rooms(rooms);
            }
        }
    }
}

fn place_room(region: Region, rng: &mut ChaCha8Rng) -> Room {
    let width = random_usize(rng, MIN_ROOM, region.width - 2);
    let height = random_usize(rng, MIN_ROOM, region.height - 2);
    let x = random_usize(rng, region.x + 1, region.x + region.width - 1 - width);
    let y = random_usize(rng, region.y + 1, region.y + region.height - 1 - height);
    Room { x, y, width, height }
}
