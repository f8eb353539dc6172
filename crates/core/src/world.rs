//! Live world state: the generated grid, the player marker, and the light toggle.

use tracing::trace;

use crate::mapgen::{self, GeneratedWorld, Seed};
use crate::tiles::TileGrid;
use crate::types::{Direction, Pos, Status, Tile};

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct World {
    seed: Seed,
    grid: TileGrid,
    player: Pos,
    light_on: bool,
}

impl World {
    pub fn new(seed: Seed) -> Self {
        Self::from_generated(mapgen::generate(seed))
    }

    pub fn from_generated(generated: GeneratedWorld) -> Self {
        let GeneratedWorld { seed, mut grid, player_start, .. } = generated;
        grid.set(player_start, Tile::Player);
        Self { seed, grid, player: player_start, light_on: false }
    }

    pub fn seed(&self) -> Seed {
        self.seed
    }

    pub fn player(&self) -> Pos {
        self.player
    }

    pub fn light_on(&self) -> bool {
        self.light_on
    }

    pub fn set_light(&mut self, on: bool) {
        self.light_on = on;
    }

    pub fn grid(&self) -> &TileGrid {
        &self.grid
    }

    /// Steps onto an in-bounds floor tile; anything else leaves the world untouched.
    pub fn move_player(&mut self, direction: Direction) -> Status {
        let destination = self.player.step(direction);
        if self.grid.get(destination) == Some(Tile::Floor) {
            self.grid.set(self.player, Tile::Floor);
            self.grid.set(destination, Tile::Player);
            self.player = destination;
        } else {
            trace!(?direction, from = ?self.player, "move blocked");
        }
        Status::Play
    }

    /// Owned copy of the current grid, player marker included.
    pub fn worldframe(&self) -> TileGrid {
        self.grid.clone()
    }

    pub fn describe(&self, pos: Pos) -> &'static str {
        self.grid.tile_at(pos).description()
    }
}
