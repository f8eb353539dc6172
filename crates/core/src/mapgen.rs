//! Procedural world generation: seeded binary partitioning, rooms, and corridors.

pub mod model;

mod generator;
mod grid;
mod layout;
mod partition;
mod seed;

pub use generator::MapGenerator;
pub use model::{GeneratedWorld, Room};
pub use seed::{MAX_SEED_DIGITS, Seed};

pub const WORLD_WIDTH: usize = 80;
pub const WORLD_HEIGHT: usize = 30;

pub fn generate(seed: Seed) -> GeneratedWorld {
    MapGenerator::new().generate(seed)
}
