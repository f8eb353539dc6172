pub mod hash;
pub mod input;
pub mod mapgen;
pub mod save_file;
pub mod session;
pub mod tiles;
pub mod types;
pub mod visibility;
pub mod world;

pub use hash::format_snapshot_hash;
pub use input::{InputSource, StringInput};
pub use mapgen::{GeneratedWorld, MAX_SEED_DIGITS, MapGenerator, Room, Seed};
pub use save_file::{FileStore, MemoryStore, SaveError, SaveStore};
pub use session::{Session, SessionError, Signal, interact_with_input_string};
pub use tiles::TileGrid;
pub use types::*;
pub use visibility::{DEFAULT_LIGHT_RADIUS, VisibilityMask, compute_visible};
pub use world::World;
