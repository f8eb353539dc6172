//! Random key-stream fuzzer for the session state machine.
//!
//! Each run plays a random stream against a fresh session, then checks that the
//! player stands on a walkable tile, the floor is still connected, and that
//! saving at a random cut point and loading reproduces the uninterrupted run.

use anyhow::{Result, bail};
use clap::Parser;
use rand_chacha::{
    ChaCha8Rng,
    rand_core::{Rng, SeedableRng},
};
use tileworld::{MemoryStore, Session, Signal, StringInput, Tile};

const PLAY_KEYS: [char; 10] = ['W', 'A', 'S', 'D', 'w', 'a', 's', 'd', 'P', 'O'];
const NOISE_KEYS: [char; 4] = ['X', '7', ':', 'L'];

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Args {
    #[arg(short, long, default_value_t = 42)]
    seed: u64,
    #[arg(short, long, default_value_t = 200)]
    runs: u32,
    #[arg(short, long, default_value_t = 120)]
    keys: usize,
}

fn choose<T: Copy>(rng: &mut ChaCha8Rng, slice: &[T]) -> T {
    let p = rng.next_u64() as usize % slice.len();
    slice[p]
}

fn random_stream(rng: &mut ChaCha8Rng, len: usize) -> String {
    (0..len)
        .map(|_| {
            if rng.next_u64() % 10 == 0 { choose(rng, &NOISE_KEYS) } else { choose(rng, &PLAY_KEYS) }
        })
        .collect()
}

fn run(input: &str, store: &mut MemoryStore) -> Result<(Session, Signal)> {
    let mut session = Session::new();
    let signal = session.run(&mut StringInput::new(input), store)?;
    Ok((session, signal))
}

fn check_run(rng: &mut ChaCha8Rng, max_keys: usize) -> Result<()> {
    let seed = rng.next_u64() % 1_000_000_000;
    let prefix = format!("N{seed}S");
    let before_len = rng.next_u64() as usize % (max_keys + 1);
    let after_len = rng.next_u64() as usize % (max_keys + 1);
    let before = random_stream(rng, before_len);
    let after = random_stream(rng, after_len);

    let mut scratch = MemoryStore::default();
    let (straight, _) = run(&format!("{prefix}{before}{after}"), &mut scratch)?;
    let Some(world) = straight.world() else {
        bail!("seed {seed}: session never reached play");
    };
    if world.grid().tile_at(world.player()) != Tile::Player {
        bail!("seed {seed}: player marker missing at {:?}", world.player());
    }
    if world.grid().count(Tile::Player) != 1 {
        bail!("seed {seed}: expected exactly one player marker");
    }
    if !world.grid().walkable_tiles_connected() {
        bail!("seed {seed}: walkable tiles are disconnected");
    }

    let mut store = MemoryStore::default();
    let (_, signal) = run(&format!("{prefix}{before}:Q"), &mut store)?;
    if signal != Signal::SavedAndQuit {
        bail!("seed {seed}: expected save and quit, got {signal:?}");
    }
    let (resumed, _) = run(&format!("L{after}"), &mut store)?;
    let resumed_hash = resumed.world().map(|world| world.snapshot_hash());
    let straight_hash = straight.world().map(|world| world.snapshot_hash());
    if resumed_hash != straight_hash || resumed.log() != straight.log() {
        bail!("seed {seed}: save/load diverged for {before:?} + {after:?}");
    }
    Ok(())
}

fn main() -> Result<()> {
    let args = Args::parse();

    println!("Starting fuzz harness on seed {} for {} runs...", args.seed, args.runs);
    let mut rng = ChaCha8Rng::seed_from_u64(args.seed);
    for index in 0..args.runs {
        if let Err(err) = check_run(&mut rng, args.keys) {
            bail!("run {index} failed: {err}");
        }
    }

    println!("Fuzzing completed successfully.");
    Ok(())
}
