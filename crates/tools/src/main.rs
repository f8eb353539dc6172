use std::io;
use std::path::PathBuf;

use anyhow::{Context, Result, bail};
use clap::{Parser, Subcommand};
use serde::Serialize;
use tileworld::{
    FileStore, MemoryStore, Pos, SaveStore, Seed, Session, Signal, StringInput, World,
    format_snapshot_hash, mapgen,
};
use tracing::{Level, info};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run a scripted key sequence and print the final frame
    Play {
        /// Keys to feed, e.g. "n123swwdd"
        #[arg(short, long)]
        input: String,
        /// Save file used by `L` and `:Q`; defaults to an in-memory store
        #[arg(long)]
        save: Option<PathBuf>,
        /// Emit a JSON summary instead of the ASCII frame
        #[arg(long)]
        json: bool,
    },
    /// Print a freshly generated world
    Generate {
        /// Decimal seed; only the first 25 digits count
        #[arg(short, long)]
        seed: String,
    },
}

#[derive(Serialize)]
struct PlayReport {
    signal: &'static str,
    status: String,
    log: String,
    seed: Option<String>,
    player: Option<Pos>,
    light_on: Option<bool>,
    snapshot_hash: Option<String>,
    frame: Option<String>,
}

impl PlayReport {
    fn new(session: &Session, signal: Signal) -> Self {
        let world = session.world();
        Self {
            signal: signal_name(signal),
            status: format!("{:?}", session.status()),
            log: session.log().to_string(),
            seed: world.map(|world| world.seed().to_string()),
            player: world.map(World::player),
            light_on: world.map(World::light_on),
            snapshot_hash: world.map(|world| format_snapshot_hash(world.snapshot_hash())),
            frame: world.map(|world| world.grid().render_ascii()),
        }
    }
}

fn signal_name(signal: Signal) -> &'static str {
    match signal {
        Signal::Continue => "continue",
        Signal::Quit => "quit",
        Signal::SavedAndQuit => "saved_and_quit",
    }
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive(Level::INFO.into()))
        .with_writer(io::stderr)
        .init();

    match Cli::parse().command {
        Commands::Play { input, save, json } => {
            let mut file_store;
            let mut memory_store = MemoryStore::default();
            let store: &mut dyn SaveStore = match save {
                Some(path) => {
                    file_store = FileStore::new(path);
                    &mut file_store
                }
                None => &mut memory_store,
            };
            play(&input, store, json)
        }
        Commands::Generate { seed } => generate(&seed),
    }
}

fn play(input: &str, store: &mut dyn SaveStore, json: bool) -> Result<()> {
    let mut session = Session::new();
    let signal = session
        .run(&mut StringInput::new(input), store)
        .with_context(|| format!("Failed to run input {input:?}"))?;
    info!(signal = signal_name(signal), log = session.log(), "scripted session finished");

    let report = PlayReport::new(&session, signal);
    if json {
        let text = serde_json::to_string_pretty(&report).context("Failed to encode report")?;
        println!("{text}");
        return Ok(());
    }

    if let Some(frame) = &report.frame {
        print!("{frame}");
    }
    println!("Signal: {}", report.signal);
    println!("Status: {}", report.status);
    println!("Log: {}", report.log);
    if let (Some(seed), Some(player), Some(hash)) =
        (&report.seed, report.player, &report.snapshot_hash)
    {
        println!("Seed: {seed}");
        println!("Player: ({}, {})", player.x, player.y);
        println!("Snapshot Hash: {hash}");
    }
    Ok(())
}

fn generate(raw_seed: &str) -> Result<()> {
    if raw_seed.is_empty() || !raw_seed.chars().all(|ch| ch.is_ascii_digit()) {
        bail!("seed '{raw_seed}' must be a non-empty decimal number");
    }
    let world = mapgen::generate(Seed::from_digits(raw_seed));
    print!("{}", world.grid.render_ascii());
    println!("Seed: {}", world.seed);
    println!("Rooms: {}", world.rooms.len());
    println!("Player start: ({}, {})", world.player_start.x, world.player_start.y);
    Ok(())
}
