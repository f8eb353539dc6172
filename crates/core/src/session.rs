//! Menu/seed/play state machine over the recorded input log.
//!
//! Every accepted key is appended to the log, and the log alone is what gets
//! saved. Loading rebuilds a session by replaying the stored log from scratch,
//! so a loaded game is indistinguishable from one that was played straight
//! through.

use thiserror::Error;
use tracing::{debug, info, warn};

use crate::input::{InputSource, StringInput};
use crate::mapgen::Seed;
use crate::save_file::{SaveError, SaveStore};
use crate::tiles::TileGrid;
use crate::types::{Direction, Status};
use crate::world::World;

const SAVE_PREFIX: char = ':';

/// What the caller should do after a key has been handled.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Signal {
    Continue,
    Quit,
    SavedAndQuit,
}

impl Signal {
    pub fn is_terminal(self) -> bool {
        !matches!(self, Signal::Continue)
    }
}

#[derive(Debug, Error)]
pub enum SessionError {
    #[error("no saved game to load")]
    NoSaveData,
    #[error(transparent)]
    Store(#[from] SaveError),
}

/// Side effect requested by a key, carried out by [`Session::feed`] and
/// discarded during replay.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Effect {
    None,
    Quit,
    SaveAndQuit,
    Load,
}

#[derive(Clone, Debug, Default)]
pub struct Session {
    status: Status,
    log: String,
    seed_digits: String,
    world: Option<World>,
    save_pending: bool,
}

impl Session {
    pub fn new() -> Self {
        Self::default()
    }

    /// Rebuilds a session from a stored log. Load, quit and save keys found in
    /// the log have no effect here.
    pub fn replay(log: &str) -> Self {
        let mut session = Self::new();
        for key in log.chars() {
            let effect = session.step(key);
            if effect != Effect::None {
                debug!(?effect, key = %key, "ignoring effect during replay");
            }
        }
        session.save_pending = false;
        session
    }

    pub fn status(&self) -> Status {
        self.status
    }

    pub fn log(&self) -> &str {
        &self.log
    }

    /// Digits typed on the seed screen so far, including any past the 25th.
    pub fn seed_digits(&self) -> &str {
        &self.seed_digits
    }

    pub fn world(&self) -> Option<&World> {
        self.world.as_ref()
    }

    pub fn feed(&mut self, key: char, store: &mut dyn SaveStore) -> Result<Signal, SessionError> {
        match self.step(key) {
            Effect::None => Ok(Signal::Continue),
            Effect::Quit => {
                info!(log_len = self.log.len(), "quit without saving");
                Ok(Signal::Quit)
            }
            Effect::SaveAndQuit => {
                store.save(&self.log)?;
                info!(log_len = self.log.len(), "saved input log");
                Ok(Signal::SavedAndQuit)
            }
            Effect::Load => {
                let log = store.load()?.ok_or(SessionError::NoSaveData)?;
                *self = Self::replay(&log);
                info!(log_len = self.log.len(), status = ?self.status, "loaded saved game");
                Ok(Signal::Continue)
            }
        }
    }

    /// Feeds keys until the source runs dry or a terminal signal comes back.
    pub fn run(
        &mut self,
        input: &mut impl InputSource,
        store: &mut dyn SaveStore,
    ) -> Result<Signal, SessionError> {
        while input.has_next() {
            let Some(key) = input.next_key() else {
                break;
            };
            let signal = self.feed(key, store)?;
            if signal.is_terminal() {
                return Ok(signal);
            }
        }
        Ok(Signal::Continue)
    }

    fn step(&mut self, key: char) -> Effect {
        let key = key.to_ascii_uppercase();

        if self.save_pending {
            self.save_pending = false;
            if key == 'Q' {
                return Effect::SaveAndQuit;
            }
            warn!(next = %key, "dropping ':' not followed by 'Q'");
        }

        if key == 'Q' {
            return Effect::Quit;
        }

        match (self.status, key) {
            (Status::Start, 'L') => Effect::Load,
            (Status::Start, 'N') => {
                self.status = Status::SeedEntry;
                self.log.push(key);
                Effect::None
            }
            (Status::SeedEntry, digit) if digit.is_ascii_digit() => {
                self.seed_digits.push(digit);
                self.log.push(digit);
                Effect::None
            }
            (Status::SeedEntry, 'S') => {
                let seed = Seed::from_digits(&self.seed_digits);
                debug!(%seed, digits = self.seed_digits.len(), "starting new world");
                self.world = Some(World::new(seed));
                self.status = Status::Play;
                self.log.push(key);
                Effect::None
            }
            (Status::Play, SAVE_PREFIX) => {
                self.save_pending = true;
                Effect::None
            }
            (Status::Play, key) => {
                if self.apply_play_key(key) {
                    self.log.push(key);
                }
                Effect::None
            }
            _ => Effect::None,
        }
    }

    /// Returns whether the key was recognised and should be logged.
    fn apply_play_key(&mut self, key: char) -> bool {
        let Some(world) = self.world.as_mut() else {
            return false;
        };
        if let Some(direction) = Direction::from_key(key) {
            self.status = world.move_player(direction);
            return true;
        }
        match key {
            'P' => world.set_light(true),
            'O' => world.set_light(false),
            _ => return false,
        }
        true
    }
}

/// Runs `input` against a fresh session and returns the final frame, if a
/// world was ever built.
pub fn interact_with_input_string(
    input: &str,
    store: &mut dyn SaveStore,
) -> Result<Option<TileGrid>, SessionError> {
    let mut session = Session::new();
    session.run(&mut StringInput::new(input), store)?;
    Ok(session.world().map(World::worldframe))
}
