//! Seed parsing and the deterministic pseudo-random stream used by generation.

use std::fmt;

use rand_chacha::{
    ChaCha8Rng,
    rand_core::{Rng, SeedableRng},
};

/// Digits past this count are still logged but do not affect the seed value.
pub const MAX_SEED_DIGITS: usize = 25;

/// World seed. 25 decimal digits do not fit in a `u64`, hence the `u128`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Seed(u128);

impl Seed {
    pub fn new(value: u128) -> Self {
        Self(value)
    }

    /// Reads the leading `MAX_SEED_DIGITS` ASCII digits; anything else is skipped.
    /// An empty buffer is seed zero.
    pub fn from_digits(digits: &str) -> Self {
        let value = digits
            .bytes()
            .filter(u8::is_ascii_digit)
            .take(MAX_SEED_DIGITS)
            .fold(0_u128, |acc, digit| acc * 10 + u128::from(digit - b'0'));
        Self(value)
    }

    pub fn value(self) -> u128 {
        self.0
    }
}

impl fmt::Display for Seed {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

pub(super) fn seeded_rng(seed: Seed) -> ChaCha8Rng {
    let mut key = [0_u8; 32];
    key[..16].copy_from_slice(&seed.0.to_le_bytes());
    ChaCha8Rng::from_seed(key)
}

pub(super) fn random_usize(rng: &mut ChaCha8Rng, min_value: usize, max_value: usize) -> usize {
    debug_assert!(min_value <= max_value);
    let range_size = (max_value - min_value + 1) as u64;
    min_value + (rng.next_u64() % range_size) as usize
}

pub(super) fn coin_flip(rng: &mut ChaCha8Rng) -> bool {
    rng.next_u64() & 1 == 0
}
