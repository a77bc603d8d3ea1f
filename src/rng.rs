//! Randomness used for shuffling.
//!
//! A game draws from, in order of precedence:
//!
//! 1. a source injected with [`GameState::with_random_source`],
//! 2. the process-wide generator installed with [`set_prng`],
//! 3. a `ChaCha8Rng` seeded from the game's 8-byte random state.
//!
//! [`GameState::with_random_source`]: crate::GameState::with_random_source

use rand::{RngCore, SeedableRng};
use rand_chacha::ChaCha8Rng;

use crate::sync::Mutex;

/// Process-wide generator signature.
///
/// The argument is the 8-byte random state of the game being shuffled. The
/// generator may use and update it freely.
pub type GeneratorFn = fn(&mut u64) -> u16;

static PRNG: Mutex<Option<GeneratorFn>> = Mutex::new(None);

/// A source of bounded integers.
pub trait RandomSource {
    /// Returns the next value.
    fn next_u16(&mut self) -> u16;
}

impl<R: RngCore + ?Sized> RandomSource for R {
    fn next_u16(&mut self) -> u16 {
        (self.next_u32() >> 16) as u16
    }
}

/// Installs the process-wide generator.
///
/// Takes effect for every later shuffle that has no injected source. It stays
/// installed until replaced or cleared.
pub fn set_prng(generator: GeneratorFn) {
    *PRNG.lock() = Some(generator);
}

/// Removes the process-wide generator, restoring the seeded default.
pub fn clear_prng() {
    *PRNG.lock() = None;
}

/// Returns the installed process-wide generator, if any.
#[must_use]
pub fn prng() -> Option<GeneratorFn> {
    *PRNG.lock()
}

/// Adapter feeding a game's random state to a [`GeneratorFn`].
pub(crate) struct GeneratorSource<'a> {
    generator: GeneratorFn,
    state: &'a mut u64,
}

impl<'a> GeneratorSource<'a> {
    pub(crate) const fn new(generator: GeneratorFn, state: &'a mut u64) -> Self {
        Self { generator, state }
    }
}

impl RandomSource for GeneratorSource<'_> {
    fn next_u16(&mut self) -> u16 {
        (self.generator)(self.state)
    }
}

/// Builds the default generator for the given random state.
pub(crate) fn seeded(state: u64) -> ChaCha8Rng {
    ChaCha8Rng::seed_from_u64(state)
}
