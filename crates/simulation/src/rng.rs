//! Deterministic random source for the simulator.
//!
//! The engine draws every random value from a [`Mulberry32`] generator seeded
//! from the simulation input, so the same parameters always produce the same
//! curve and the same signals. The generator implements the `rand` traits and
//! can be used wherever an [`RngCore`] is expected.

use rand::{RngCore, SeedableRng};
use tradesim_domain::SimulationInput;

const GOLDEN_GAMMA: u32 = 0x6D2B_79F5;
const TWO_POW_32: f64 = 4_294_967_296.0;

/// Mulberry32 generator: a single 32-bit state word advanced by a Weyl
/// sequence and scrambled with multiply/xor-shift rounds.
///
/// All arithmetic wraps at 32 bits.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Mulberry32 {
    state: u32,
}

impl Mulberry32 {
    /// Creates a generator from a 32-bit seed.
    #[must_use]
    pub fn new(seed: u32) -> Self {
        Self { state: seed }
    }

    /// Creates the generator for a simulation run.
    #[must_use]
    pub fn for_input(input: &SimulationInput) -> Self {
        Self::new(derive_seed(input))
    }

    /// Current internal state.
    #[must_use]
    pub fn state(&self) -> u32 {
        self.state
    }

    /// Returns the next value in `[0, 1)`.
    pub fn next_f64(&mut self) -> f64 {
        f64::from(self.next_u32()) / TWO_POW_32
    }

    fn step(&mut self) -> u32 {
        self.state = self.state.wrapping_add(GOLDEN_GAMMA);
        let mut t = self.state;
        t = (t ^ (t >> 15)).wrapping_mul(t | 1);
        t ^= t.wrapping_add((t ^ (t >> 7)).wrapping_mul(t | 61));
        t ^ (t >> 14)
    }
}

impl RngCore for Mulberry32 {
    fn next_u32(&mut self) -> u32 {
        self.step()
    }

    fn next_u64(&mut self) -> u64 {
        let lo = u64::from(self.step());
        let hi = u64::from(self.step());
        (hi << 32) | lo
    }

    fn fill_bytes(&mut self, dst: &mut [u8]) {
        for chunk in dst.chunks_mut(4) {
            let bytes = self.step().to_le_bytes();
            chunk.copy_from_slice(&bytes[..chunk.len()]);
        }
    }
}

impl SeedableRng for Mulberry32 {
    type Seed = [u8; 4];

    fn from_seed(seed: Self::Seed) -> Self {
        Self::new(u32::from_le_bytes(seed))
    }
}

/// Uniform draws in `[0, 1)` with 32 bits of resolution.
///
/// Every [`RngCore`] gets this for free; for [`Mulberry32`] it is the same
/// stream as [`Mulberry32::next_f64`].
pub trait UnitSource {
    fn next_unit(&mut self) -> f64;
}

impl<R: RngCore + ?Sized> UnitSource for R {
    fn next_unit(&mut self) -> f64 {
        f64::from(self.next_u32()) / TWO_POW_32
    }
}

/// Derives the generator seed for a simulation input:
/// `floor(capital * risk_multiplier + duration_months * 97)`, wrapped into
/// the 32-bit domain.
#[must_use]
pub fn derive_seed(input: &SimulationInput) -> u32 {
    let weighted_capital = input.capital * input.risk.multiplier();
    let raw = (weighted_capital + f64::from(input.duration_months) * 97.0).floor();
    if !raw.is_finite() {
        return 0;
    }
    raw.rem_euclid(TWO_POW_32) as u32
}
