//! RNG oracle for attack selection and critical-hit rolls.
//!
//! Every random draw in the rules goes through [`RngOracle`], so a session
//! can run on a seeded [`PcgRng`] in production and on a [`ScriptedRng`]
//! when a test or a replay needs exact rolls.
//!
//! # Draw order
//!
//! Each strike draws twice: first [`RngOracle::pick_index`] to select the
//! attack, then [`RngOracle::roll_d100`] for the critical check.

/// Source of random numbers for the rules.
pub trait RngOracle {
    /// Generate the next raw 32-bit value.
    fn next_u32(&mut self) -> u32;

    /// Roll a d100 (1-100 inclusive).
    ///
    /// Used for the critical-hit check.
    fn roll_d100(&mut self) -> u32 {
        (self.next_u32() % 100) + 1
    }

    /// Pick an index in `0..len` uniformly. Returns 0 for `len <= 1`.
    fn pick_index(&mut self, len: usize) -> usize {
        if len <= 1 {
            return 0;
        }
        self.next_u32() as usize % len
    }
}

impl<R: RngOracle + ?Sized> RngOracle for &mut R {
    fn next_u32(&mut self) -> u32 {
        (**self).next_u32()
    }
}

/// PCG random number generator (Permuted Congruential Generator).
///
/// PCG-XSH-RR: 64-bit LCG state, 32-bit permuted output.
///
/// - **Deterministic**: same seed, same sequence
/// - **Small state**: only 64 bits
///
/// Reference: <https://www.pcg-random.org/>
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PcgRng {
    state: u64,
}

impl PcgRng {
    /// PCG multiplier constant.
    const MULTIPLIER: u64 = 6364136223846793005;

    /// PCG increment constant.
    const INCREMENT: u64 = 1442695040888963407;

    pub const fn new(seed: u64) -> Self {
        Self { state: seed }
    }

    /// Advance the PCG state by one step.
    ///
    /// `state' = (state × multiplier + increment) mod 2^64`
    #[inline]
    fn pcg_step(state: u64) -> u64 {
        state
            .wrapping_mul(Self::MULTIPLIER)
            .wrapping_add(Self::INCREMENT)
    }

    /// XSH-RR output: xorshift high bits, then a state-dependent rotation.
    #[inline]
    fn pcg_output(state: u64) -> u32 {
        let xorshifted = (((state >> 18) ^ state) >> 27) as u32;
        let rot = (state >> 59) as u32;
        xorshifted.rotate_right(rot)
    }
}

impl RngOracle for PcgRng {
    fn next_u32(&mut self) -> u32 {
        self.state = Self::pcg_step(self.state);
        Self::pcg_output(self.state)
    }
}

/// Replays a fixed list of raw values, wrapping around at the end.
///
/// Build scripts with [`ScriptedRng::pick`] and [`ScriptedRng::roll`] so the
/// values line up with the draw order of a strike:
///
/// ```
/// use game_core::{RngOracle, ScriptedRng};
///
/// let mut rng = ScriptedRng::default().pick(2).roll(100);
/// assert_eq!(rng.pick_index(3), 2);
/// assert_eq!(rng.roll_d100(), 100);
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ScriptedRng {
    values: Vec<u32>,
    cursor: usize,
}

impl ScriptedRng {
    pub fn new(values: impl IntoIterator<Item = u32>) -> Self {
        Self {
            values: values.into_iter().collect(),
            cursor: 0,
        }
    }

    /// Queue an attack-table pick of `index`.
    #[must_use]
    pub fn pick(mut self, index: u32) -> Self {
        self.values.push(index);
        self
    }

    /// Queue a d100 roll landing on `roll` (1-100).
    #[must_use]
    pub fn roll(mut self, roll: u32) -> Self {
        self.values.push(roll.clamp(1, 100) - 1);
        self
    }

    /// Number of raw values consumed so far.
    pub fn consumed(&self) -> usize {
        self.cursor
    }
}

impl RngOracle for ScriptedRng {
    fn next_u32(&mut self) -> u32 {
        if self.values.is_empty() {
            return 0;
        }
        let value = self.values[self.cursor % self.values.len()];
        self.cursor += 1;
        value
    }
}
