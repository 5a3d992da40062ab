//! Injectable randomness for every decision the agent makes.
//!
//! Path tie-breaking, exploration target selection, pursuit cooldowns and the
//! fallback step all draw from the single [`RngOracle`] owned by the agent.
//! Seeding it fixes the whole decision pipeline, which is what tests rely on.
//!
//! # Determinism
//!
//! Implementations must be deterministic: the same seed yields the same
//! sequence of values.

/// Source of randomness for agent decisions.
pub trait RngOracle {
    /// Next raw 32-bit value of the sequence.
    fn next_u32(&mut self) -> u32;

    /// Uniform value in `0..bound`. Returns `0` when `bound` is `0`.
    fn below(&mut self, bound: u32) -> u32 {
        if bound == 0 {
            return 0;
        }
        // Lemire's multiply-shift keeps the draw unbiased enough for grid sizes.
        ((self.next_u32() as u64 * bound as u64) >> 32) as u32
    }

    /// Uniform value in `[min, max]` inclusive.
    fn range(&mut self, min: u32, max: u32) -> u32 {
        if min >= max {
            return min;
        }
        min + self.below(max - min + 1)
    }

    /// Uniformly picks one element of `items`.
    fn choose<'a, T>(&mut self, items: &'a [T]) -> Option<&'a T>
    where
        Self: Sized,
    {
        if items.is_empty() {
            return None;
        }
        let index = self.below(items.len() as u32) as usize;
        items.get(index)
    }
}

/// PCG random number generator (PCG-XSH-RR, 64-bit state, 32-bit output).
///
/// - **Deterministic**: same seed, same sequence
/// - **Small state**: a single `u64`
/// - **Fast**: one multiply, one xorshift, one rotate per draw
///
/// Reference: <https://www.pcg-random.org/>
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PcgRng {
    state: u64,
}

impl PcgRng {
    const MULTIPLIER: u64 = 6364136223846793005;
    const INCREMENT: u64 = 1442695040888963407;

    /// Creates a generator whose sequence is fully determined by `seed`.
    pub fn seeded(seed: u64) -> Self {
        Self {
            state: Self::pcg_step(seed),
        }
    }

    #[inline]
    fn pcg_step(state: u64) -> u64 {
        state
            .wrapping_mul(Self::MULTIPLIER)
            .wrapping_add(Self::INCREMENT)
    }

    /// XSH-RR output permutation.
    #[inline]
    fn pcg_output(state: u64) -> u32 {
        let xorshifted = (((state >> 18) ^ state) >> 27) as u32;
        let rot = (state >> 59) as u32;
        xorshifted.rotate_right(rot)
    }
}

impl Default for PcgRng {
    fn default() -> Self {
        Self::seeded(0)
    }
}

impl RngOracle for PcgRng {
    fn next_u32(&mut self) -> u32 {
        let old = self.state;
        self.state = Self::pcg_step(old);
        Self::pcg_output(old)
    }
}
