//! Seeded random engine shared by every generator.
//!
//! [`SeededRng`] is a 31-bit linear congruential generator. Its constants are part of the
//! output format: exported layers are reproduced from `(config, seed)` alone, so changing
//! them is a breaking change. It implements [`RngCore`] so that generators can take the
//! same `&mut dyn RngCore` seam as the helpers below, while tests substitute stub RNGs.
use rand::RngCore;

const LCG_MULTIPLIER: u64 = 1_103_515_245;
const LCG_INCREMENT: u64 = 12_345;
const LCG_MODULUS: u64 = 1 << 31;
const STATE_MASK: u32 = 0x7fff_ffff;

/// Deterministic LCG: `state' = (a * state + c) mod 2^31`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SeededRng {
    state: u32,
}

impl SeededRng {
    /// Creates an engine from `seed`.
    ///
    /// A zero seed (after masking to 31 bits) draws a non-deterministic state. That is only
    /// acceptable for throwaway previews; persisted layers must carry a non-zero seed.
    pub fn new(seed: u32) -> Self {
        let mut state = seed & STATE_MASK;
        while state == 0 {
            state = rand::random::<u32>() & STATE_MASK;
        }
        Self { state }
    }

    /// Current internal state.
    pub fn state(&self) -> u32 {
        self.state
    }

    #[inline]
    fn advance(&mut self) -> u32 {
        let next = (LCG_MULTIPLIER * self.state as u64 + LCG_INCREMENT) % LCG_MODULUS;
        self.state = next as u32;
        self.state
    }

    /// Next value in `[0, 1)`.
    #[inline]
    pub fn next_float(&mut self) -> f64 {
        self.advance() as f64 / LCG_MODULUS as f64
    }

    /// Next value in `[min, max)` by linear interpolation of [`Self::next_float`].
    #[inline]
    pub fn next_range(&mut self, min: f64, max: f64) -> f64 {
        min + self.next_float() * (max - min)
    }

    /// Uniformly chosen element, or `None` for an empty slice.
    ///
    /// The draw is consumed either way.
    #[inline]
    pub fn next_item<'a, T>(&mut self, items: &'a [T]) -> Option<&'a T> {
        let roll = self.next_float();
        index_for(roll, items.len()).map(|i| &items[i])
    }
}

impl RngCore for SeededRng {
    // Shifted so that `rand01` divides back to exactly `state / 2^31`.
    fn next_u32(&mut self) -> u32 {
        self.advance() << 1
    }

    fn next_u64(&mut self) -> u64 {
        let hi = self.next_u32() as u64;
        let lo = self.next_u32() as u64;
        (hi << 32) | lo
    }

    fn fill_bytes(&mut self, dest: &mut [u8]) {
        for chunk in dest.chunks_mut(4) {
            let bytes = self.next_u32().to_le_bytes();
            chunk.copy_from_slice(&bytes[..chunk.len()]);
        }
    }
}

/// Generate a random float in the range [0, 1).
#[inline]
pub fn rand01(rng: &mut dyn RngCore) -> f64 {
    rng.next_u32() as f64 / (u32::MAX as f64 + 1.0)
}

/// Generate a random float in `[min, max)`.
#[inline]
pub fn rand_range(rng: &mut dyn RngCore, min: f64, max: f64) -> f64 {
    min + rand01(rng) * (max - min)
}

/// Pick an element uniformly; consumes exactly one draw, `None` when `items` is empty.
#[inline]
pub fn pick<'a, T>(rng: &mut dyn RngCore, items: &'a [T]) -> Option<&'a T> {
    let roll = rand01(rng);
    index_for(roll, items.len()).map(|i| &items[i])
}

#[inline]
fn index_for(roll: f64, len: usize) -> Option<usize> {
    if len == 0 {
        return None;
    }
    Some(((roll * len as f64).floor() as usize).min(len - 1))
}

/// Deterministic per-shape value derived from a layer seed without consuming draws.
pub fn seed_for_shape(base_seed: u32, index: u32) -> u64 {
    let mixed = (base_seed as u64) ^ (index as u64).wrapping_mul(0x9E3779B97F4A7C15);
    mix_u64(mixed)
}

#[inline]
fn mix_u64(mut x: u64) -> u64 {
    x ^= x >> 30;
    x = x.wrapping_mul(0xBF58476D1CE4E5B9);
    x ^= x >> 27;
    x = x.wrapping_mul(0x94D049BB133111EB);
    x ^ (x >> 31)
}
