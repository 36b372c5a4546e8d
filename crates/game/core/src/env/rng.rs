//! Deterministic generator mirroring the game's request selection.
//!
//! The game draws weekly requests and bonus guarantees from a 128-bit
//! xorshift generator. Everything here is a pure function of its seed so the
//! reconstruction can run every frame and always agree with itself.
//!
//! # Determinism
//!
//! Given the same seed, [`Xorshift128`] produces the same sequence on every
//! platform: all arithmetic is wrapping 32-bit integer math.

/// Marsaglia xorshift128 generator.
///
/// # Properties
///
/// - **Deterministic**: Same seed always produces same output
/// - **Small state**: Four 32-bit words, never all zero after seeding
/// - **Cheap**: A handful of shifts and xors per draw
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Xorshift128 {
    state: [u32; 4],
}

impl Xorshift128 {
    /// Multiplier of the state-expansion recurrence `s[i+1] = s[i] * M + 1`.
    const SEED_MULTIPLIER: u32 = 1_812_433_253;

    /// Expands a 32-bit seed into the four state words.
    pub const fn new(seed: u32) -> Self {
        let s0 = seed;
        let s1 = s0.wrapping_mul(Self::SEED_MULTIPLIER).wrapping_add(1);
        let s2 = s1.wrapping_mul(Self::SEED_MULTIPLIER).wrapping_add(1);
        let s3 = s2.wrapping_mul(Self::SEED_MULTIPLIER).wrapping_add(1);
        Self {
            state: [s0, s1, s2, s3],
        }
    }

    /// Advance the generator and return the next 32-bit value.
    #[inline]
    pub fn next_u32(&mut self) -> u32 {
        let [x, y, z, w] = self.state;
        let t = x ^ (x << 11);
        let next = w ^ (w >> 19) ^ (t ^ (t >> 8));
        self.state = [y, z, w, next];
        next
    }

    /// Next value reduced modulo `bound`; `0` when `bound` is zero.
    #[inline]
    pub fn next_below(&mut self, bound: u32) -> u32 {
        if bound == 0 {
            return 0;
        }
        self.next_u32() % bound
    }
}

/// Seed used to draw the requests of one supply table.
///
/// The weekly supply seed is shared by every NPC; mixing in the supply id
/// keeps tables of equal shape from producing identical picks.
pub const fn request_seed(supply_seed: u32, supply_id: u32) -> u32 {
    // Golden-ratio multiplier spreads consecutive supply ids across the word.
    supply_seed ^ supply_id.wrapping_mul(0x9E37_79B9)
}
