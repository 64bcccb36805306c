//! Seeded randomness for the `Random` direction

/// Number of bins a segment is shuffled in
pub const RANDOM_BINS: usize = 16;

/// `SplitMix64` generator owned by the engine state
#[derive(Debug, Clone)]
pub struct SplitMix64 {
    state: u64,
}

impl SplitMix64 {
    pub const fn new(seed: u64) -> Self {
        Self { state: seed }
    }

    pub fn next_u64(&mut self) -> u64 {
        self.state = self.state.wrapping_add(0x9e37_79b9_7f4a_7c15);
        let mut z = self.state;
        z = (z ^ (z >> 30)).wrapping_mul(0xbf58_476d_1ce4_e5b9);
        z = (z ^ (z >> 27)).wrapping_mul(0x94d0_49bb_1331_11eb);
        z ^ (z >> 31)
    }

    /// Uniform value in `0..bound`, zero when `bound` is zero
    #[allow(clippy::cast_possible_truncation)]
    pub fn below(&mut self, bound: u32) -> u32 {
        let high = self.next_u64() >> 32;
        ((high * u64::from(bound)) >> 32) as u32
    }
}

/// Bin permutation resolved once per show
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RandomLayout {
    bins: [u8; RANDOM_BINS],
}

impl RandomLayout {
    /// Identity layout, equivalent to left to right
    #[allow(clippy::cast_possible_truncation)]
    pub const fn identity() -> Self {
        let mut bins = [0u8; RANDOM_BINS];
        let mut i = 0;
        while i < RANDOM_BINS {
            bins[i] = i as u8;
            i += 1;
        }
        Self { bins }
    }

    /// Fisher-Yates shuffle of the identity layout
    #[allow(clippy::cast_possible_truncation)]
    pub fn shuffled(rng: &mut SplitMix64) -> Self {
        let mut layout = Self::identity();
        for i in (1..RANDOM_BINS).rev() {
            let j = rng.below(i as u32 + 1) as usize;
            layout.bins.swap(i, j);
        }
        layout
    }

    pub const fn bins(&self) -> &[u8; RANDOM_BINS] {
        &self.bins
    }

    /// Move a position in `[0, 1]` into its shuffled bin, keeping its offset
    #[allow(
        clippy::cast_possible_truncation,
        clippy::cast_sign_loss,
        clippy::cast_precision_loss
    )]
    pub fn remap(&self, position: f32) -> f32 {
        let bins = RANDOM_BINS as f32;
        let scaled = position.clamp(0.0, 1.0) * bins;
        let bin = (libm::floorf(scaled) as usize).min(RANDOM_BINS - 1);
        let within = scaled - bin as f32;
        (f32::from(self.bins[bin]) + within) / bins
    }
}

impl Default for RandomLayout {
    fn default() -> Self {
        Self::identity()
    }
}
