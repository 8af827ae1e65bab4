//! Seeded pseudo-random stream and seed mixing for level generation.

use rand_chacha::{
    ChaCha8Rng,
    rand_core::{Rng, SeedableRng},
};

/// The single random stream a generation call draws from.
///
/// Draw order is part of the output contract: the same sequence of calls on a
/// stream built from the same seed yields the same values.
pub struct SeededStream {
    rng: ChaCha8Rng,
}

impl SeededStream {
    pub fn new(seed: u64) -> Self {
        Self { rng: ChaCha8Rng::seed_from_u64(seed) }
    }

    pub fn next_u64(&mut self) -> u64 {
        self.rng.next_u64()
    }

    /// Uniform value in `[min_value, max_value]`.
    pub fn range_inclusive(&mut self, min_value: usize, max_value: usize) -> usize {
        debug_assert!(min_value <= max_value);
        let range_size = (max_value - min_value) as u64 + 1;
        min_value + (self.next_u64() % range_size) as usize
    }

    pub fn pick_index(&mut self, len: usize) -> usize {
        debug_assert!(len > 0);
        (self.next_u64() % len as u64) as usize
    }

    /// Uniform float in `[0, 1)` built from the top 53 bits of one draw.
    pub fn unit_f64(&mut self) -> f64 {
        (self.next_u64() >> 11) as f64 * (1.0 / (1_u64 << 53) as f64)
    }

    pub fn chance(&mut self, probability: f64) -> bool {
        self.unit_f64() < probability
    }

    pub fn coin(&mut self) -> bool {
        self.next_u64() & 1 == 0
    }
}

/// Mixes run seed, level index and run mode into an independent level seed.
pub fn derive_level_seed(run_seed: u64, level_index: u32, mode_code: u64) -> u64 {
    let mut mixed = run_seed ^ 0x9E37_79B9_7F4A_7C15;
    mixed ^= u64::from(level_index).wrapping_mul(0xBF58_476D_1CE4_E5B9);
    mixed ^= mode_code.wrapping_mul(0x94D0_49BB_1331_11EB);
    mixed ^= mixed >> 30;
    mixed = mixed.wrapping_mul(0xBF58_476D_1CE4_E5B9);
    mixed ^= mixed >> 27;
    mixed = mixed.wrapping_mul(0x94D0_49BB_1331_11EB);
    mixed ^ (mixed >> 31)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn range_inclusive_stays_inside_requested_bounds() {
        let mut stream = SeededStream::new(12_345);
        for _ in 0..200 {
            let value = stream.range_inclusive(7, 13);
            assert!((7..=13).contains(&value));
        }
        assert_eq!(stream.range_inclusive(4, 4), 4);
    }

    #[test]
    fn chance_honours_degenerate_probabilities() {
        let mut stream = SeededStream::new(9);
        for _ in 0..100 {
            assert!(!stream.chance(0.0));
            assert!(stream.chance(1.0));
        }
    }

    #[test]
    fn identical_seeds_give_identical_streams() {
        let mut left = SeededStream::new(77);
        let mut right = SeededStream::new(77);
        for _ in 0..32 {
            assert_eq!(left.next_u64(), right.next_u64());
        }
    }

    #[test]
    fn level_seed_changes_when_inputs_change() {
        let baseline = derive_level_seed(99, 2, 0);
        assert_ne!(baseline, derive_level_seed(98, 2, 0));
        assert_ne!(baseline, derive_level_seed(99, 3, 0));
        assert_ne!(baseline, derive_level_seed(99, 2, 1));
        assert_eq!(baseline, derive_level_seed(99, 2, 0));
    }
}
