//! Random input generation.
//!
//! The generator is always passed in by the caller so runs can be reproduced from a seed.

use std::ops::RangeInclusive;
use rand::distributions::uniform::SampleUniform;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Create a random number generator, seeded if `seed` is given, from OS entropy otherwise.
pub fn create_rng(seed: Option<u64>) -> StdRng {
    match seed {
        Some(s) => StdRng::seed_from_u64(s),
        None => StdRng::from_entropy(),
    }
}

/// `len` values drawn uniformly from `range`.
///
/// # Panics
///
/// Panics if `range` is empty.
pub fn random_sequence<T, R>(rng: &mut R, len: usize, range: RangeInclusive<T>) -> Vec<T>
where
    T: SampleUniform + PartialOrd + Clone,
    R: Rng + ?Sized,
{
    (0..len).map(|_| rng.gen_range(range.clone())).collect()
}
