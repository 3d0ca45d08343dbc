//! Processing-order randomization.
//!
//! Directory listings come back in a filesystem-dependent order; shuffling
//! keeps that order (and whatever caching it implies) out of the results.
//! The randomness source is injected so tests can use a seeded generator.

use std::time::SystemTime;
use std::time::UNIX_EPOCH;

use rand::Rng;
use rand::SeedableRng;
use rand::rngs::StdRng;

/// Shuffles `items` in place with a Fisher-Yates pass driven by `rng`.
///
/// Walks from the last index down to 1, swapping each element with one at a
/// uniformly chosen index in `[0, i]`, which yields every permutation with
/// equal probability.
///
/// # Examples
///
/// ```
/// use rand::SeedableRng;
/// use rand::rngs::StdRng;
/// use unzipbench_core::shuffle::shuffle;
///
/// let mut items = vec![1, 2, 3, 4, 5];
/// shuffle(&mut items, &mut StdRng::seed_from_u64(7));
///
/// let mut sorted = items.clone();
/// sorted.sort_unstable();
/// assert_eq!(sorted, [1, 2, 3, 4, 5]);
/// ```
pub fn shuffle<T, R: Rng>(items: &mut [T], rng: &mut R) {
    for i in (1..items.len()).rev() {
        let j = rng.random_range(0..=i);
        items.swap(i, j);
    }
}

/// Returns a generator seeded from the wall clock.
///
/// Not reproducible across runs; not suitable for anything beyond ordering
/// benchmark inputs.
#[must_use]
pub fn clock_seeded_rng() -> StdRng {
    #[allow(clippy::cast_possible_truncation)]
    let nanos = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map_or(0, |d| d.as_nanos() as u64);
    StdRng::seed_from_u64(nanos)
}
