//! Random selection over a fixed set of choices.

use rand::distr::weighted::WeightedIndex;
use rand::distr::Distribution;
use rand::seq::IndexedRandom;
use rand::Rng;

/// Pick one item uniformly at random. Returns `None` for an empty slice.
pub fn pick_uniform<'a, T, R: Rng>(rng: &mut R, items: &'a [T]) -> Option<&'a T> {
    items.choose(rng)
}

/// Pick one value with probability proportional to its weight.
///
/// Returns `None` if `choices` is empty or every weight is zero.
pub fn pick_weighted<'a, T, R: Rng>(rng: &mut R, choices: &'a [(u32, T)]) -> Option<&'a T> {
    let dist = WeightedIndex::new(choices.iter().map(|(weight, _)| *weight)).ok()?;
    choices.get(dist.sample(rng)).map(|(_, value)| value)
}
