//! Tour permutation value type.

use rand::seq::SliceRandom;
use rand::Rng;

/// A visiting order over city indices `0..n`, read as a closed cycle
/// (the last city connects back to the first).
///
/// Invariant: every index appears exactly once. A `Tour` is never
/// mutated in place; perturbation produces a fresh value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Tour {
    order: Vec<usize>,
}

impl Tour {
    /// Builds a tour from an explicit visiting order.
    ///
    /// Rejects anything that is not a non-empty permutation of
    /// `0..order.len()`.
    pub fn new(order: Vec<usize>) -> Result<Self, String> {
        if order.is_empty() {
            return Err("tour must visit at least one city".into());
        }
        let mut seen = vec![false; order.len()];
        for &city in &order {
            if city >= order.len() || seen[city] {
                return Err(format!(
                    "tour is not a permutation of 0..{}: index {city}",
                    order.len()
                ));
            }
            seen[city] = true;
        }
        Ok(Self { order })
    }

    /// A uniformly random permutation of `0..n`.
    pub fn random<R: Rng>(n: usize, rng: &mut R) -> Self {
        let mut order: Vec<usize> = (0..n).collect();
        order.shuffle(rng);
        Self { order }
    }

    /// Number of cities visited.
    pub fn len(&self) -> usize {
        self.order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    /// The visiting order.
    pub fn order(&self) -> &[usize] {
        &self.order
    }

    /// Returns a copy with one random contiguous segment reversed.
    ///
    /// Two distinct positions are drawn uniformly from `[0, n-2]` and
    /// sorted, and the inclusive segment between them is reversed in a
    /// copy of the tour. The final position never enters the draw, so
    /// the last city stays fixed; for a cycle this loses nothing, since
    /// any rotation names the same tour.
    ///
    /// For `n = 2` only one position is drawable and a one-element
    /// reversal is the identity, so the copy comes back unchanged.
    pub fn reverse_random_segment<R: Rng>(&self, rng: &mut R) -> Tour {
        let mut next = self.clone();
        let positions = self.order.len() - 1;
        if positions < 2 {
            return next;
        }

        let i = rng.random_range(0..positions);
        let mut j = rng.random_range(0..positions);
        while j == i {
            j = rng.random_range(0..positions);
        }

        let (lo, hi) = if i < j { (i, j) } else { (j, i) };
        next.order[lo..=hi].reverse();
        next
    }
}
