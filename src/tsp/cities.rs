//! City coordinates and tour length.

use super::tour::Tour;
use rand::Rng;

/// An immutable, indexed set of 2D city coordinates.
///
/// Indices `0..len()` are the stable identifiers used by [`Tour`].
#[derive(Debug, Clone, PartialEq)]
pub struct CitySet {
    coords: Vec<(f64, f64)>,
}

impl CitySet {
    /// Builds a city set from explicit coordinates.
    ///
    /// A tour needs at least two cities to be meaningful, so smaller
    /// inputs are rejected.
    pub fn new(coords: Vec<(f64, f64)>) -> Result<Self, String> {
        if coords.len() < 2 {
            return Err(format!(
                "city set needs at least 2 cities, got {}",
                coords.len()
            ));
        }
        Ok(Self { coords })
    }

    /// Generates `n` cities uniformly at random inside the bounding
    /// box `[min_coord, max_coord]` on both axes.
    pub fn random<R: Rng>(
        n: usize,
        min_coord: f64,
        max_coord: f64,
        rng: &mut R,
    ) -> Result<Self, String> {
        if min_coord >= max_coord {
            return Err(format!(
                "bounding box is empty: [{min_coord}, {max_coord}]"
            ));
        }
        let coords = (0..n)
            .map(|_| {
                (
                    rng.random_range(min_coord..max_coord),
                    rng.random_range(min_coord..max_coord),
                )
            })
            .collect();
        Self::new(coords)
    }

    /// Number of cities.
    #[allow(clippy::len_without_is_empty)]
    pub fn len(&self) -> usize {
        self.coords.len()
    }

    /// Coordinates of city `i`.
    pub fn coord(&self, i: usize) -> (f64, f64) {
        self.coords[i]
    }

    /// All coordinates, in index order. Drivers use this for plotting.
    pub fn coords(&self) -> &[(f64, f64)] {
        &self.coords
    }

    /// Total Euclidean length of the closed cycle described by `tour`:
    /// consecutive legs in tour order plus the edge from the last city
    /// back to the first.
    ///
    /// The tour is trusted to be a permutation over this set; scoring
    /// is a pure numeric function and does not re-validate.
    pub fn tour_length(&self, tour: &Tour) -> f64 {
        debug_assert_eq!(tour.len(), self.len());

        let order = tour.order();
        let mut total = 0.0;
        for leg in order.windows(2) {
            total += self.edge(leg[0], leg[1]);
        }
        total + self.edge(order[order.len() - 1], order[0])
    }

    fn edge(&self, a: usize, b: usize) -> f64 {
        let (ax, ay) = self.coords[a];
        let (bx, by) = self.coords[b];
        ((bx - ax).powi(2) + (by - ay).powi(2)).sqrt()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn square() -> CitySet {
        CitySet::new(vec![(0.0, 0.0), (10.0, 0.0), (10.0, 10.0), (0.0, 10.0)]).unwrap()
    }

    #[test]
    fn test_new_rejects_too_few_cities() {
        assert!(CitySet::new(vec![]).is_err());
        assert!(CitySet::new(vec![(1.0, 1.0)]).is_err());
    }

    #[test]
    fn test_random_respects_bounding_box() {
        let mut rng = StdRng::seed_from_u64(42);
        let cities = CitySet::random(50, -5.0, 5.0, &mut rng).unwrap();
        assert_eq!(cities.len(), 50);
        for &(x, y) in cities.coords() {
            assert!((-5.0..5.0).contains(&x));
            assert!((-5.0..5.0).contains(&y));
        }
    }

    #[test]
    fn test_random_rejects_empty_box() {
        let mut rng = StdRng::seed_from_u64(42);
        assert!(CitySet::random(10, 3.0, 3.0, &mut rng).is_err());
    }

    #[test]
    fn test_two_cities_go_there_and_back() {
        let cities = CitySet::new(vec![(0.0, 0.0), (3.0, 4.0)]).unwrap();
        let tour = Tour::new(vec![0, 1]).unwrap();
        // Single pairwise distance is 5; the cycle traverses it twice.
        assert!((cities.tour_length(&tour) - 10.0).abs() < 1e-12);
    }

    #[test]
    fn test_square_perimeter() {
        let cities = square();
        let tour = Tour::new(vec![0, 1, 2, 3]).unwrap();
        assert!((cities.tour_length(&tour) - 40.0).abs() < 1e-12);
    }

    #[test]
    fn test_crossing_square_tour_is_longer() {
        let cities = square();
        let crossing = Tour::new(vec![0, 2, 1, 3]).unwrap();
        assert!(cities.tour_length(&crossing) > 40.0);
    }

    #[test]
    fn test_coincident_cities_have_zero_length() {
        let cities = CitySet::new(vec![(2.0, 2.0); 5]).unwrap();
        let tour = Tour::new(vec![0, 1, 2, 3, 4]).unwrap();
        assert_eq!(cities.tour_length(&tour), 0.0);
    }

    proptest! {
        #[test]
        fn prop_length_non_negative(
            coords in proptest::collection::vec((0.0f64..100.0, 0.0f64..100.0), 2..24),
            seed in any::<u64>(),
        ) {
            let mut rng = StdRng::seed_from_u64(seed);
            let cities = CitySet::new(coords).unwrap();
            let tour = Tour::random(cities.len(), &mut rng);
            prop_assert!(cities.tour_length(&tour) >= 0.0);
        }

        #[test]
        fn prop_length_symmetric_under_reversal(
            coords in proptest::collection::vec((0.0f64..100.0, 0.0f64..100.0), 2..24),
            seed in any::<u64>(),
        ) {
            // The cycle is undirected: walking it backwards sums the
            // same edges.
            let mut rng = StdRng::seed_from_u64(seed);
            let cities = CitySet::new(coords).unwrap();
            let tour = Tour::random(cities.len(), &mut rng);
            let mut rev = tour.order().to_vec();
            rev.reverse();
            let reversed = Tour::new(rev).unwrap();

            let a = cities.tour_length(&tour);
            let b = cities.tour_length(&reversed);
            prop_assert!((a - b).abs() <= 1e-9 * a.max(1.0));
        }
    }
}
