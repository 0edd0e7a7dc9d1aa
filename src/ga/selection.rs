//! Tournament selection.
//!
//! Samples a small subset of the population and keeps its fittest member,
//! biasing reproduction toward good routes without sorting.
//!
//! # References
//!
//! - Blickle & Thiele (1996), "A Comparison of Selection Schemes used in
//!   Evolutionary Algorithms"

use super::types::Individual;
use rand::seq::index;
use rand::Rng;

/// Picks `k` distinct individuals uniformly at random and returns the index
/// of the one with the highest fitness.
///
/// Sampling is without replacement inside one tournament; repeated calls
/// are independent, so the same individual may win several tournaments.
/// `k` is clamped to `1..=population.len()`. Ties go to the individual
/// drawn first.
///
/// # Complexity
/// O(k) per selection
///
/// # Panics
/// Panics if `population` is empty.
pub fn tournament<I: Individual, R: Rng>(population: &[I], k: usize, rng: &mut R) -> usize {
    assert!(
        !population.is_empty(),
        "cannot select from empty population"
    );

    let n = population.len();
    let k = k.clamp(1, n);

    let mut best_idx = usize::MAX;
    for idx in index::sample(rng, n, k).iter() {
        if best_idx == usize::MAX || population[idx].fitness() > population[best_idx].fitness() {
            best_idx = idx;
        }
    }
    best_idx
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::random::create_rng;

    #[derive(Clone)]
    struct TestInd {
        fit: f64,
    }

    impl Individual for TestInd {
        fn fitness(&self) -> f64 {
            self.fit
        }
        fn set_fitness(&mut self, f: f64) {
            self.fit = f;
        }
    }

    fn make_population(fitnesses: &[f64]) -> Vec<TestInd> {
        fitnesses.iter().map(|&f| TestInd { fit: f }).collect()
    }

    #[test]
    fn test_tournament_favors_best() {
        let pop = make_population(&[0.1, 0.2, 1.0, 0.125]);
        let mut rng = create_rng(Some(42));

        let mut counts = [0u32; 4];
        let n = 10000;
        for _ in 0..n {
            counts[tournament(&pop, 3, &mut rng)] += 1;
        }
        // Index 2 wins whenever it is drawn: 3 of 4 tournaments.
        assert!(
            counts[2] > 7000,
            "expected best to win ~75% of tournaments, got {}/{n}",
            counts[2]
        );
        // The worst individual can never win a size-3 tournament without replacement.
        assert_eq!(counts[0], 0);
    }

    #[test]
    fn test_full_tournament_always_picks_best() {
        let pop = make_population(&[0.3, 0.9, 0.5]);
        let mut rng = create_rng(Some(7));
        for _ in 0..100 {
            assert_eq!(tournament(&pop, 3, &mut rng), 1);
        }
    }

    #[test]
    fn test_tournament_size_1_is_uniform() {
        let pop = make_population(&[0.1, 0.2, 1.0, 0.125]);
        let mut rng = create_rng(Some(42));

        let mut counts = [0u32; 4];
        for _ in 0..10000 {
            counts[tournament(&pop, 1, &mut rng)] += 1;
        }
        for &c in &counts {
            assert!(c > 2000, "expected uniform, got counts: {counts:?}");
        }
    }

    #[test]
    fn test_oversized_tournament_is_clamped() {
        let pop = make_population(&[0.5, 0.7]);
        let mut rng = create_rng(Some(1));
        assert_eq!(tournament(&pop, 10, &mut rng), 1);
    }

    #[test]
    fn test_single_individual() {
        let pop = make_population(&[5.0]);
        let mut rng = create_rng(Some(42));
        assert_eq!(tournament(&pop, 3, &mut rng), 0);
    }

    #[test]
    #[should_panic(expected = "cannot select from empty population")]
    fn test_empty_population_panics() {
        let pop: Vec<TestInd> = vec![];
        let mut rng = create_rng(Some(42));
        tournament(&pop, 3, &mut rng);
    }
}
