//! Route crossover and mutation.
//!
//! Both operators work on `&[usize]` routes and keep position 0 pinned to
//! stop 0: every child and every mutant is a valid route.
//!
//! # References
//!
//! - Davis (1985), "Applying Adaptive Algorithms to Epistatic Domains"
//! - Cicirello (2023), "Genetic Operators for Permutation Representation"

use rand::seq::index;
use rand::Rng;

/// Order Crossover (OX) with a fixed start.
///
/// # Algorithm
///
/// 1. Draw two distinct cut points from `1..=n-2` and sort them into
///    `start < end`
/// 2. Child A is `0`, then `parent1[start..end]`, then every remaining stop
///    in `parent2`'s order
/// 3. Child B is built the same way with the parents swapped
///
/// Routes shorter than 4 have no room for two interior cut points; the
/// parents are returned unchanged.
///
/// # Complexity
/// O(n) time, O(n) space
///
/// # Panics
/// Panics if parents have different lengths.
pub fn order_crossover<R: Rng>(
    parent1: &[usize],
    parent2: &[usize],
    rng: &mut R,
) -> (Vec<usize>, Vec<usize>) {
    let n = parent1.len();
    assert_eq!(n, parent2.len(), "parents must have equal length");

    if n < 4 {
        return (parent1.to_vec(), parent2.to_vec());
    }

    let (start, end) = interior_cut_points(n, rng);

    let child1 = ox_build_child(parent1, parent2, start, end);
    let child2 = ox_build_child(parent2, parent1, start, end);

    (child1, child2)
}

/// Build one OX child: start, then the segment of `template`, then the rest
/// of `donor` in order.
fn ox_build_child(template: &[usize], donor: &[usize], start: usize, end: usize) -> Vec<usize> {
    let n = template.len();
    let mut child = Vec::with_capacity(n);
    let mut taken = vec![false; n];

    child.push(0);
    taken[0] = true;

    for &stop in template[start..end].iter().chain(donor) {
        if !taken[stop] {
            child.push(stop);
            taken[stop] = true;
        }
    }

    child
}

/// Swap mutation: exchange two distinct positions from `1..n`.
///
/// No-op for routes shorter than 3, where no two movable positions exist.
///
/// # Complexity
/// O(1)
pub fn swap_mutation<R: Rng>(route: &mut [usize], rng: &mut R) {
    if let Some((i, j)) = movable_pair(route.len(), rng) {
        route.swap(i, j);
    }
}

/// Two distinct positions from `1..n`, or `None` if fewer than two exist.
pub(crate) fn movable_pair<R: Rng>(n: usize, rng: &mut R) -> Option<(usize, usize)> {
    if n < 3 {
        return None;
    }
    let picks = index::sample(rng, n - 1, 2);
    Some((picks.index(0) + 1, picks.index(1) + 1))
}

/// Two distinct cut points from `1..=n-2`, sorted. Requires `n >= 4`.
fn interior_cut_points<R: Rng>(n: usize, rng: &mut R) -> (usize, usize) {
    let picks = index::sample(rng, n - 2, 2);
    let a = picks.index(0) + 1;
    let b = picks.index(1) + 1;
    if a < b {
        (a, b)
    } else {
        (b, a)
    }
}
