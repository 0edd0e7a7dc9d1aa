//! Core trait definitions for the GA engine.
//!
//! [`Individual`] and [`GaProblem`] are the contract between the
//! evolutionary loop in [`GaRunner`](super::GaRunner) and a concrete
//! encoding such as [`RouteProblem`](super::RouteProblem).

use rand::Rng;

/// A candidate solution in the GA population.
///
/// Individuals carry their own fitness. **Higher fitness is better**: the
/// runner's selection and final pick both maximize.
pub trait Individual: Clone + Send + Sync {
    /// Current fitness of this individual.
    fn fitness(&self) -> f64;

    /// Stores the fitness computed by [`GaProblem::evaluate`].
    fn set_fitness(&mut self, fitness: f64);
}

/// Defines a GA optimization problem.
///
/// The runner decides *when* crossover and mutation happen (per-pair and
/// per-individual rates from [`GaConfig`](super::GaConfig)); the problem
/// decides *how*.
///
/// # Thread Safety
///
/// `Send + Sync` so that evaluation can run on rayon when the `parallel`
/// feature is enabled. Evaluation must not draw randomness.
pub trait GaProblem: Send + Sync {
    /// The individual (solution) type for this problem.
    type Individual: Individual;

    /// Creates a random valid individual.
    fn create_individual<R: Rng>(&self, rng: &mut R) -> Self::Individual;

    /// Computes fitness. Higher is better.
    fn evaluate(&self, individual: &Self::Individual) -> f64;

    /// Objective value in the problem's own units. Lower is better.
    ///
    /// Defaults to the negated fitness.
    fn cost(&self, individual: &Self::Individual) -> f64 {
        -self.evaluate(individual)
    }

    /// Recombines two parents into two children.
    ///
    /// The default implementation returns clones of the parents.
    fn crossover<R: Rng>(
        &self,
        parent1: &Self::Individual,
        parent2: &Self::Individual,
        _rng: &mut R,
    ) -> (Self::Individual, Self::Individual) {
        (parent1.clone(), parent2.clone())
    }

    /// Mutates an individual in place.
    ///
    /// The default implementation is a no-op.
    fn mutate<R: Rng>(&self, _individual: &mut Self::Individual, _rng: &mut R) {}

    /// Called at the end of each generation with the best fitness of the
    /// population that entered it. The default implementation is a no-op.
    fn on_generation(&self, _generation: usize, _best_fitness: f64) {}
}
