//! SA execution loop.

use super::config::SaConfig;
use super::types::SaProblem;
use crate::random::create_rng;
use rand::Rng;

/// Result of a Simulated Annealing run.
#[derive(Debug, Clone)]
pub struct SaResult<S: Clone> {
    /// The best solution seen at any point of the run.
    pub best: S,

    /// Cost of the best solution.
    pub best_cost: f64,

    /// Cost of the initial solution. Never below `best_cost`.
    pub initial_cost: f64,

    /// Total number of iterations (neighbor evaluations).
    pub iterations: usize,

    /// Final temperature when the algorithm stopped.
    pub final_temperature: f64,

    /// Number of accepted moves (including improvements).
    pub accepted_moves: usize,

    /// Number of improving moves.
    pub improving_moves: usize,
}

/// Executes the Simulated Annealing algorithm.
pub struct SaRunner;

impl SaRunner {
    /// Runs SA optimization.
    ///
    /// One neighbor is evaluated per temperature step; the temperature is
    /// multiplied by `cooling_rate` after each step until it is no longer
    /// above `min_temperature`.
    ///
    /// # Panics
    /// Panics if the configuration is invalid.
    pub fn run<P: SaProblem>(problem: &P, config: &SaConfig) -> SaResult<P::Solution> {
        if let Err(e) = config.validate() {
            panic!("invalid SaConfig: {e}");
        }

        let mut rng = create_rng(config.seed);

        // Initialize
        let mut current = problem.initial_solution(&mut rng);
        let mut current_cost = problem.cost(&current);
        let initial_cost = current_cost;
        let mut best = current.clone();
        let mut best_cost = current_cost;

        let mut temperature = config.initial_temperature;
        let mut iterations = 0usize;
        let mut accepted_moves = 0usize;
        let mut improving_moves = 0usize;

        while temperature > config.min_temperature {
            let neighbor = problem.neighbor(&current, &mut rng);
            let neighbor_cost = problem.cost(&neighbor);
            let delta = neighbor_cost - current_cost;

            // Metropolis acceptance criterion
            let accept = if delta < 0.0 {
                improving_moves += 1;
                true
            } else {
                let probability = (-delta / temperature).exp();
                rng.random_range(0.0..1.0) < probability
            };

            if accept {
                current = neighbor;
                current_cost = neighbor_cost;
                accepted_moves += 1;

                if current_cost < best_cost {
                    best = current.clone();
                    best_cost = current_cost;
                    tracing::trace!(iteration = iterations, best_cost, temperature, "sa improvement");
                }
            }

            iterations += 1;

            // Cool down
            temperature *= config.cooling_rate;
        }

        SaResult {
            best,
            best_cost,
            initial_cost,
            iterations,
            final_temperature: temperature,
            accepted_moves,
            improving_moves,
        }
    }
}
