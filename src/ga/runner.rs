//! GA evolutionary loop execution.
//!
//! [`GaRunner`] orchestrates the complete evolutionary process:
//! initialization → evaluation → selection → crossover → mutation → repeat.
//!
//! Every random draw happens on one sequential generator, in a fixed order.
//! Parallel evaluation draws nothing, so a seed reproduces a run exactly
//! with or without the `parallel` feature.

use super::config::GaConfig;
use super::selection::tournament;
use super::types::{GaProblem, Individual};
use crate::random::create_rng;
use rand::Rng;

/// Result of a GA optimization run.
#[derive(Debug, Clone)]
pub struct GaResult<I: Individual> {
    /// The fittest individual of the final population.
    pub best: I,

    /// Fitness of `best`.
    pub best_fitness: f64,

    /// [`GaProblem::cost`] of `best`.
    pub best_cost: f64,

    /// Total number of generations executed.
    pub generations: usize,

    /// Best fitness of each evaluated population: the initial one, then one
    /// entry per generation.
    pub fitness_history: Vec<f64>,
}

/// Executes the GA evolutionary loop.
///
/// # Usage
///
/// ```ignore
/// let problem = RouteProblem::new(&distances);
/// let config = GaConfig::default().with_seed(42);
/// let result = GaRunner::run(&problem, &config);
/// println!("Best fitness: {}", result.best_fitness);
/// ```
pub struct GaRunner;

impl GaRunner {
    /// Runs the GA optimization.
    ///
    /// The loop has no early exit: it always runs `config.generations`
    /// generations, then returns the fittest member of the final population.
    ///
    /// # Panics
    /// Panics if the configuration is invalid (call [`GaConfig::validate`] first
    /// to get a descriptive error).
    pub fn run<P: GaProblem>(problem: &P, config: &GaConfig) -> GaResult<P::Individual> {
        if let Err(e) = config.validate() {
            panic!("invalid GaConfig: {e}");
        }

        let mut rng = create_rng(config.seed);
        let size = config.population_size;

        // 1. Initialize population
        let mut population: Vec<P::Individual> = (0..size)
            .map(|_| problem.create_individual(&mut rng))
            .collect();

        let mut fitness_history = Vec::with_capacity(config.generations + 1);

        // 2. Evolutionary loop
        for gen in 0..config.generations {
            evaluate_population(problem, &mut population, config.parallel);
            let gen_best = best_index(&population);
            let gen_best_fitness = population[gen_best].fitness();
            fitness_history.push(gen_best_fitness);

            // Selection
            let mut next_gen: Vec<P::Individual> = (0..size)
                .map(|_| {
                    let winner = tournament(&population, config.tournament_size, &mut rng);
                    population[winner].clone()
                })
                .collect();

            // Crossover on disjoint adjacent pairs; an odd tail is left alone
            for pair in next_gen.chunks_exact_mut(2) {
                if rng.random_range(0.0..1.0) < config.crossover_rate {
                    let (c1, c2) = problem.crossover(&pair[0], &pair[1], &mut rng);
                    pair[0] = c1;
                    pair[1] = c2;
                }
            }

            // Mutation
            for ind in next_gen.iter_mut() {
                if rng.random_range(0.0..1.0) < config.mutation_rate {
                    problem.mutate(ind, &mut rng);
                }
            }

            population = next_gen;

            problem.on_generation(gen + 1, gen_best_fitness);
        }

        // 3. Pick the best of the final population
        evaluate_population(problem, &mut population, config.parallel);
        let best = population.swap_remove(best_index(&population));
        fitness_history.push(best.fitness());

        GaResult {
            best_fitness: best.fitness(),
            best_cost: problem.cost(&best),
            best,
            generations: config.generations,
            fitness_history,
        }
    }
}

/// Evaluate all individuals in the population.
#[cfg(feature = "parallel")]
fn evaluate_population<P: GaProblem>(
    problem: &P,
    population: &mut [P::Individual],
    parallel: bool,
) {
    use rayon::prelude::*;

    if parallel {
        population.par_iter_mut().for_each(|ind| {
            let f = problem.evaluate(ind);
            ind.set_fitness(f);
        });
    } else {
        evaluate_sequential(problem, population);
    }
}

#[cfg(not(feature = "parallel"))]
fn evaluate_population<P: GaProblem>(
    problem: &P,
    population: &mut [P::Individual],
    _parallel: bool,
) {
    evaluate_sequential(problem, population);
}

fn evaluate_sequential<P: GaProblem>(problem: &P, population: &mut [P::Individual]) {
    for ind in population.iter_mut() {
        let f = problem.evaluate(ind);
        ind.set_fitness(f);
    }
}

/// Index of the individual with the highest fitness; the first one wins ties.
///
/// # Panics
/// Panics if `population` is empty.
fn best_index<I: Individual>(population: &[I]) -> usize {
    assert!(!population.is_empty(), "population must not be empty");
    let mut best = 0;
    for (i, ind) in population.iter().enumerate().skip(1) {
        if ind.fitness() > population[best].fitness() {
            best = i;
        }
    }
    best
}

// ============================================================================
// Tests
// ============================================================================
