//! GA evolutionary loop execution.
//!
//! [`GaRunner`] orchestrates the complete evolutionary process:
//! initialization → crossover → mutation → evaluation → selection → repeat.

use super::config::GaConfig;
use super::selection::best_index;
use super::types::{Fitness, GaProblem, Individual};
use crate::error::Result;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
#[cfg(feature = "parallel")]
use rayon::prelude::*;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::{Duration, Instant};
use tracing::{debug, info};

/// Result of a GA run.
#[derive(Debug, Clone)]
pub struct GaResult<I: Individual> {
    /// The best individual found during the entire run.
    pub best: I,

    /// Best fitness value (same as `best.fitness()`).
    pub best_fitness: I::Fitness,

    /// Number of generations executed.
    pub generations: usize,

    /// Whether the run stopped because an optimal individual appeared.
    pub optimal: bool,

    /// Whether the run was cancelled externally.
    pub cancelled: bool,

    /// Whether the run stopped on the wall-clock limit.
    pub timed_out: bool,

    /// Best-so-far fitness: the initial population, then one entry per
    /// generation. Never decreases.
    pub fitness_history: Vec<f64>,
}

/// Executes the GA evolutionary loop.
///
/// # Usage
///
/// ```ignore
/// let problem = MyProblem::new();
/// let config = GaConfig::default().with_seed(42);
/// let result = GaRunner::run(&problem, &config)?;
/// println!("Best fitness: {:?}", result.best_fitness);
/// ```
pub struct GaRunner;

impl GaRunner {
    /// Runs the GA optimization.
    ///
    /// Returns [`Error::InvalidParameter`](crate::Error::InvalidParameter)
    /// if the configuration does not validate.
    pub fn run<P: GaProblem>(problem: &P, config: &GaConfig) -> Result<GaResult<P::Individual>> {
        Self::run_with_cancel(problem, config, None)
    }

    /// Runs the GA with an optional cancellation token.
    ///
    /// If `cancel` is `Some` and the flag is set to `true`, the GA stops at
    /// the start of the next generation and returns the best solution found
    /// so far.
    pub fn run_with_cancel<P: GaProblem>(
        problem: &P,
        config: &GaConfig,
        cancel: Option<Arc<AtomicBool>>,
    ) -> Result<GaResult<P::Individual>> {
        config.validate()?;

        let seed = config.seed.unwrap_or_else(rand::random);
        let mut rng = StdRng::seed_from_u64(seed);
        let deadline = config
            .time_limit_ms
            .map(|ms| Instant::now() + Duration::from_millis(ms));

        // 1. Initialize and evaluate population
        let mut population: Vec<P::Individual> = (0..config.population_size)
            .map(|_| problem.create_individual(&mut rng))
            .collect();
        evaluate_population(problem, &mut population, config.parallel);

        // 2. Track best
        let mut best = population[best_of(&population)].clone();
        let mut fitness_history = Vec::with_capacity(config.max_generations + 1);
        fitness_history.push(best.fitness().to_f64());

        let mut generations = 0usize;
        let mut optimal = false;
        let mut cancelled = false;
        let mut timed_out = false;

        // 3. Evolutionary loop
        for gen in 0..config.max_generations {
            if let Some(ref flag) = cancel {
                if flag.load(Ordering::Relaxed) {
                    cancelled = true;
                    break;
                }
            }
            if deadline.is_some_and(|d| Instant::now() >= d) {
                timed_out = true;
                break;
            }

            // Variation: crossover on adjacent pairs, then mutation
            let mut offspring = population.clone();
            for pair in offspring.chunks_exact_mut(2) {
                if rng.random_range(0.0..1.0) < config.crossover_rate {
                    let (first, second) = pair.split_at_mut(1);
                    problem.crossover(&mut first[0], &mut second[0], &mut rng);
                }
            }
            for child in offspring.iter_mut() {
                if rng.random_range(0.0..1.0) < config.mutation_rate {
                    problem.mutate(child, &mut rng);
                }
            }

            evaluate_population(problem, &mut offspring, config.parallel);
            generations = gen + 1;

            // Update best
            let gen_best = &offspring[best_of(&offspring)];
            let gen_best_fitness = gen_best.fitness();
            if gen_best_fitness > best.fitness() {
                best = gen_best.clone();
            }

            fitness_history.push(best.fitness().to_f64());
            problem.on_generation(generations, best.fitness());
            debug!(
                generation = generations,
                generation_best = gen_best_fitness.to_f64(),
                best = best.fitness().to_f64(),
                "generation complete"
            );

            if problem.is_optimal(gen_best_fitness) {
                optimal = true;
                break;
            }

            population =
                config
                    .selection
                    .select_population(&offspring, config.population_size, &mut rng);
        }

        info!(
            seed,
            generations,
            best = best.fitness().to_f64(),
            optimal,
            cancelled,
            timed_out,
            "GA run finished"
        );

        Ok(GaResult {
            best_fitness: best.fitness(),
            best,
            generations,
            optimal,
            cancelled,
            timed_out,
            fitness_history,
        })
    }
}

/// Evaluate all individuals in the population.
#[cfg(feature = "parallel")]
fn evaluate_population<P: GaProblem>(
    problem: &P,
    population: &mut [P::Individual],
    parallel: bool,
) {
    if parallel {
        population.par_iter_mut().for_each(|ind| {
            let f = problem.evaluate(ind);
            ind.set_fitness(f);
        });
    } else {
        for ind in population.iter_mut() {
            let f = problem.evaluate(ind);
            ind.set_fitness(f);
        }
    }
}

/// Evaluate all individuals in the population.
#[cfg(not(feature = "parallel"))]
fn evaluate_population<P: GaProblem>(
    problem: &P,
    population: &mut [P::Individual],
    _parallel: bool,
) {
    for ind in population.iter_mut() {
        let f = problem.evaluate(ind);
        ind.set_fitness(f);
    }
}

/// Index of the fittest individual of a non-empty population.
fn best_of<I: Individual>(population: &[I]) -> usize {
    // Population size is validated to be at least 2.
    best_index(population).unwrap_or(0)
}

// ============================================================================
// Tests
// ============================================================================
