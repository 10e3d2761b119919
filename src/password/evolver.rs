//! The password evolver: configuration, run summary and entry points.

use super::alphabet::Alphabet;
use super::problem::PasswordProblem;
use super::strength::{StrengthCriteria, MAX_SCORE};
use crate::error::{Error, Result};
use crate::ga::{check_probability, GaConfig, GaRunner, Selection};
use std::sync::atomic::AtomicBool;
use std::sync::Arc;

/// Configuration for [`PasswordEvolver`].
///
/// # Defaults
///
/// ```
/// use u_passgen::password::EvolverConfig;
///
/// let config = EvolverConfig::default();
/// assert_eq!(config.length, 12);
/// assert_eq!(config.population_size, 100);
/// assert_eq!(config.max_generations, 50);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct EvolverConfig {
    /// Password length in characters.
    pub length: usize,

    /// Number of candidates per generation.
    pub population_size: usize,

    /// Generation budget.
    pub max_generations: usize,

    /// Probability of crossing over an adjacent pair.
    pub crossover_rate: f64,

    /// Probability of mutating a candidate.
    pub mutation_rate: f64,

    /// Probability of replacing each character of a mutated candidate.
    pub gene_mutation_rate: f64,

    /// Number of candidates compared per tournament.
    pub tournament_size: usize,

    /// Length at which the length criterion of the score is met.
    pub min_length: usize,

    /// Random seed. `None` draws a fresh one per run.
    pub seed: Option<u64>,

    /// Optional wall-clock limit in milliseconds.
    pub time_limit_ms: Option<u64>,

    /// Evaluate candidates with rayon (`parallel` feature).
    pub parallel: bool,
}

impl Default for EvolverConfig {
    fn default() -> Self {
        Self {
            length: 12,
            population_size: 100,
            max_generations: 50,
            crossover_rate: 0.5,
            mutation_rate: 0.2,
            gene_mutation_rate: 0.3,
            tournament_size: 2,
            min_length: StrengthCriteria::default().min_length,
            seed: None,
            time_limit_ms: None,
            parallel: false,
        }
    }
}

impl EvolverConfig {
    /// Sets the password length.
    pub fn with_length(mut self, length: usize) -> Self {
        self.length = length;
        self
    }

    /// Sets the population size.
    pub fn with_population_size(mut self, n: usize) -> Self {
        self.population_size = n;
        self
    }

    /// Sets the generation budget.
    pub fn with_max_generations(mut self, n: usize) -> Self {
        self.max_generations = n;
        self
    }

    /// Sets the per-pair crossover probability.
    pub fn with_crossover_rate(mut self, rate: f64) -> Self {
        self.crossover_rate = rate;
        self
    }

    /// Sets the per-candidate mutation probability.
    pub fn with_mutation_rate(mut self, rate: f64) -> Self {
        self.mutation_rate = rate;
        self
    }

    /// Sets the per-character replacement probability.
    pub fn with_gene_mutation_rate(mut self, rate: f64) -> Self {
        self.gene_mutation_rate = rate;
        self
    }

    /// Sets the tournament size.
    pub fn with_tournament_size(mut self, k: usize) -> Self {
        self.tournament_size = k;
        self
    }

    /// Sets the length criterion threshold.
    pub fn with_min_length(mut self, min_length: usize) -> Self {
        self.min_length = min_length;
        self
    }

    /// Sets the random seed.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Sets the wall-clock limit.
    pub fn with_time_limit_ms(mut self, ms: u64) -> Self {
        self.time_limit_ms = Some(ms);
        self
    }

    /// Enables or disables parallel evaluation.
    pub fn with_parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }

    /// Validates every parameter.
    ///
    /// Returns [`Error::InvalidParameter`] for the first violation.
    pub fn validate(&self) -> Result<()> {
        if self.length == 0 {
            return Err(Error::invalid("length", "must be at least 1"));
        }
        check_probability("gene_mutation_rate", self.gene_mutation_rate)?;
        self.ga_config().validate()
    }

    /// The GA engine configuration derived from this one.
    pub fn ga_config(&self) -> GaConfig {
        GaConfig {
            population_size: self.population_size,
            max_generations: self.max_generations,
            selection: Selection::Tournament(self.tournament_size),
            crossover_rate: self.crossover_rate,
            mutation_rate: self.mutation_rate,
            parallel: self.parallel,
            seed: self.seed,
            time_limit_ms: self.time_limit_ms,
        }
    }
}

/// Summary of one evolution run.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Evolution {
    /// The strongest password found.
    pub password: String,
    /// Its strength score, in `0..=5`.
    pub strength: u8,
    /// Generations executed.
    pub generations: usize,
    /// Whether a maximum-strength password was found before the budget ran
    /// out.
    pub optimal: bool,
    /// Whether the run was cancelled.
    pub cancelled: bool,
    /// Whether the run hit its time limit.
    pub timed_out: bool,
    /// Best-so-far strength after initialization and after each generation.
    pub history: Vec<u8>,
}

/// Generates passwords by evolving random strings toward maximum strength.
///
/// ```
/// use u_passgen::password::{EvolverConfig, PasswordEvolver};
///
/// let evolver = PasswordEvolver::new(EvolverConfig::default().with_seed(42)).unwrap();
/// let password = evolver.generate().unwrap();
/// assert_eq!(password.chars().count(), 12);
/// ```
#[derive(Debug, Clone)]
pub struct PasswordEvolver {
    config: EvolverConfig,
    problem: PasswordProblem,
}

impl PasswordEvolver {
    /// Creates an evolver over the standard alphabet.
    pub fn new(config: EvolverConfig) -> Result<Self> {
        Self::with_alphabet(config, Alphabet::standard())
    }

    /// Creates an evolver over a custom alphabet.
    pub fn with_alphabet(config: EvolverConfig, alphabet: Alphabet) -> Result<Self> {
        config.validate()?;
        let problem = PasswordProblem::new(alphabet, config.length, config.gene_mutation_rate)
            .with_criteria(StrengthCriteria {
                min_length: config.min_length,
            });
        Ok(Self { config, problem })
    }

    /// The configuration in use.
    pub fn config(&self) -> &EvolverConfig {
        &self.config
    }

    /// The alphabet in use.
    pub fn alphabet(&self) -> &Alphabet {
        self.problem.alphabet()
    }

    /// Runs one evolution and returns its summary.
    pub fn run(&self) -> Result<Evolution> {
        self.run_with_cancel(None)
    }

    /// Runs one evolution that stops early once `cancel` is set.
    pub fn run_with_cancel(&self, cancel: Option<Arc<AtomicBool>>) -> Result<Evolution> {
        let result = GaRunner::run_with_cancel(&self.problem, &self.config.ga_config(), cancel)?;
        Ok(Evolution {
            strength: result.best_fitness,
            optimal: result.best_fitness >= MAX_SCORE,
            password: result.best.into_password(),
            generations: result.generations,
            cancelled: result.cancelled,
            timed_out: result.timed_out,
            history: result.fitness_history.iter().map(|&f| f as u8).collect(),
        })
    }

    /// Runs one evolution and returns only the password.
    pub fn generate(&self) -> Result<String> {
        self.run().map(|evolution| evolution.password)
    }
}

/// Evolves one password over the standard alphabet.
///
/// `crossover_rate` applies per adjacent pair and `mutation_rate` per
/// candidate; mutated candidates have each character replaced with
/// probability 0.3. Parameters are validated before any work is done.
///
/// ```
/// let password = u_passgen::evolve(12, 100, 50, 0.5, 0.2).unwrap();
/// assert_eq!(password.chars().count(), 12);
///
/// assert!(u_passgen::evolve(0, 100, 50, 0.5, 0.2).is_err());
/// ```
pub fn evolve(
    length: usize,
    population_size: usize,
    max_generations: usize,
    crossover_rate: f64,
    mutation_rate: f64,
) -> Result<String> {
    let config = EvolverConfig::default()
        .with_length(length)
        .with_population_size(population_size)
        .with_max_generations(max_generations)
        .with_crossover_rate(crossover_rate)
        .with_mutation_rate(mutation_rate);
    PasswordEvolver::new(config)?.generate()
}
