//! GA configuration.
//!
//! [`GaConfig`] holds all parameters that control the evolutionary loop.

use super::selection::Selection;
use crate::error::{Error, Result};

/// Configuration for the Genetic Algorithm.
///
/// # Defaults
///
/// ```
/// use u_passgen::ga::GaConfig;
///
/// let config = GaConfig::default();
/// assert_eq!(config.population_size, 100);
/// assert_eq!(config.max_generations, 50);
/// ```
///
/// # Builder Pattern
///
/// ```
/// use u_passgen::ga::{GaConfig, Selection};
///
/// let config = GaConfig::default()
///     .with_population_size(200)
///     .with_selection(Selection::Tournament(3))
///     .with_mutation_rate(0.1)
///     .with_seed(7);
/// assert!(config.validate().is_ok());
/// ```
///
/// Builders store rates as given; out-of-range values are reported by
/// [`validate`](GaConfig::validate) instead of being clamped.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GaConfig {
    /// Number of individuals in the population.
    pub population_size: usize,

    /// Maximum number of generations before termination.
    pub max_generations: usize,

    /// Selection strategy used to build the next population.
    pub selection: Selection,

    /// Probability of applying crossover to an adjacent pair (0.0–1.0).
    pub crossover_rate: f64,

    /// Probability of mutating an offspring (0.0–1.0).
    pub mutation_rate: f64,

    /// Whether to evaluate offspring in parallel.
    ///
    /// Only has an effect when the `parallel` feature is enabled.
    pub parallel: bool,

    /// Random seed for reproducibility.
    ///
    /// `None` draws a random seed.
    pub seed: Option<u64>,

    /// Optional wall-clock time limit in milliseconds.
    ///
    /// Checked at the start of each generation, so a run may exceed it by
    /// one generation's worth of work. `None` disables the limit.
    pub time_limit_ms: Option<u64>,
}

impl Default for GaConfig {
    fn default() -> Self {
        Self {
            population_size: 100,
            max_generations: 50,
            selection: Selection::default(),
            crossover_rate: 0.5,
            mutation_rate: 0.2,
            parallel: false,
            seed: None,
            time_limit_ms: None,
        }
    }
}

impl GaConfig {
    /// Sets the population size.
    pub fn with_population_size(mut self, n: usize) -> Self {
        self.population_size = n;
        self
    }

    /// Sets the maximum number of generations.
    pub fn with_max_generations(mut self, n: usize) -> Self {
        self.max_generations = n;
        self
    }

    /// Sets the selection strategy.
    pub fn with_selection(mut self, sel: Selection) -> Self {
        self.selection = sel;
        self
    }

    /// Sets the tournament size.
    ///
    /// Equivalent to `.with_selection(Selection::Tournament(k))`.
    pub fn with_tournament_size(self, k: usize) -> Self {
        self.with_selection(Selection::Tournament(k))
    }

    /// Sets the crossover rate.
    pub fn with_crossover_rate(mut self, rate: f64) -> Self {
        self.crossover_rate = rate;
        self
    }

    /// Sets the mutation rate.
    pub fn with_mutation_rate(mut self, rate: f64) -> Self {
        self.mutation_rate = rate;
        self
    }

    /// Enables or disables parallel evaluation.
    pub fn with_parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }

    /// Sets the random seed for reproducibility.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Sets the wall-clock time limit in milliseconds.
    pub fn with_time_limit_ms(mut self, ms: u64) -> Self {
        self.time_limit_ms = Some(ms);
        self
    }

    /// Validates the configuration.
    ///
    /// Returns [`Error::InvalidParameter`] naming the first invalid field.
    pub fn validate(&self) -> Result<()> {
        if self.population_size < 2 {
            return Err(Error::invalid(
                "population_size",
                "must be at least 2",
            ));
        }
        if self.max_generations == 0 {
            return Err(Error::invalid("max_generations", "must be at least 1"));
        }
        check_probability("crossover_rate", self.crossover_rate)?;
        check_probability("mutation_rate", self.mutation_rate)?;
        let Selection::Tournament(k) = self.selection;
        if k == 0 {
            return Err(Error::invalid("tournament_size", "must be at least 1"));
        }
        if self.time_limit_ms == Some(0) {
            return Err(Error::invalid(
                "time_limit_ms",
                "must be positive or None",
            ));
        }
        Ok(())
    }
}

/// Rejects NaN and anything outside `[0, 1]`.
pub(crate) fn check_probability(name: &'static str, p: f64) -> Result<()> {
    if (0.0..=1.0).contains(&p) {
        Ok(())
    } else {
        Err(Error::invalid(
            name,
            format!("must be a probability in [0, 1], got {p}"),
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = GaConfig::default();
        assert_eq!(config.population_size, 100);
        assert_eq!(config.max_generations, 50);
        assert_eq!(config.selection, Selection::Tournament(2));
        assert!((config.crossover_rate - 0.5).abs() < 1e-10);
        assert!((config.mutation_rate - 0.2).abs() < 1e-10);
        assert!(!config.parallel);
        assert!(config.seed.is_none());
        assert!(config.time_limit_ms.is_none());
    }

    #[test]
    fn test_builder_pattern() {
        let config = GaConfig::default()
            .with_population_size(200)
            .with_max_generations(1000)
            .with_tournament_size(4)
            .with_crossover_rate(0.8)
            .with_mutation_rate(0.05)
            .with_parallel(true)
            .with_seed(42)
            .with_time_limit_ms(500);

        assert_eq!(config.population_size, 200);
        assert_eq!(config.max_generations, 1000);
        assert_eq!(config.selection, Selection::Tournament(4));
        assert!((config.crossover_rate - 0.8).abs() < 1e-10);
        assert!((config.mutation_rate - 0.05).abs() < 1e-10);
        assert!(config.parallel);
        assert_eq!(config.seed, Some(42));
        assert_eq!(config.time_limit_ms, Some(500));
    }

    #[test]
    fn test_validate_ok() {
        assert!(GaConfig::default().validate().is_ok());
    }

    #[test]
    fn test_validate_population_too_small() {
        let err = GaConfig::default()
            .with_population_size(1)
            .validate()
            .unwrap_err();
        assert!(matches!(
            err,
            Error::InvalidParameter {
                name: "population_size",
                ..
            }
        ));
    }

    #[test]
    fn test_validate_zero_generations() {
        let config = GaConfig::default().with_max_generations(0);
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validate_rates_out_of_range() {
        for rate in [-0.1, 1.5, f64::NAN] {
            assert!(GaConfig::default()
                .with_crossover_rate(rate)
                .validate()
                .is_err());
            assert!(GaConfig::default()
                .with_mutation_rate(rate)
                .validate()
                .is_err());
        }
    }

    #[test]
    fn test_validate_rate_bounds_inclusive() {
        let config = GaConfig::default()
            .with_crossover_rate(0.0)
            .with_mutation_rate(1.0);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_validate_zero_tournament() {
        let config = GaConfig::default().with_tournament_size(0);
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validate_zero_time_limit() {
        let config = GaConfig::default().with_time_limit_ms(0);
        assert!(config.validate().is_err());
    }
}
