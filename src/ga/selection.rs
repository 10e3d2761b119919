//! Selection strategies for the GA.
//!
//! Selection builds the next population from the evaluated offspring.
//!
//! # References
//!
//! - Blickle & Thiele (1996), "A Comparison of Selection Schemes used in
//!   Evolutionary Algorithms"
//! - Goldberg & Deb (1991), "A Comparative Analysis of Selection Schemes
//!   Used in Genetic Algorithms"

use super::types::Individual;
use rand::Rng;

/// Selection strategy.
///
/// All strategies assume **maximization** (higher fitness = better).
///
/// ```
/// use u_passgen::ga::Selection;
///
/// // Binary tournament (light pressure, the default)
/// let sel = Selection::default();
/// assert_eq!(sel, Selection::Tournament(2));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Selection {
    /// Tournament selection: sample `k` individuals uniformly with
    /// replacement and keep the fittest. Ties go to the first drawn.
    ///
    /// - k=2: light pressure (good for diversity)
    /// - k=3-5: moderate pressure
    ///
    /// # Complexity
    /// O(k) per selection
    Tournament(usize),
}

impl Default for Selection {
    fn default() -> Self {
        Selection::Tournament(2)
    }
}

impl Selection {
    /// Select one index from the population.
    ///
    /// # Panics
    /// Panics if `population` is empty.
    pub fn select<I: Individual, R: Rng>(&self, population: &[I], rng: &mut R) -> usize {
        assert!(
            !population.is_empty(),
            "cannot select from empty population"
        );

        match self {
            Selection::Tournament(k) => tournament(population, *k, rng),
        }
    }

    /// Select exactly `n` individuals (cloned) to form the next population.
    ///
    /// The pool may be larger or smaller than `n`; the output size is
    /// always `n`.
    pub fn select_population<I: Individual, R: Rng>(
        &self,
        pool: &[I],
        n: usize,
        rng: &mut R,
    ) -> Vec<I> {
        (0..n)
            .map(|_| pool[self.select(pool, rng)].clone())
            .collect()
    }
}

/// Tournament selection: pick k random individuals, return the best.
fn tournament<I: Individual, R: Rng>(population: &[I], k: usize, rng: &mut R) -> usize {
    let k = k.max(1);
    let n = population.len();

    let mut best_idx = rng.random_range(0..n);
    for _ in 1..k {
        let idx = rng.random_range(0..n);
        if population[idx].fitness() > population[best_idx].fitness() {
            best_idx = idx;
        }
    }
    best_idx
}

/// Index of the fittest individual; the first one wins ties.
///
/// Returns `None` for an empty slice.
pub fn best_index<I: Individual>(population: &[I]) -> Option<usize> {
    let mut iter = population.iter().enumerate();
    let (mut best_idx, first) = iter.next()?;
    let mut best_fitness = first.fitness();
    for (idx, ind) in iter {
        if ind.fitness() > best_fitness {
            best_idx = idx;
            best_fitness = ind.fitness();
        }
    }
    Some(best_idx)
}
