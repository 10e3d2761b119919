//! Password evolution expressed as a [`GaProblem`].

use super::alphabet::Alphabet;
use super::strength::{StrengthCriteria, MAX_SCORE};
use crate::ga::operators::{replace_mutation, two_point_crossover};
use crate::ga::{Fitness, GaProblem, Individual};
use rand::seq::IndexedRandom;
use rand::Rng;
use std::fmt;

/// A fixed-length password candidate and its strength score.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Candidate {
    genes: Vec<char>,
    fitness: u8,
}

impl Candidate {
    /// Wraps characters as an unscored candidate.
    pub fn new(genes: Vec<char>) -> Self {
        Self {
            genes,
            fitness: u8::worst(),
        }
    }

    /// The candidate's characters.
    pub fn genes(&self) -> &[char] {
        &self.genes
    }

    /// Number of characters.
    pub fn len(&self) -> usize {
        self.genes.len()
    }

    /// Whether the candidate has no characters.
    pub fn is_empty(&self) -> bool {
        self.genes.is_empty()
    }

    /// Consumes the candidate, returning the password string.
    pub fn into_password(self) -> String {
        self.genes.into_iter().collect()
    }
}

impl fmt::Display for Candidate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.genes.iter().try_for_each(|c| write!(f, "{c}"))
    }
}

impl Individual for Candidate {
    type Fitness = u8;

    fn fitness(&self) -> u8 {
        self.fitness
    }

    fn set_fitness(&mut self, fitness: u8) {
        self.fitness = fitness;
    }
}

/// Evolves strings of `length` characters from `alphabet` toward the
/// maximum strength score.
///
/// Operators:
/// - initialization: `length` characters drawn uniformly with replacement
/// - crossover: two-point segment exchange
/// - mutation: each position replaced with probability `gene_mutation_rate`
///   by a different alphabet character
#[derive(Debug, Clone)]
pub struct PasswordProblem {
    alphabet: Alphabet,
    length: usize,
    gene_mutation_rate: f64,
    criteria: StrengthCriteria,
}

impl PasswordProblem {
    /// Creates a problem with default strength criteria.
    ///
    /// Parameters are validated by [`EvolverConfig`](super::EvolverConfig);
    /// `gene_mutation_rate` must lie in `[0, 1]`.
    pub fn new(alphabet: Alphabet, length: usize, gene_mutation_rate: f64) -> Self {
        Self {
            alphabet,
            length,
            gene_mutation_rate,
            criteria: StrengthCriteria::default(),
        }
    }

    /// Replaces the strength criteria.
    pub fn with_criteria(mut self, criteria: StrengthCriteria) -> Self {
        self.criteria = criteria;
        self
    }

    /// The alphabet candidates are drawn from.
    pub fn alphabet(&self) -> &Alphabet {
        &self.alphabet
    }

    /// Candidate length.
    pub fn length(&self) -> usize {
        self.length
    }
}

impl GaProblem for PasswordProblem {
    type Individual = Candidate;

    fn create_individual<R: Rng>(&self, rng: &mut R) -> Candidate {
        let genes = (0..self.length)
            .filter_map(|_| self.alphabet.chars().choose(&mut *rng).copied())
            .collect();
        Candidate::new(genes)
    }

    fn evaluate(&self, candidate: &Candidate) -> u8 {
        self.criteria.score_chars(&candidate.genes)
    }

    fn crossover<R: Rng>(&self, first: &mut Candidate, second: &mut Candidate, rng: &mut R) {
        two_point_crossover(&mut first.genes, &mut second.genes, rng);
    }

    fn mutate<R: Rng>(&self, candidate: &mut Candidate, rng: &mut R) {
        replace_mutation(
            &mut candidate.genes,
            self.alphabet.chars(),
            self.gene_mutation_rate,
            rng,
        );
    }

    fn is_optimal(&self, fitness: u8) -> bool {
        fitness >= MAX_SCORE
    }
}
