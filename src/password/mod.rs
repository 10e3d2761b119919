//! Evolutionary password generation.
//!
//! Candidates are fixed-length strings over an [`Alphabet`]. Their fitness
//! is a strength score in `0..=5` (see [`StrengthCriteria`]), and the
//! [`PasswordEvolver`] drives the [`ga`](crate::ga) engine until a candidate
//! reaches the maximum score or the generation budget runs out.
//!
//! # Key Types
//!
//! - [`EvolverConfig`]: lengths, rates, budget and seed
//! - [`PasswordEvolver`]: runs the search
//! - [`Evolution`]: password plus run statistics
//! - [`PasswordProblem`]: the [`GaProblem`](crate::ga::GaProblem) behind it

mod alphabet;
mod evolver;
mod problem;
mod strength;

pub use alphabet::{Alphabet, CharClass, DIGITS, LOWERCASE, PUNCTUATION, UPPERCASE};
pub use evolver::{evolve, Evolution, EvolverConfig, PasswordEvolver};
pub use problem::{Candidate, PasswordProblem};
pub use strength::{score, StrengthCriteria, StrengthReport, DEFAULT_MIN_LENGTH, MAX_SCORE};
