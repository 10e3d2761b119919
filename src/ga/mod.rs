//! Genetic Algorithm engine.
//!
//! A generic GA built on trait-based abstractions. A problem plugs in by
//! implementing [`GaProblem`], which specifies how to create, evaluate,
//! recombine and mutate individuals, and when a fitness is already optimal.
//!
//! # Core Traits
//!
//! - [`Individual`]: A candidate solution with associated fitness type
//! - [`GaProblem`]: Problem definition: initialization, evaluation, operators
//!
//! # Key Types
//!
//! - [`GaConfig`]: Algorithm parameters (population size, rates, seed)
//! - [`GaRunner`]: Executes the evolutionary loop
//! - [`GaResult`]: Final result with run statistics
//!
//! # Submodules
//!
//! - [`operators`]: Fixed-length two-point crossover and replacement mutation
//!
//! # References
//!
//! - Holland (1975), *Adaptation in Natural and Artificial Systems*
//! - Goldberg (1989), *Genetic Algorithms in Search, Optimization, and Machine Learning*
//! - De Jong (2006), *Evolutionary Computation: A Unified Approach*

mod config;
pub mod operators;
mod runner;
mod selection;
mod types;

pub use config::GaConfig;
pub(crate) use config::check_probability;
pub use runner::{GaResult, GaRunner};
pub use selection::{best_index, Selection};
pub use types::{Fitness, GaProblem, Individual};
