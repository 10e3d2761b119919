//! Evolutionary password generator.
//!
//! Passwords are produced by a small genetic algorithm: a population of
//! random fixed-length strings is recombined (two-point crossover), mutated
//! (per-character replacement) and filtered (binary tournament) until a
//! string satisfies every strength criterion (lowercase, uppercase, digit,
//! punctuation, minimum length) or the generation budget is spent.
//!
//! - [`ga`]: Generic GA engine: traits, configuration, selection,
//!   operators and the evolutionary loop.
//! - [`password`]: Alphabet, strength scoring and the [`PasswordEvolver`].
//! - [`vault`]: Ordered in-memory table of saved passwords.
//! - [`session`]: Generate-then-save state for interactive front ends.
//!
//! # Quick start
//!
//! ```
//! use u_passgen::{EvolverConfig, PasswordEvolver, Session};
//!
//! let evolver = PasswordEvolver::new(EvolverConfig::default().with_seed(7)).unwrap();
//! let mut session = Session::new(evolver);
//! session.generate().unwrap();
//! session.save("example.com").unwrap();
//! assert_eq!(session.vault().len(), 1);
//! ```

pub mod error;
pub mod ga;
pub mod password;
pub mod session;
pub mod vault;

#[cfg(feature = "wasm")]
pub mod wasm;

pub use error::{Error, Result};
pub use password::{evolve, Evolution, EvolverConfig, PasswordEvolver};
pub use session::Session;
pub use vault::{Vault, VaultEntry};
