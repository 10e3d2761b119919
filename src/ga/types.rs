//! Core trait definitions for the GA engine.
//!
//! The two central traits, [`Individual`] and [`GaProblem`], define the
//! contract between the generic GA loop and a concrete problem such as
//! password evolution.

use rand::Rng;

/// Marker trait for fitness values.
///
/// Fitness is totally ordered and cheaply copyable.
/// **Higher fitness is considered better** (maximization).
///
/// Built-in implementations exist for the unsigned integer types, which
/// cover discrete scores like a password strength count.
pub trait Fitness: Ord + Copy + Send + Sync + std::fmt::Debug + 'static {
    /// Returns a value representing the worst possible fitness.
    ///
    /// Used for freshly created, not yet evaluated individuals.
    fn worst() -> Self;

    /// Converts the fitness to `f64` for logging and statistics.
    fn to_f64(self) -> f64;
}

macro_rules! impl_unsigned_fitness {
    ($($t:ty),*) => {
        $(
            impl Fitness for $t {
                fn worst() -> Self {
                    0
                }

                fn to_f64(self) -> f64 {
                    self as f64
                }
            }
        )*
    };
}

impl_unsigned_fitness!(u8, u16, u32, u64, usize);

/// A candidate solution in the GA population.
///
/// Individuals carry their own fitness value. The runner calls
/// [`GaProblem::evaluate`] and stores the result via
/// [`set_fitness`](Individual::set_fitness).
///
/// # Implementing
///
/// ```ignore
/// #[derive(Clone)]
/// struct Bits {
///     genes: Vec<bool>,
///     fitness: u32,
/// }
///
/// impl Individual for Bits {
///     type Fitness = u32;
///     fn fitness(&self) -> u32 { self.fitness }
///     fn set_fitness(&mut self, f: u32) { self.fitness = f; }
/// }
/// ```
pub trait Individual: Clone + Send + Sync {
    /// The fitness type. Must implement [`Fitness`].
    type Fitness: Fitness;

    /// Returns the current fitness of this individual.
    fn fitness(&self) -> Self::Fitness;

    /// Sets the fitness of this individual.
    fn set_fitness(&mut self, fitness: Self::Fitness);
}

/// Defines a GA optimization problem.
///
/// 1. **Initialization**: how to create random individuals
/// 2. **Evaluation**: how to compute fitness
/// 3. **Crossover**: how to recombine a pair of individuals in place
/// 4. **Mutation**: how to perturb an individual in place
/// 5. **Termination**: whether a fitness value is already optimal
///
/// Operators receive everything they need through `&self` and the RNG; the
/// runner keeps no shared operator registry.
pub trait GaProblem: Send + Sync {
    /// The individual (solution) type for this problem.
    type Individual: Individual;

    /// Creates a random individual.
    fn create_individual<R: Rng>(&self, rng: &mut R) -> Self::Individual;

    /// Evaluates an individual and returns its fitness.
    ///
    /// Higher values are better.
    fn evaluate(&self, individual: &Self::Individual) -> <Self::Individual as Individual>::Fitness;

    /// Recombines two individuals in place, turning both into offspring.
    ///
    /// The default implementation leaves both unchanged.
    fn crossover<R: Rng>(
        &self,
        _first: &mut Self::Individual,
        _second: &mut Self::Individual,
        _rng: &mut R,
    ) {
    }

    /// Mutates an individual in place.
    ///
    /// The default implementation is a no-op.
    fn mutate<R: Rng>(&self, _individual: &mut Self::Individual, _rng: &mut R) {}

    /// Returns `true` if `fitness` cannot be improved upon.
    ///
    /// The runner stops as soon as any offspring reaches an optimal fitness.
    /// The default never terminates early.
    fn is_optimal(&self, _fitness: <Self::Individual as Individual>::Fitness) -> bool {
        false
    }

    /// Called at the end of each generation with the best-so-far fitness.
    fn on_generation(
        &self,
        _generation: usize,
        _best_fitness: <Self::Individual as Individual>::Fitness,
    ) {
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unsigned_worst_is_zero() {
        assert_eq!(<u8 as Fitness>::worst(), 0);
        assert_eq!(<u32 as Fitness>::worst(), 0);
        assert_eq!(<usize as Fitness>::worst(), 0);
    }

    #[test]
    fn test_to_f64() {
        assert_eq!(5u8.to_f64(), 5.0);
        assert_eq!(42u64.to_f64(), 42.0);
    }
}
