//! Generic fixed-length genetic operators.
//!
//! These operate on gene slices of any element type and never change the
//! slice length, so any fixed-length encoding (strings, bit vectors,
//! integer vectors) can use them.
//!
//! # Crossover Operators
//!
//! - [`two_point_crossover`]: exchange the segment between two cut points
//!
//! # Mutation Operators
//!
//! - [`replace_mutation`]: per-gene replacement with a *different* allele
//!
//! # References
//!
//! - De Jong (1975), "An Analysis of the Behavior of a Class of Genetic
//!   Adaptive Systems"
//! - Eshelman, Caruana & Schaffer (1989), "Biases in the Crossover Landscape"

use rand::Rng;

// ============================================================================
// Crossover operators
// ============================================================================

/// Two-point crossover, in place.
///
/// Picks cut points `1 <= i < j <= n` with [`cut_points`] and swaps
/// `first[i..j]` with `second[i..j]`. Both slices keep their length and
/// every position keeps one of its two parental genes.
///
/// Returns the cut points used, or `None` when the shorter parent has fewer
/// than two genes (no valid cut exists and both are left unchanged).
///
/// # Complexity
/// O(n) time, O(1) extra space
pub fn two_point_crossover<T, R: Rng>(
    first: &mut [T],
    second: &mut [T],
    rng: &mut R,
) -> Option<(usize, usize)> {
    let n = first.len().min(second.len());
    let (i, j) = cut_points(n, rng)?;
    first[i..j].swap_with_slice(&mut second[i..j]);
    Some((i, j))
}

/// Draw two distinct cut points `1 <= i < j <= n`.
///
/// `i` is drawn from `1..=n`, `j` from `1..=n-1` and bumped past `i`, then
/// the pair is ordered. Every ordered pair is equally likely.
///
/// Returns `None` if `n < 2`.
pub fn cut_points<R: Rng>(n: usize, rng: &mut R) -> Option<(usize, usize)> {
    if n < 2 {
        return None;
    }
    let a = rng.random_range(1..=n);
    let mut b = rng.random_range(1..n);
    if b >= a {
        b += 1;
        Some((a, b))
    } else {
        Some((b, a))
    }
}

// ============================================================================
// Mutation operators
// ============================================================================

/// Replacement mutation over a finite allele set.
///
/// Each gene is independently chosen with probability `gene_rate`; a chosen
/// gene is replaced by a uniformly random allele from `alleles` **other
/// than its current value**, so every chosen position actually changes.
/// A gene that is not in `alleles` may be replaced by any allele.
///
/// Returns the number of genes changed.
///
/// # Panics
/// Panics if `gene_rate` is outside `[0, 1]`.
pub fn replace_mutation<T: PartialEq + Clone, R: Rng>(
    genes: &mut [T],
    alleles: &[T],
    gene_rate: f64,
    rng: &mut R,
) -> usize {
    if alleles.is_empty() {
        return 0;
    }

    let mut changed = 0;
    for gene in genes.iter_mut() {
        if !rng.random_bool(gene_rate) {
            continue;
        }
        let replacement = match alleles.iter().position(|a| a == gene) {
            Some(_) if alleles.len() < 2 => continue,
            Some(current) => {
                // Skip over the current allele.
                let mut idx = rng.random_range(0..alleles.len() - 1);
                if idx >= current {
                    idx += 1;
                }
                idx
            }
            None => rng.random_range(0..alleles.len()),
        };
        *gene = alleles[replacement].clone();
        changed += 1;
    }
    changed
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    // ---- Two-point crossover ----

    #[test]
    fn test_crossover_preserves_length() {
        let mut rng = StdRng::seed_from_u64(42);
        for _ in 0..100 {
            let mut a: Vec<char> = "aaaaaaaaaaaa".chars().collect();
            let mut b: Vec<char> = "BBBBBBBBBBBB".chars().collect();
            two_point_crossover(&mut a, &mut b, &mut rng);
            assert_eq!(a.len(), 12);
            assert_eq!(b.len(), 12);
        }
    }

    #[test]
    fn test_crossover_swaps_exactly_the_segment() {
        let mut rng = StdRng::seed_from_u64(3);
        let p1: Vec<u8> = (0..10).collect();
        let p2: Vec<u8> = (100..110).collect();

        for _ in 0..100 {
            let (mut c1, mut c2) = (p1.clone(), p2.clone());
            let (i, j) = two_point_crossover(&mut c1, &mut c2, &mut rng).unwrap();
            assert!(1 <= i && i < j && j <= 10);
            for k in 0..10 {
                if (i..j).contains(&k) {
                    assert_eq!((c1[k], c2[k]), (p2[k], p1[k]));
                } else {
                    assert_eq!((c1[k], c2[k]), (p1[k], p2[k]));
                }
            }
        }
    }

    #[test]
    fn test_crossover_single_gene_is_noop() {
        let mut rng = StdRng::seed_from_u64(42);
        let mut a = vec!['x'];
        let mut b = vec!['Y'];
        assert_eq!(two_point_crossover(&mut a, &mut b, &mut rng), None);
        assert_eq!(a, vec!['x']);
        assert_eq!(b, vec!['Y']);
    }

    #[test]
    fn test_cut_points_bounds() {
        let mut rng = StdRng::seed_from_u64(42);
        assert_eq!(cut_points(0, &mut rng), None);
        assert_eq!(cut_points(1, &mut rng), None);
        for _ in 0..1000 {
            let (i, j) = cut_points(12, &mut rng).unwrap();
            assert!(i >= 1, "i={i}");
            assert!(i < j, "i={i} j={j}");
            assert!(j <= 12, "j={j}");
        }
    }

    #[test]
    fn test_cut_points_two_genes() {
        let mut rng = StdRng::seed_from_u64(9);
        for _ in 0..50 {
            assert_eq!(cut_points(2, &mut rng), Some((1, 2)));
        }
    }

    // ---- Replacement mutation ----

    #[test]
    fn test_mutation_always_changes_selected_genes() {
        let mut rng = StdRng::seed_from_u64(42);
        let alleles: Vec<char> = "abc".chars().collect();
        for _ in 0..200 {
            let original: Vec<char> = "abcabcabc".chars().collect();
            let mut genes = original.clone();
            let changed = replace_mutation(&mut genes, &alleles, 1.0, &mut rng);
            assert_eq!(changed, genes.len());
            for (old, new) in original.iter().zip(&genes) {
                assert_ne!(old, new);
                assert!(alleles.contains(new));
            }
        }
    }

    #[test]
    fn test_mutation_rate_zero_is_noop() {
        let mut rng = StdRng::seed_from_u64(42);
        let alleles: Vec<char> = "xyz".chars().collect();
        let mut genes: Vec<char> = "xyzxyz".chars().collect();
        assert_eq!(replace_mutation(&mut genes, &alleles, 0.0, &mut rng), 0);
        assert_eq!(genes.iter().collect::<String>(), "xyzxyz");
    }

    #[test]
    fn test_mutation_count_matches_differences() {
        let mut rng = StdRng::seed_from_u64(11);
        let alleles: Vec<u8> = (0..10).collect();
        for _ in 0..100 {
            let original: Vec<u8> = (0..10).collect();
            let mut genes = original.clone();
            let changed = replace_mutation(&mut genes, &alleles, 0.3, &mut rng);
            let diffs = original.iter().zip(&genes).filter(|(a, b)| a != b).count();
            assert_eq!(changed, diffs);
        }
    }

    #[test]
    fn test_mutation_single_allele_cannot_change() {
        let mut rng = StdRng::seed_from_u64(42);
        let mut genes = vec![1u8, 1, 1];
        assert_eq!(replace_mutation(&mut genes, &[1u8], 1.0, &mut rng), 0);
        assert_eq!(genes, vec![1, 1, 1]);
    }

    #[test]
    fn test_mutation_foreign_gene_replaced() {
        let mut rng = StdRng::seed_from_u64(42);
        let mut genes = vec!['#'];
        assert_eq!(replace_mutation(&mut genes, &['a', 'b'], 1.0, &mut rng), 1);
        assert!(genes[0] == 'a' || genes[0] == 'b');
    }
}
