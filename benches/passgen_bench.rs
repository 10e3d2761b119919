//! Criterion benchmarks for password evolution.
//!
//! Measures full evolver runs at several password lengths and the raw
//! genetic operators on character genes.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use rand::rngs::StdRng;
use rand::SeedableRng;
use u_passgen::ga::operators::{replace_mutation, two_point_crossover};
use u_passgen::password::{score, Alphabet, EvolverConfig, PasswordEvolver};

fn bench_evolve(c: &mut Criterion) {
    let mut group = c.benchmark_group("evolve");
    group.sample_size(20);

    for &length in &[8, 12, 32] {
        let evolver = PasswordEvolver::new(
            EvolverConfig::default()
                .with_length(length)
                .with_min_length(length)
                .with_seed(42),
        )
        .expect("valid config");
        group.bench_with_input(BenchmarkId::from_parameter(length), &evolver, |b, e| {
            b.iter(|| black_box(e.run()))
        });
    }
    group.finish();
}

fn bench_operators(c: &mut Criterion) {
    let alphabet = Alphabet::standard();
    let mut rng = StdRng::seed_from_u64(7);
    let p1: Vec<char> = "abcdefghijklmnopqrstuvwxyz012345".chars().collect();
    let p2: Vec<char> = "ABCDEFGHIJKLMNOPQRSTUVWXYZ!@#$%^".chars().collect();

    c.bench_function("two_point_crossover_32", |b| {
        b.iter(|| {
            let (mut a, mut z) = (p1.clone(), p2.clone());
            two_point_crossover(&mut a, &mut z, &mut rng);
            black_box((a, z))
        })
    });

    c.bench_function("replace_mutation_32", |b| {
        b.iter(|| {
            let mut genes = p1.clone();
            black_box(replace_mutation(&mut genes, alphabet.chars(), 0.3, &mut rng))
        })
    });

    c.bench_function("score_32", |b| b.iter(|| score(black_box("aB3$aB3$aB3$aB3$aB3$aB3$aB3$aB3$"))));
}

criterion_group!(benches, bench_evolve, bench_operators);
criterion_main!(benches);
