//! Criterion benchmarks for u-nsga2.
//!
//! Uses a binary-encoded ZDT1 problem to measure the evolutionary loop and
//! the non-dominated sort in isolation.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use u_nsga2::nsga2::ranking::non_dominated_sort;
use u_nsga2::nsga2::{BinaryProblem, BitGenome, Candidate, Minimize, Nsga2Config, Nsga2Runner};

// ===========================================================================
// ZDT1 over binary-encoded x ∈ [0, 1]^n
// ===========================================================================

struct Zdt1;

impl BinaryProblem for Zdt1 {
    fn evaluate(&self, genome: &BitGenome) -> Vec<f64> {
        let n = genome.dimension();
        let x: Vec<f64> = (0..n).map(|d| genome.decode_real(d, 0.0, 1.0)).collect();
        let f1 = x[0];
        let g = 1.0 + 9.0 * x[1..].iter().sum::<f64>() / (n - 1).max(1) as f64;
        let f2 = g * (1.0 - (f1 / g).sqrt());
        vec![f1, f2]
    }
}

// ===========================================================================
// Benchmarks
// ===========================================================================

fn bench_zdt1(c: &mut Criterion) {
    let mut group = c.benchmark_group("nsga2_zdt1");
    group.sample_size(10);

    for (dim, pop, gen) in [(10usize, 50usize, 50usize), (30, 100, 30)] {
        let config = Nsga2Config::default()
            .with_population_size(pop)
            .with_offspring_size(pop)
            .with_genome_shape(dim, 16)
            .with_max_generations(gen)
            .with_inverse_length_mutation()
            .with_seed(42);
        group.bench_with_input(
            BenchmarkId::new(format!("d{}_p{}_g{}", dim, pop, gen), dim),
            &config,
            |b, c| {
                b.iter(|| {
                    let result = Nsga2Runner::run(&Zdt1, black_box(c));
                    black_box(result)
                })
            },
        );
    }
    group.finish();
}

fn bench_non_dominated_sort(c: &mut Criterion) {
    let mut group = c.benchmark_group("non_dominated_sort");

    for &n in &[100usize, 400, 1000] {
        let mut rng = StdRng::seed_from_u64(42);
        let family: Vec<Candidate> = (0..n)
            .map(|_| {
                let objectives = (0..3).map(|_| rng.random_range(0.0..1.0)).collect();
                Candidate::new(BitGenome::new(1, 1), objectives)
            })
            .collect();
        group.bench_with_input(BenchmarkId::from_parameter(n), &family, |b, f| {
            b.iter(|| black_box(non_dominated_sort(f.clone(), &Minimize)))
        });
    }
    group.finish();
}

criterion_group!(benches, bench_zdt1, bench_non_dominated_sort);
criterion_main!(benches);
