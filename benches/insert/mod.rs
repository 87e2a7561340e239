use avlset::AvlTree;
use criterion::{measurement::Measurement, BenchmarkGroup, BenchmarkId, Criterion, Throughput};

use crate::Lfsr;

#[derive(Debug, Clone, Copy)]
struct BenchName {
    order: &'static str,
    n_values: usize,
}

impl From<BenchName> for BenchmarkId {
    fn from(v: BenchName) -> Self {
        Self::new(format!("{}/n_values", v.order), v.n_values)
    }
}

pub(super) fn bench(c: &mut Criterion) {
    let mut g = c.benchmark_group("insert");

    for n_values in [1, 100, 1_000, 10_000] {
        bench_random(&mut g, n_values);
        bench_sequential(&mut g, n_values);
    }
}

/// Measure the time needed to insert `n_values` number of randomly generated
/// values into an empty tree.
fn bench_random<M>(g: &mut BenchmarkGroup<'_, M>, n_values: usize)
where
    M: Measurement,
{
    let bench_name = BenchName {
        order: "random",
        n_values,
    };
    g.throughput(Throughput::Elements(n_values as _)); // Keys inserted per second
    g.bench_function(BenchmarkId::from(bench_name), |b| {
        b.iter_batched(
            || (AvlTree::default(), Lfsr::default()),
            |(mut t, mut rand)| {
                for _i in 0..n_values {
                    t.insert(rand.next());
                }
                t
            },
            criterion::BatchSize::PerIteration,
        );
    });
}

/// Measure the time needed to insert `n_values` ascending values into an
/// empty tree, rotating at every other insert.
fn bench_sequential<M>(g: &mut BenchmarkGroup<'_, M>, n_values: usize)
where
    M: Measurement,
{
    let bench_name = BenchName {
        order: "sequential",
        n_values,
    };
    g.throughput(Throughput::Elements(n_values as _)); // Keys inserted per second
    g.bench_function(BenchmarkId::from(bench_name), |b| {
        b.iter_batched(
            AvlTree::default,
            |mut t| {
                for v in 0..n_values {
                    t.insert(v);
                }
                t
            },
            criterion::BatchSize::PerIteration,
        );
    });
}
