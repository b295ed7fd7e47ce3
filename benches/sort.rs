use criterion::{black_box, criterion_group, criterion_main, BatchSize, Criterion};
use push_swap_turk::{sort, stats::random_input, Stack};
use rand::{rngs::StdRng, SeedableRng};

fn bench_sort(c: &mut Criterion) {
    let mut group = c.benchmark_group("turk_sort");
    for &size in &[100usize, 500, 1_000] {
        group.bench_function(format!("sort_{size}"), |b| {
            b.iter_batched(
                || random_input(&mut StdRng::seed_from_u64(42), size),
                |input| black_box(sort(&input)),
                BatchSize::SmallInput,
            )
        });
    }
    group.finish();
}

fn bench_rotate(c: &mut Criterion) {
    let mut stack: Stack = (0..10_000).map(f64::from).collect();
    c.bench_function("stack_rotate_10k", |b| {
        b.iter(|| {
            stack.rotate();
            stack.reverse_rotate();
            stack.rotate();
        })
    });
}

criterion_group!(benches, bench_sort, bench_rotate);
criterion_main!(benches);
