use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use kadane_bench::{kadane, max_subarray_classic};

fn input(len: usize) -> Vec<i32> {
    (0..len).map(|i| ((i as i32 * 7919) % 201) - 100).collect()
}

fn bench_variants(c: &mut Criterion) {
    let mut group = c.benchmark_group("max_subarray");

    for len in [97usize, 1_024, 65_536] {
        let data = input(len);

        group.bench_with_input(BenchmarkId::new("clamped", len), &data, |b, data| {
            b.iter(|| kadane(black_box(data)))
        });

        group.bench_with_input(BenchmarkId::new("classic", len), &data, |b, data| {
            b.iter(|| max_subarray_classic(black_box(data)))
        });
    }

    group.finish();
}

criterion_group!(benches, bench_variants);
criterion_main!(benches);
