use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use memento_core::{BoardGenerator, BoardSize, RandomBoardGenerator};
use std::hint::black_box;

fn bench_generate(c: &mut Criterion) {
    let mut group = c.benchmark_group("generate");
    let sizes = BoardSize::PRESETS
        .into_iter()
        .chain([BoardSize::new(10, 10).expect("10x10 is a valid size")]);
    for size in sizes {
        group.bench_with_input(BenchmarkId::from_parameter(size), &size, |b, &size| {
            let mut seed = 0u64;
            b.iter(|| {
                seed = seed.wrapping_add(1);
                black_box(RandomBoardGenerator::new(seed).generate(size))
            });
        });
    }
    group.finish();
}

criterion_group!(benches, bench_generate);
criterion_main!(benches);
