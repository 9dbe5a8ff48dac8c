use criterion::{Criterion, criterion_group, criterion_main};
use dircount_engine::config::ConfigBuilder;
use dircount_engine::count_files;
use dircount_engine::options::Strategy;
use std::hint::black_box;

fn benchmark_strategies(c: &mut Criterion) {
    let dir = tempfile::tempdir().unwrap();
    let files: Vec<_> = (0..32)
        .map(|i| {
            let path = dir.path().join(format!("{i}.txt"));
            std::fs::write(&path, "lorem ipsum dolor sit amet\n".repeat(2_000)).unwrap();
            path
        })
        .collect();

    let mut group = c.benchmark_group("count_files");
    for strategy in Strategy::ALL {
        let config = ConfigBuilder::default().strategy(strategy).build().unwrap();
        group.bench_function(strategy.name(), |b| {
            b.iter(|| count_files(black_box(&files), &config).unwrap().total());
        });
    }
    group.finish();
}

criterion_group!(benches, benchmark_strategies);
criterion_main!(benches);
