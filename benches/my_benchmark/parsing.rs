use capacity::from_string;
use criterion::{black_box, Criterion};

pub fn bench_from_string(c: &mut Criterion) {
    let mut group = c.benchmark_group("from_string");

    for text in ["GiB", "20*GiB", "1119.63 * TB", "1013089494912*KiB", "2 GIB"] {
        group.bench_function(text, |b| b.iter(|| from_string(black_box(text))));
    }

    group.finish();
}
