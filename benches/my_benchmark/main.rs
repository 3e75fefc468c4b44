// Available modules
mod formatting;
mod parsing;

// Used Modules
use criterion::{criterion_group, criterion_main, Criterion};
use formatting::*;
use parsing::*;

#[cfg(not(target_os = "windows"))]
use pprof::criterion::{Output, PProfProfiler};

fn criterion_benchmark(c: &mut Criterion) {
    bench_to_friendly_string(c);
    bench_to_exact_string(c);
    bench_format_spec(c);
    bench_from_string(c);
}

#[cfg(not(target_os = "windows"))]
criterion_group! {
    name = benches;
    config = Criterion::default().with_profiler(PProfProfiler::new(100, Output::Flamegraph(None)));
    targets = criterion_benchmark
}

#[cfg(target_os = "windows")]
criterion_group! {
    name = benches;
    config = Criterion::default();
    targets = criterion_benchmark
}

criterion_main!(benches);
