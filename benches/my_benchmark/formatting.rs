use capacity::{units::*, Capacity};
use criterion::{black_box, Criterion};

fn generate_test_data() -> Vec<(&'static str, Capacity)> {
    vec![
        ("sub_byte", BIT * 7),
        ("whole_unit", MIB * 110),
        ("fractional", BYTE * 58_918_694_226i64),
        ("huge", KIB * 1_013_089_494_912i64),
        ("fractional_bits", GIB - BIT * 0.5),
    ]
}

pub fn bench_to_friendly_string(c: &mut Criterion) {
    let mut group = c.benchmark_group("to_friendly_string");

    for (name, value) in generate_test_data() {
        group.bench_function(name, |b| b.iter(|| black_box(value).to_friendly_string()));
    }

    group.finish();
}

pub fn bench_to_exact_string(c: &mut Criterion) {
    let mut group = c.benchmark_group("to_exact_string");

    for (name, value) in generate_test_data() {
        group.bench_function(name, |b| b.iter(|| black_box(value).to_exact_string()));
    }

    group.finish();
}

pub fn bench_format_spec(c: &mut Criterion) {
    let mut group = c.benchmark_group("format_spec");

    for spec in ["MiB", "<12.2GiB!", "012KB"] {
        group.bench_function(spec, |b| {
            b.iter(|| black_box(MIB * 1.5).format_spec(black_box(spec)))
        });
    }

    group.finish();
}
