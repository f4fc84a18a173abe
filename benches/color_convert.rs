use colorfmt::{classify, to_hex, to_hsl};
use criterion::{black_box, criterion_group, criterion_main, Criterion};

const SAMPLES: &[&str] = &[
    "#336699",
    "#abc",
    "rgb(51,102,153)",
    "rgba(51,102,153,0.5)",
    "hsl(210,50%,40%)",
    "hsla(210,50%,40%,1)",
    "red",
    "not-a-color-!!",
];

fn benchmark_classify(c: &mut Criterion) {
    c.bench_function("classify_mixed_inputs", |b| {
        b.iter(|| {
            for input in SAMPLES {
                let _ = classify(black_box(input));
            }
        })
    });
}

fn benchmark_to_hex(c: &mut Criterion) {
    c.bench_function("to_hex_from_rgb", |b| {
        b.iter(|| to_hex(black_box("rgb(51,102,153)")))
    });
    c.bench_function("to_hex_from_hsl", |b| {
        b.iter(|| to_hex(black_box("hsl(210,50%,40%)")))
    });
}

fn benchmark_to_hsl(c: &mut Criterion) {
    c.bench_function("to_hsl_from_hex", |b| {
        b.iter(|| to_hsl(black_box("#336699")))
    });
}

criterion_group!(benches, benchmark_classify, benchmark_to_hex, benchmark_to_hsl);
criterion_main!(benches);
