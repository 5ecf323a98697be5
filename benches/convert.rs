use criterion::{black_box, criterion_group, criterion_main, Criterion};
use recase::{tokenize, BoundaryClass, Casing, Config, Converter};
use serde_json::Value;

const SAMPLES: &[&str] = &[
    "XMLHttpRequest",
    "  leading and trailing  ",
    "mixOf_Spaces-andTabs\tHere",
    "already-kebab-case",
    "SCREEN_NAME",
    "punctuation!@#here",
];

fn bench_tokenizer(c: &mut Criterion) {
    c.bench_function("tokenize", |b| {
        b.iter(|| {
            for sample in SAMPLES {
                black_box(tokenize(black_box(sample), BoundaryClass::Separators));
            }
        })
    });
}

fn bench_casings(c: &mut Criterion) {
    let mut group = c.benchmark_group("convert");
    for casing in Casing::ALL {
        group.bench_function(casing.to_string(), |b| {
            b.iter(|| {
                for sample in SAMPLES {
                    let _ = black_box(casing.convert(black_box(*sample)));
                }
            })
        });
    }
    group.finish();
}

fn bench_batch(c: &mut Criterion) {
    let inputs: Vec<Value> = SAMPLES
        .iter()
        .cycle()
        .take(10_000)
        .map(|s| Value::String(s.to_string()))
        .collect();
    let converter = Converter::new(&Config::default());

    c.bench_function("convert_all_10k", |b| {
        b.iter(|| black_box(converter.convert_all(black_box(&inputs))))
    });
}

criterion_group!(benches, bench_tokenizer, bench_casings, bench_batch);
criterion_main!(benches);
