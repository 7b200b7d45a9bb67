use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use rephrase_core::{Engine, StyleProfile};

const INPUTS: &[(&str, &str)] = &[
    ("short", "I like coffee."),
    ("compound", "I like coffee and I drink it daily."),
    (
        "conditional",
        "If it rains tomorrow, we will cancel the picnic because the grass gets wet.",
    ),
    (
        "multi",
        "The quick dog runs in the park. It is very happy. We often walk there after work.",
    ),
];

fn bench_transform(c: &mut Criterion) {
    let engine = Engine::new();
    let mut group = c.benchmark_group("transform");
    for style in StyleProfile::ALL {
        for (name, text) in INPUTS {
            group.bench_with_input(
                BenchmarkId::new(style.as_str(), name),
                text,
                |b, text| b.iter(|| engine.transform_candidates(text, style, 3)),
            );
        }
    }
    group.finish();
}

fn bench_correct(c: &mut Criterion) {
    let engine = Engine::new();
    let mut group = c.benchmark_group("correct");
    for (name, text) in [
        ("clean", "The weather is nice today."),
        ("typos", "teh cat dont recieve alot of food"),
        ("agreement", "me and my freind was late , sorry"),
    ] {
        group.bench_function(name, |b| b.iter(|| engine.correct(text)));
    }
    group.finish();
}

criterion_group!(benches, bench_transform, bench_correct);
criterion_main!(benches);
