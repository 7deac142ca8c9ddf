use criterion::{black_box, criterion_group, criterion_main, Criterion};

use studyquiz_core::engine::{request_rng, GenerateRequest, QuizEngine};

const TEXT: &str = "Water boils at 100 degrees Celsius at sea level. At 3000 meters it \
    boils near 90 degrees. Ice melts at 0 degrees. The cat sat on the mat. \
    물은 100도에서 끓는다 얼음은 0도에서 녹는다.";

fn bench_generate(c: &mut Criterion) {
    let mut group = c.benchmark_group("generate");
    let engine = QuizEngine::default();

    group.bench_function("quiz_3_3", |b| {
        let mut rng = request_rng(Some(7));
        b.iter(|| engine.generate(black_box(TEXT), 3, 3, &mut rng))
    });

    group.bench_function("quiz_10_10", |b| {
        let mut rng = request_rng(Some(7));
        b.iter(|| engine.generate(black_box(TEXT), 10, 10, &mut rng))
    });

    group.bench_function("document_markdown", |b| {
        let request = GenerateRequest::default();
        let mut rng = request_rng(Some(7));
        b.iter(|| engine.generate_all(black_box(TEXT), &request, &mut rng))
    });

    group.finish();
}

criterion_group!(benches, bench_generate);
criterion_main!(benches);
