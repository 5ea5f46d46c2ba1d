// Criterion benchmarks for FinPath Engine

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use finpath_engine::catalog::SchemeCatalog;
use finpath_engine::core::{extract_expense, resolve_amount, Recommender};
use finpath_engine::models::UserProfile;

fn create_profile() -> UserProfile {
    UserProfile {
        income: 180_000.0,
        occupation: "entrepreneur".to_string(),
        location: "delhi".to_string(),
        gender: "male".to_string(),
        age: 32,
    }
}

fn bench_resolve_amount(c: &mut Criterion) {
    c.bench_function("resolve_amount_shorthand", |b| {
        b.iter(|| resolve_amount(black_box("paid 2.5k for movie tickets")));
    });

    c.bench_function("resolve_amount_number_words", |b| {
        b.iter(|| resolve_amount(black_box("two lakh fifty thousand rupees")));
    });
}

fn bench_extract_expense(c: &mut Criterion) {
    c.bench_function("extract_expense", |b| {
        b.iter(|| extract_expense(black_box("I spent 500 rupees on pizza")));
    });
}

fn bench_recommend(c: &mut Criterion) {
    let recommender = Recommender::with_default_params();
    let catalog = SchemeCatalog::load().expect("embedded catalog parses");
    let profile = create_profile();

    c.bench_function("recommend", |b| {
        b.iter(|| recommender.recommend(black_box(&catalog), black_box(&profile)));
    });
}

criterion_group!(
    benches,
    bench_resolve_amount,
    bench_extract_expense,
    bench_recommend
);
criterion_main!(benches);
