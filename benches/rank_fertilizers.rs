//! Benchmark a full ranking pass over a synthetic fertilizer table.
//!
//! Run with: cargo bench

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use fert_recommender_rust::{rank_fertilizers, FertilizerRow, NutrientRecord};

fn bench_rank(c: &mut Criterion) {
    // Reference tables in practice hold tens to low hundreds of rows.
    let rows: Vec<FertilizerRow> = (0..200)
        .map(|i| FertilizerRow {
            name: format!("Blend {}", i),
            n: (i % 47) as f64,
            p: (i % 33) as f64,
            k: (i % 61) as f64,
        })
        .collect();

    let requirement = NutrientRecord {
        n: 90.0,
        p: 45.0,
        k: 40.0,
        ph: Some(6.0),
    };
    let soil = NutrientRecord::new(50.0, 30.0, 40.0);

    c.bench_function("rank_200_fertilizers", |b| {
        b.iter(|| rank_fertilizers(black_box(&rows), &requirement, &soil).unwrap())
    });
}

criterion_group!(benches, bench_rank);
criterion_main!(benches);
