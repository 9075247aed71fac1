use criterion::{black_box, criterion_group, criterion_main, Criterion};
use id3tree::{EntropyEvaluator, FeatureConsumption, Id3Builder, LearningSet, Record};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::time::Duration;

fn gen_data(rng: &mut StdRng, n_features: usize, n_records: usize) -> Vec<Record> {
    (0..n_records)
        .map(|_| {
            let mut record: Record = (0..n_features)
                .map(|i| (format!("f{:02}", i), rng.gen_range(0..=1u8)))
                .collect();
            let parity = record.values().map(|v| v as usize).sum::<usize>() % 2;
            record.insert("result", parity as u8);
            record
        })
        .collect()
}

pub fn tree_benchmarks(c: &mut Criterion) {
    let mut rng = StdRng::seed_from_u64(0);
    let learning_data = gen_data(&mut rng, 16, 10_000);
    let test_data = gen_data(&mut rng, 16, 10_000);

    let data = LearningSet::from_records(&learning_data, "result").unwrap();
    let evaluator = EntropyEvaluator::new(&data);
    c.bench_function("best_split_for_feature", |b| {
        b.iter(|| evaluator.best_split_for_feature(black_box("f00"), 0, data.len()))
    });

    c.bench_function("validate and sort", |b| {
        b.iter(|| LearningSet::from_records(black_box(&learning_data), "result"))
    });

    let mut build_group = c.benchmark_group("build");
    build_group.measurement_time(Duration::from_secs(10));
    build_group.sample_size(20);
    for consumption in [FeatureConsumption::PerBranch, FeatureConsumption::Global] {
        let builder = Id3Builder::new().set_feature_consumption(consumption);
        build_group.bench_function(format!("{:?}", consumption), |b| {
            b.iter(|| builder.build(black_box(&learning_data), "result"))
        });
    }
    build_group.finish();

    let tree = Id3Builder::new().build(&learning_data, "result").unwrap();
    c.bench_function("decide_all sequential", |b| {
        b.iter(|| tree.decide_all(black_box(&test_data), false))
    });
    c.bench_function("decide_all parallel", |b| {
        b.iter(|| tree.decide_all(black_box(&test_data), true))
    });
}

criterion_group!(benches, tree_benchmarks);
criterion_main!(benches);
