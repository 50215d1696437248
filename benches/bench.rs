//! Criterion benchmarks for the Krites classifier.
//!
//! Covers the two hot paths: folding documents into the model (`learn`) and
//! scoring unseen text against all known categories (`categorize`).

use std::hint::black_box;

use criterion::{Criterion, Throughput, criterion_group, criterion_main};
use krites::classifier::NaiveBayesClassifier;

/// Generate test documents for benchmarking.
fn generate_test_documents(count: usize) -> Vec<String> {
    let words = vec![
        "classifier",
        "token",
        "vocabulary",
        "category",
        "document",
        "frequency",
        "probability",
        "smoothing",
        "training",
        "corpus",
        "label",
        "prior",
        "evidence",
        "score",
        "model",
        "text",
    ];

    (0..count)
        .map(|i| {
            let mut doc = Vec::new();
            for j in 0..20 {
                doc.push(words[(i * 7 + j * 3) % words.len()]);
            }
            doc.join(" ")
        })
        .collect()
}

fn bench_learn(c: &mut Criterion) {
    let documents = generate_test_documents(100);

    let mut group = c.benchmark_group("learn");
    group.throughput(Throughput::Elements(documents.len() as u64));
    group.bench_function("learn_100_documents", |b| {
        b.iter(|| {
            let mut classifier = NaiveBayesClassifier::new();
            for (i, doc) in documents.iter().enumerate() {
                let category = if i % 2 == 0 { "even" } else { "odd" };
                classifier.learn(black_box(doc), category).unwrap();
            }
            classifier
        })
    });
    group.finish();
}

fn bench_categorize(c: &mut Criterion) {
    let documents = generate_test_documents(100);
    let mut classifier = NaiveBayesClassifier::new();
    for (i, doc) in documents.iter().enumerate() {
        let category = if i % 2 == 0 { "even" } else { "odd" };
        classifier.learn(doc, category).unwrap();
    }

    let query = "classifier vocabulary smoothing probability score text";

    let mut group = c.benchmark_group("categorize");
    group.bench_function("categorize_trained_model", |b| {
        b.iter(|| classifier.categorize(black_box(query)).unwrap())
    });
    group.finish();
}

fn bench_state_round_trip(c: &mut Criterion) {
    let documents = generate_test_documents(100);
    let mut classifier = NaiveBayesClassifier::new();
    for (i, doc) in documents.iter().enumerate() {
        let category = if i % 2 == 0 { "even" } else { "odd" };
        classifier.learn(doc, category).unwrap();
    }

    let json = classifier.to_json().unwrap();

    let mut group = c.benchmark_group("state");
    group.bench_function("to_json", |b| b.iter(|| classifier.to_json().unwrap()));
    group.bench_function("from_json", |b| {
        b.iter(|| NaiveBayesClassifier::from_json(black_box(&json)).unwrap())
    });
    group.finish();
}

criterion_group!(benches, bench_learn, bench_categorize, bench_state_round_trip);
criterion_main!(benches);
