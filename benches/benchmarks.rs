use criterion::{BenchmarkId,black_box, criterion_group, criterion_main, Criterion};

use spellcorrect::*;
use spellcorrect::test::*;

pub fn distance_benchmark(c: &mut Criterion) {
    c.bench_function("edit_distance_short", |b| b.iter(|| {
        edit_distance(black_box("hello"), black_box("wrold"))
    }));

    c.bench_function("edit_distance_long", |b| b.iter(|| {
        edit_distance(black_box("benchmarking"), black_box("bencmarkign"))
    }));
}

pub fn neighbors_benchmark(c: &mut Criterion) {
    for word in ["cat", "houses", "benchmarking"].iter() {
        c.bench_with_input(BenchmarkId::new("neighbors", word), word, |b, word| b.iter(|| {
            neighbors(word)
        }));
    }
}

pub fn correct_benchmark(c: &mut Criterion) {
    let dictionary = get_generated_dictionary(6, 5);
    let mut corrector = Corrector::new(&dictionary, get_test_parameters());

    c.bench_function("correct_known", |b| b.iter(|| {
        corrector.correct(black_box("abcde"))
    }));

    c.bench_function("correct_indexed_distance_1", |b| b.iter(|| {
        corrector.correct(black_box("abcdz"))
    }));

    c.bench_function("correct_scan", |b| b.iter(|| {
        corrector.correct(black_box("zzzaa"))
    }));
}

criterion_group!(benches, distance_benchmark, neighbors_benchmark, correct_benchmark);
criterion_main!(benches);
