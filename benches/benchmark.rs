use criterion::{criterion_group, criterion_main, Criterion};

use metaphone3::*;

fn bench_encoder(c: &mut Criterion, encoder_name: &str, encoder: Box<dyn Encoder>, text: &str) {
    c.bench_function(encoder_name, |b| b.iter(|| encoder.encode(text)));
}

pub fn bench_metaphone3(c: &mut Criterion) {
    let metaphone3 = Metaphone3::default();
    bench_encoder(c, "Metaphone 3", Box::new(metaphone3), "Wojciechowski");
}

pub fn bench_metaphone3_vowels(c: &mut Criterion) {
    let metaphone3 = Metaphone3::default().with_encode_vowels(true);
    bench_encoder(
        c,
        "Metaphone 3 (vowels)",
        Box::new(metaphone3),
        "Wojciechowski",
    );
}

pub fn bench_metaphone3_exact(c: &mut Criterion) {
    let metaphone3 = Metaphone3::default().with_encode_exact(true);
    bench_encoder(
        c,
        "Metaphone 3 (exact)",
        Box::new(metaphone3),
        "Wojciechowski",
    );
}

pub fn bench_metaphone3_both_keys(c: &mut Criterion) {
    let metaphone3 = Metaphone3::default();
    // Do not use `bench_encoder` as it only builds the primary key and we
    // want to bench the full result.
    c.bench_function("Metaphone 3 (both keys)", |b| {
        b.iter(|| metaphone3.metaphone3("unconscious"))
    });
}

criterion_group!(
    name = metaphone3;
    config = Criterion::default().sample_size(300);
    targets = bench_metaphone3, bench_metaphone3_vowels, bench_metaphone3_exact, bench_metaphone3_both_keys
);

criterion_main!(metaphone3);
