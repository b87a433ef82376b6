use criterion::{black_box, criterion_group, criterion_main, Criterion};
use vigenere_analysis::{
    divide, encrypt, exhaustive_search, indices_of_coincidence, KeyMode, KeyStream,
    SearchOptions, DEFAULT_MODULUS,
};

/// A few KiB of periodic ciphertext for the statistics benchmarks.
fn sample_ciphertext() -> String {
    let plaintext: String = "thequickbrownfoxjumpsoverthelazydog"
        .chars()
        .cycle()
        .take(4096)
        .collect();
    let mut key = KeyStream::from_text("CIPHER", KeyMode::Classic, DEFAULT_MODULUS).unwrap();
    encrypt(&mut key, &plaintext).unwrap()
}

fn bench_period_analysis(c: &mut Criterion) {
    let ciphertext = sample_ciphertext();
    c.bench_function("divide_and_indices", |b| {
        b.iter(|| {
            let substrings = divide(
                black_box(&ciphertext),
                6,
                KeyMode::Classic,
                DEFAULT_MODULUS,
            )
            .unwrap();
            indices_of_coincidence(&substrings, DEFAULT_MODULUS).unwrap()
        })
    });
}

fn bench_exhaustive_search(c: &mut Criterion) {
    let ciphertext = sample_ciphertext();
    let keywords = vec!["quick".to_string(), "lazy".to_string()];
    c.bench_function("exhaustive_search_len2", |b| {
        b.iter(|| {
            exhaustive_search(
                2,
                DEFAULT_MODULUS,
                black_box(&keywords),
                black_box(&ciphertext),
                KeyMode::Classic,
                SearchOptions::default(),
            )
            .unwrap()
            .count()
        })
    });
}

criterion_group!(benches, bench_period_analysis, bench_exhaustive_search);
criterion_main!(benches);
