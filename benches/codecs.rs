use criterion::{black_box, criterion_group, criterion_main, Criterion};

use fingerprint::core::{decode_words, encode_words, render_grid, ArtConfig};

fn sample(len: usize) -> Vec<u8> {
    (0..len).map(|i| (i * 31 + 7) as u8).collect()
}

fn bench_render_grid(c: &mut Criterion) {
    let config = ArtConfig::default();
    let key = sample(32);

    c.bench_function("render_grid_32b", |b| {
        b.iter(|| render_grid(black_box(&key), &config))
    });
}

fn bench_encode_words(c: &mut Criterion) {
    let data = sample(4096);

    c.bench_function("encode_words_4k", |b| {
        b.iter(|| encode_words(black_box(&data)))
    });
}

fn bench_decode_words(c: &mut Criterion) {
    let words = encode_words(&sample(4096));

    c.bench_function("decode_words_4k", |b| {
        b.iter(|| decode_words(black_box(&words)))
    });
}

criterion_group!(
    benches,
    bench_render_grid,
    bench_encode_words,
    bench_decode_words
);
criterion_main!(benches);
