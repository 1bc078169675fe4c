use std::hint::black_box;

use criterion::{criterion_group, criterion_main, Criterion};

use phonoscope::catalog::Catalog;
use phonoscope::grapheme::grapheme_key;

pub fn criterion_benchmark(c: &mut Criterion) {
    c.bench_function("key ascii", |b| b.iter(|| grapheme_key(black_box("ind"), black_box("Ng"))));
    c.bench_function("key accented", |b| {
        b.iter(|| grapheme_key(black_box("fra"), black_box("  Ça  va, l'élève !  ")))
    });
    c.bench_function("key hangul", |b| b.iter(|| grapheme_key(black_box("kor"), black_box("한국어"))));
    c.bench_function("key fallback", |b| b.iter(|| grapheme_key(black_box("arb"), black_box("ِ"))));

    let catalog = Catalog::builtin().unwrap();
    let korean = catalog.language("kor").unwrap();
    c.bench_function("realize ruled", |b| {
        b.iter(|| korean.realize_in(black_box("p"), black_box("syllable-final")))
    });
    c.bench_function("realize unruled", |b| b.iter(|| korean.realize_in(black_box("m"), black_box("intervocalic"))));

    c.bench_function("catalog builtin", |b| b.iter(Catalog::builtin));
    c.bench_function("language graphemes", |b| b.iter(|| korean.graphemes().len()));
}

criterion_group!(benches, criterion_benchmark);
criterion_main!(benches);
