//! Benchmarks for validation, cleanup and transliteration.
//!
//! ## Content Types
//!
//! - **ASCII**: Pure 7-bit ASCII content (the fast path)
//! - **Mixed UTF-8**: Realistic mix of ASCII and multi-byte characters
//! - **CJK Text**: Chinese/Japanese/Korean characters (3-byte sequences)
//! - **Dirty**: Mixed content with malformed bytes every 64 bytes
//!
//! ## Sizes
//!
//! - 1KB, 64KB, 1MB

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use utf8scrub::{
    clean, clean_with, is_valid_utf8, to_ascii, to_ascii_bytes, CleanOptions, Transliterator,
};

const SIZES: [usize; 3] = [1024, 64 * 1024, 1024 * 1024];

/// Repeat `pattern` to `size` bytes, padding with ASCII rather than splitting a sequence.
fn repeat_to(pattern: &str, size: usize) -> Vec<u8> {
    let pattern_bytes = pattern.as_bytes();
    let mut result = Vec::with_capacity(size);
    while result.len() + pattern_bytes.len() <= size {
        result.extend_from_slice(pattern_bytes);
    }
    result.resize(size, b' ');
    result
}

fn generate_ascii(size: usize) -> Vec<u8> {
    repeat_to(
        "The quick brown fox jumps over the lazy dog. 0123456789!@#$%^&*()_+-=[]{}|;':\",./<>?\n",
        size,
    )
}

fn generate_mixed(size: usize) -> Vec<u8> {
    repeat_to(
        "Hello, world! Café résumé naïve über. 日本語 中文 한국어. Emoji: 🎉🚀💻. «Quoted» text\u{00A0}here.\n",
        size,
    )
}

fn generate_cjk(size: usize) -> Vec<u8> {
    repeat_to("日本語中文韓國語漢字ひらがなカタカナ한글조선어\u{3000}", size)
}

/// Mixed content with an orphan, a truncated lead or a surrogate every 64 bytes.
fn generate_dirty(size: usize) -> Vec<u8> {
    let mut data = generate_mixed(size);
    let bad: [&[u8]; 3] = [&[0x80], &[0xE2, 0x82], &[0xED, 0xA0, 0x80]];
    let mut pos = 0;
    let mut n = 0;
    while pos + 3 < data.len() {
        let seq = bad[n % bad.len()];
        data[pos..pos + seq.len()].copy_from_slice(seq);
        pos += 64;
        n += 1;
    }
    data
}

type Generator = fn(usize) -> Vec<u8>;

const INPUTS: [(&str, Generator); 4] = [
    ("ascii", generate_ascii),
    ("mixed", generate_mixed),
    ("cjk", generate_cjk),
    ("dirty", generate_dirty),
];

fn bench_validate(c: &mut Criterion) {
    let mut group = c.benchmark_group("validate");

    for (name, generate) in INPUTS {
        for size in SIZES {
            let data = generate(size);
            group.throughput(Throughput::Bytes(size as u64));
            group.bench_with_input(BenchmarkId::new(name, format_size(size)), &data, |b, data| {
                b.iter(|| is_valid_utf8(black_box(data)));
            });
        }
    }

    group.finish();
}

fn bench_clean(c: &mut Criterion) {
    let mut group = c.benchmark_group("clean");

    for (name, generate) in INPUTS {
        for size in SIZES {
            let data = generate(size);
            group.throughput(Throughput::Bytes(size as u64));
            group.bench_with_input(BenchmarkId::new(name, format_size(size)), &data, |b, data| {
                b.iter(|| clean(black_box(data), false, false));
            });
        }
    }

    group.finish();
}

/// Every optional cleanup step enabled.
fn bench_clean_all_steps(c: &mut Criterion) {
    let mut group = c.benchmark_group("clean_all_steps");
    let options = CleanOptions::default()
        .with_normalize_whitespace(true)
        .with_strip_bom(true)
        .with_remove_invisible(true)
        .with_normalize_msword(true);

    for (name, generate) in INPUTS {
        let size = 64 * 1024;
        let data = generate(size);
        group.throughput(Throughput::Bytes(size as u64));
        group.bench_with_input(BenchmarkId::new(name, format_size(size)), &data, |b, data| {
            b.iter(|| clean_with(black_box(data), &options));
        });
    }

    group.finish();
}

fn bench_to_ascii(c: &mut Criterion) {
    let mut group = c.benchmark_group("to_ascii");

    for (name, generate) in INPUTS.into_iter().filter(|(name, _)| *name != "dirty") {
        for size in SIZES {
            let text = String::from_utf8(generate(size)).unwrap();
            group.throughput(Throughput::Bytes(size as u64));
            group.bench_with_input(BenchmarkId::new(name, format_size(size)), &text, |b, text| {
                b.iter(|| to_ascii(black_box(text)));
            });
        }
    }

    group.finish();
}

fn bench_to_ascii_bytes(c: &mut Criterion) {
    let mut group = c.benchmark_group("to_ascii_bytes");
    let translit = Transliterator::default();

    let size = 64 * 1024;
    let data = generate_dirty(size);
    group.throughput(Throughput::Bytes(size as u64));
    group.bench_with_input(BenchmarkId::new("dirty", format_size(size)), &data, |b, data| {
        b.iter(|| to_ascii_bytes(black_box(data), &translit));
    });

    group.finish();
}

fn format_size(bytes: usize) -> String {
    if bytes >= 1024 * 1024 {
        format!("{}mb", bytes / (1024 * 1024))
    } else if bytes >= 1024 {
        format!("{}kb", bytes / 1024)
    } else {
        format!("{}b", bytes)
    }
}

criterion_group!(
    benches,
    bench_validate,
    bench_clean,
    bench_clean_all_steps,
    bench_to_ascii,
    bench_to_ascii_bytes,
);

criterion_main!(benches);
