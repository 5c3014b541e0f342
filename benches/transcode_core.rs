use criterion::{criterion_group, criterion_main, Criterion};

use core::hint::black_box;

fn bench_utf8_validation(c: &mut Criterion) {
    // 1 GB
    let size = 1_000_000_000;

    // create a large UTF-8 byte array with mixed content
    let text = "Hello, 世界! 🌍 This is a UTF-8 benchmark with emoji 🚀 and Unicode characters: αβγδε ñ\n";

    let mut data = Vec::with_capacity(size);
    for _ in 0..(size / text.len()) {
        data.extend_from_slice(text.as_bytes());
    }

    let mut group = c.benchmark_group("utf8_validation");
    group.throughput(criterion::Throughput::Bytes(data.len() as u64));
    group.sample_size(10);

    group.bench_function("transcode_core::from_utf8", |b| {
        b.iter(|| {
            let str = transcode_core::from_utf8(black_box(&data)).unwrap();
            assert_eq!(str.len(), data.len());
        })
    });

    group.bench_function("core::str::from_utf8", |b| {
        b.iter(|| {
            let str = core::str::from_utf8(black_box(&data)).unwrap();
            assert_eq!(str.len(), data.len());
        })
    });

    group.finish();
}

fn bench_utf16_to_utf8(c: &mut Criterion) {
    let text: Vec<u16> = "Hello, 世界! 🌍 This is a UTF-16 benchmark with emoji 🚀 and Unicode characters: αβγδε ñ\n"
        .encode_utf16()
        .collect();
    let mut src = Vec::with_capacity(1_000_000);
    while src.len() < 1_000_000 {
        src.extend_from_slice(&text);
    }

    let mut dst = vec![0u8; src.len() * 3];

    let mut group = c.benchmark_group("utf16_to_utf8");
    group.throughput(criterion::Throughput::Elements(src.len() as u64));
    group.sample_size(10);

    group.bench_function("convert_utf16_to_utf8", |b| {
        b.iter(|| {
            let written = transcode_core::convert_utf16_to_utf8(black_box(&src), &mut dst);
            assert!(written > 0);
        })
    });

    group.finish();
}

fn bench_latin1_to_utf8(c: &mut Criterion) {
    let src: Vec<u8> = (0..=255u8).cycle().take(1_000_000).collect();
    let mut dst = vec![0u8; src.len() * 2];

    let mut group = c.benchmark_group("latin1_to_utf8");
    group.throughput(criterion::Throughput::Bytes(src.len() as u64));
    group.sample_size(10);

    group.bench_function("convert_latin1_to_utf8", |b| {
        b.iter(|| {
            let written = transcode_core::convert_latin1_to_utf8(black_box(&src), &mut dst);
            assert!(written > 0);
        })
    });

    group.finish();
}

criterion_group!(benches, bench_utf8_validation, bench_utf16_to_utf8, bench_latin1_to_utf8);
criterion_main!(benches);
