//! Benchmarks for the byte-level cursors.
//!
//! Covers the hot paths of [`Reader`] and [`Writer`]:
//! - Single primitive transfers (native, little-endian, big-endian)
//! - Bulk array transfers with and without byte swapping
//! - Length-prefixed and zero-terminated strings

extern crate bytecursor;

use bytecursor::{Cursor, Reader, Writer};
use criterion::{criterion_group, criterion_main, Criterion, Throughput};
use std::hint::black_box;

const COUNT: usize = 4096;

fn sample(len: usize) -> Vec<u8> {
    (0..len).map(|i| (i * 31 + 7) as u8).collect()
}

/// Benchmark reading a region as a sequence of u32 values in each byte order.
fn bench_read_u32(c: &mut Criterion) {
    let data = sample(COUNT * 4);

    let mut group = c.benchmark_group("read_u32");
    group.throughput(Throughput::Bytes(data.len() as u64));
    group.bench_function("native", |b| {
        b.iter(|| {
            let mut reader = Reader::new(black_box(&data));
            let mut sum = 0_u32;
            while !reader.is_exhausted() {
                sum = sum.wrapping_add(reader.read::<u32>().unwrap());
            }
            black_box(sum)
        });
    });
    group.bench_function("le", |b| {
        b.iter(|| {
            let mut reader = Reader::new(black_box(&data));
            let mut sum = 0_u32;
            while !reader.is_exhausted() {
                sum = sum.wrapping_add(reader.read_le::<u32>().unwrap());
            }
            black_box(sum)
        });
    });
    group.bench_function("be", |b| {
        b.iter(|| {
            let mut reader = Reader::new(black_box(&data));
            let mut sum = 0_u32;
            while !reader.is_exhausted() {
                sum = sum.wrapping_add(reader.read_be::<u32>().unwrap());
            }
            black_box(sum)
        });
    });
    group.finish();
}

/// Benchmark writing u64 values one at a time versus as one bulk array.
fn bench_write_u64(c: &mut Criterion) {
    let values: Vec<u64> = (0..COUNT as u64).collect();
    let mut buffer = vec![0u8; COUNT * 8];

    let mut group = c.benchmark_group("write_u64");
    group.throughput(Throughput::Bytes(buffer.len() as u64));
    group.bench_function("single_be", |b| {
        b.iter(|| {
            let mut writer = Writer::new(&mut buffer);
            for value in &values {
                writer.write_be(*value).unwrap();
            }
            black_box(writer.position())
        });
    });
    group.bench_function("array_native", |b| {
        b.iter(|| {
            let mut writer = Writer::new(&mut buffer);
            writer.write_array(black_box(&values)).unwrap();
            black_box(writer.position())
        });
    });
    group.bench_function("array_be", |b| {
        b.iter(|| {
            let mut writer = Writer::new(&mut buffer);
            writer.write_array_be(black_box(&values)).unwrap();
            black_box(writer.position())
        });
    });
    group.finish();
}

/// Benchmark reading u16 arrays with and without swapping.
fn bench_read_array(c: &mut Criterion) {
    let data = sample(COUNT * 2);
    let mut values = vec![0_u16; COUNT];

    c.bench_function("read_array_u16_le", |b| {
        b.iter(|| {
            let mut reader = Reader::new(black_box(&data));
            reader.read_array_le(&mut values).unwrap();
            black_box(values[COUNT - 1])
        });
    });
    c.bench_function("read_array_u16_be", |b| {
        b.iter(|| {
            let mut reader = Reader::new(black_box(&data));
            reader.read_array_be(&mut values).unwrap();
            black_box(values[COUNT - 1])
        });
    });
}

/// Benchmark the string codecs on a buffer of short strings.
fn bench_strings(c: &mut Criterion) {
    let words = ["alpha", "beta", "gamma", "delta", "epsilon"];
    let mut buffer = vec![0u8; 64 * 1024];

    let sized_end = {
        let mut writer = Writer::new(&mut buffer);
        while writer.remaining() > 16 {
            for word in words {
                if writer.write_sized_string_le(word).is_err() {
                    break;
                }
            }
        }
        writer.position()
    };
    let sized = buffer[..sized_end].to_vec();

    c.bench_function("read_sized_string_utf8_le", |b| {
        b.iter(|| {
            let mut reader = Reader::new(black_box(&sized));
            let mut total = 0;
            while let Ok(text) = reader.read_sized_string_utf8_le() {
                total += text.len();
            }
            black_box(total)
        });
    });

    let cstring_end = {
        let mut writer = Writer::new(&mut buffer);
        while writer.remaining() > 16 {
            for word in words {
                if writer.write_cstring(word).is_err() {
                    break;
                }
            }
        }
        writer.position()
    };
    let cstrings = buffer[..cstring_end].to_vec();

    c.bench_function("read_cstring", |b| {
        b.iter(|| {
            let mut reader = Reader::new(black_box(&cstrings));
            let mut total = 0;
            while let Ok(text) = reader.read_cstring() {
                total += text.len();
            }
            black_box(total)
        });
    });
}

criterion_group!(
    benches,
    bench_read_u32,
    bench_write_u64,
    bench_read_array,
    bench_strings,
);
criterion_main!(benches);
