//! Criterion benchmarks for in-memory ZIP extraction.
//!
//! These complement the `unzipbench` binary: the binary measures real
//! archives from disk, these measure the extractor on synthetic shapes.

#![allow(clippy::unwrap_used, clippy::expect_used)]

use criterion::BenchmarkId;
use criterion::Criterion;
use criterion::Throughput;
use criterion::criterion_group;
use criterion::criterion_main;
use tempfile::TempDir;
use unzipbench_core::ZipExtractor;
use unzipbench_core::stats::median;
use unzipbench_core::test_utils::ZipTestBuilder;

fn many_small_files_zip(file_count: usize) -> Vec<u8> {
    (0..file_count)
        .fold(ZipTestBuilder::new(), |builder, i| {
            builder.add_file(&format!("file{i:04}.txt"), format!("content{i}").as_bytes())
        })
        .build()
}

fn single_file_zip(size_bytes: usize, deflated: bool) -> Vec<u8> {
    let builder = if deflated {
        ZipTestBuilder::new().deflated()
    } else {
        ZipTestBuilder::new()
    };
    // Repeating text compresses well under deflate and is cheap to build.
    let data = b"symbol table line 0x00401000\n"
        .iter()
        .copied()
        .cycle()
        .take(size_bytes)
        .collect::<Vec<u8>>();
    builder.add_file("large_file.bin", &data).build()
}

fn nested_dirs_zip(depth: usize) -> Vec<u8> {
    let mut builder = ZipTestBuilder::new();
    let mut prefix = String::new();
    for level in 0..depth {
        prefix.push_str(&format!("level{level}/"));
        builder = builder
            .add_directory(&prefix)
            .add_file(&format!("{prefix}file.txt"), b"content");
    }
    builder.build()
}

fn bench_extract(c: &mut Criterion, group_name: &str, cases: Vec<(String, Vec<u8>, Throughput)>) {
    let mut group = c.benchmark_group(group_name);
    let mut extractor = ZipExtractor::default();

    for (id, data, throughput) in cases {
        group.throughput(throughput);
        group.bench_with_input(BenchmarkId::from_parameter(id), &data, |b, data| {
            b.iter(|| {
                let temp = TempDir::new().unwrap();
                extractor.extract(temp.path(), data).unwrap();
            });
        });
    }

    group.finish();
}

fn benchmark_many_small_files(c: &mut Criterion) {
    let cases = [100, 1000]
        .into_iter()
        .map(|n| {
            (
                n.to_string(),
                many_small_files_zip(n),
                Throughput::Elements(n as u64),
            )
        })
        .collect();
    bench_extract(c, "many_small_files", cases);
}

fn benchmark_compression_methods(c: &mut Criterion) {
    let size = 8 * 1024 * 1024;
    let cases = vec![
        (
            "stored".to_string(),
            single_file_zip(size, false),
            Throughput::Bytes(size as u64),
        ),
        (
            "deflate".to_string(),
            single_file_zip(size, true),
            Throughput::Bytes(size as u64),
        ),
    ];
    bench_extract(c, "compression_methods", cases);
}

fn benchmark_nested_directories(c: &mut Criterion) {
    let cases = [5, 20]
        .into_iter()
        .map(|depth| {
            (
                depth.to_string(),
                nested_dirs_zip(depth),
                Throughput::Elements(depth as u64 * 2),
            )
        })
        .collect();
    bench_extract(c, "nested_directories", cases);
}

fn benchmark_median(c: &mut Criterion) {
    let samples: Vec<f64> = (0..10_000).map(|i| f64::from((i * 7919) % 10_007)).collect();
    c.bench_function("median_10k", |b| b.iter(|| median(&samples)));
}

criterion_group!(
    benches,
    benchmark_many_small_files,
    benchmark_compression_methods,
    benchmark_nested_directories,
    benchmark_median
);
criterion_main!(benches);
