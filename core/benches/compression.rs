use std::io::Read;

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use dry_bytes::compression::{compress, decompress, CompressionCodec, CompressionLevel};
use dry_bytes::reader::bytes_reader;

const INPUT_SIZE: usize = 256 * 1024;

fn sample_input() -> Vec<u8> {
    // Mildly compressible: repeating text with a rolling counter.
    (0..INPUT_SIZE)
        .map(|i| b"the quick brown fox "[i % 20] ^ ((i / 4096) as u8 & 0x03))
        .collect()
}

fn bench_codecs(c: &mut Criterion) {
    let input = sample_input();
    let codecs = [
        CompressionCodec::Deflate,
        CompressionCodec::Gzip,
        CompressionCodec::Zstd,
        CompressionCodec::Lz4,
    ];

    let mut group = c.benchmark_group("compress");
    group.throughput(Throughput::Bytes(INPUT_SIZE as u64));
    for codec in codecs {
        group.bench_with_input(BenchmarkId::from_parameter(codec), &input, |b, data| {
            b.iter(|| compress(codec, black_box(data), CompressionLevel::Default).unwrap())
        });
    }
    group.finish();

    let mut group = c.benchmark_group("decompress");
    group.throughput(Throughput::Bytes(INPUT_SIZE as u64));
    for codec in codecs {
        let compressed = compress(codec, &input, CompressionLevel::Default).unwrap();
        group.bench_with_input(BenchmarkId::from_parameter(codec), &compressed, |b, data| {
            b.iter(|| decompress(codec, black_box(data)).unwrap())
        });
    }
    group.finish();
}

fn bench_bytes_reader(c: &mut Criterion) {
    let input = sample_input();
    let mut group = c.benchmark_group("bytes_reader");
    group.throughput(Throughput::Bytes(INPUT_SIZE as u64));
    group.bench_function("drain_4k", |b| {
        let mut buf = vec![0u8; 4096];
        b.iter(|| {
            let mut stream = bytes_reader(input.clone());
            let mut total = 0usize;
            loop {
                let n = stream.read(&mut buf).unwrap();
                if n == 0 {
                    break;
                }
                total += n;
            }
            black_box(total)
        })
    });
    group.finish();
}

criterion_group!(benches, bench_codecs, bench_bytes_reader);
criterion_main!(benches);
