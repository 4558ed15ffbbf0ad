use criterion::black_box;
use criterion::criterion_group;
use criterion::criterion_main;
use criterion::Criterion;

use kvitter::stream::{LineBuffer, StreamMessage};
use serde_json::Value;
use std::convert::TryFrom;

const SAMPLE: &str = include_str!(concat!(env!("CARGO_MANIFEST_DIR"), "/test_data/stream_sample.txt"));
const ONE_STATUS: &str = include_str!(concat!(env!("CARGO_MANIFEST_DIR"), "/test_data/single_status.json"));

/// Feeds `input` in `chunk`-byte pieces, the way it arrives off the socket.
fn split_lines(input: &[u8], chunk: usize) -> usize {
    let mut buffer = LineBuffer::new();
    input
        .chunks(chunk)
        .map(|piece| buffer.feed(piece).lines.len())
        .sum()
}

fn criterion_benchmark(c: &mut Criterion) {
    let mut group = c.benchmark_group("Split stream into lines");
    let input = SAMPLE.as_bytes();
    group.bench_function("one chunk", |b| {
        b.iter(|| split_lines(black_box(input), input.len()))
    });
    group.bench_function("64 byte chunks", |b| {
        b.iter(|| split_lines(black_box(input), 64))
    });
    group.finish();

    let status = ONE_STATUS.replace('\n', "");
    let mut group = c.benchmark_group("Parse one status line");
    group.bench_function("parse to Value", |b| {
        b.iter(|| serde_json::from_str::<Value>(black_box(&status)).map(drop))
    });
    group.bench_function("classify as StreamMessage", |b| {
        b.iter(|| StreamMessage::try_from(black_box(status.as_str())).map(drop))
    });
    group.finish();

    let lines: Vec<&str> = SAMPLE.lines().filter(|l| !l.trim().is_empty()).collect();
    c.bench_function("classify every sample line", |b| {
        b.iter(|| {
            lines
                .iter()
                .filter_map(|line| StreamMessage::try_from(black_box(*line)).ok())
                .count()
        })
    });
}

criterion_group!(benches, criterion_benchmark);
criterion_main!(benches);
