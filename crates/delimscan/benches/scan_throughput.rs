//! Benchmark – `delimscan::Scanner` over in-memory and reader sources
#![allow(missing_docs)]

use std::io::Cursor;

use criterion::{BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main};
use delimscan::{CharSource, Delimiter, DelimiterSet, ReaderSource, Scanner, StrSource};

/// Produce a deterministic SQL-ish payload of at least `target_len` bytes by
/// repeating a statement that mixes words, operators and multi-byte text.
fn make_sql_payload(target_len: usize) -> String {
    const STATEMENT: &str = "SELECT naïve,名前 FROM café WHERE a<>b AND c<=d;\n";
    let mut s = String::with_capacity(target_len + STATEMENT.len());
    while s.len() < target_len {
        s.push_str(STATEMENT);
    }
    s
}

fn delimiters() -> DelimiterSet {
    let mut set = DelimiterSet::new();
    set.add(Delimiter::regex(r"\s+").expect("valid regex"));
    for op in [",", ";", "<", "<=", "<>", "="] {
        set.add(Delimiter::literal(op).expect("non-empty literal"));
    }
    set
}

/// Scan to the end and return the number of tokens so Criterion can
/// black-box the result.
fn count_tokens<S: CharSource>(mut scanner: Scanner<S>, delimiters: &DelimiterSet) -> usize {
    scanner
        .tokens(delimiters)
        .map(|t| t.expect("payload scans cleanly"))
        .count()
}

fn bench_scanner(c: &mut Criterion) {
    let delimiters = delimiters();
    let mut group = c.benchmark_group("scan_throughput");

    for size in [1_024, 64 * 1_024] {
        let payload = make_sql_payload(size);
        group.throughput(Throughput::Bytes(payload.len() as u64));

        group.bench_with_input(BenchmarkId::new("str_source", size), &payload, |b, p| {
            b.iter(|| {
                let scanner = Scanner::new(StrSource::new(black_box(p)));
                black_box(count_tokens(scanner, &delimiters))
            });
        });

        group.bench_with_input(BenchmarkId::new("reader_source", size), &payload, |b, p| {
            b.iter(|| {
                let source = ReaderSource::new(Cursor::new(black_box(p.as_bytes())))
                    .expect("cursor reports its position");
                black_box(count_tokens(Scanner::new(source), &delimiters))
            });
        });
    }

    group.finish();
}

criterion_group!(benches, bench_scanner);
criterion_main!(benches);
