//! Lexer benchmarks.
//!
//! Run with: `cargo bench --package ssharpc-lex`

use criterion::{black_box, criterion_group, criterion_main, Criterion, Throughput};
use ssharpc_lex::tokenize;

fn token_count(source: &str) -> usize {
    tokenize(source.as_bytes()).unwrap().len()
}

fn bench_small_function(c: &mut Criterion) {
    let source = "main(){write(read())}";

    let mut group = c.benchmark_group("lexer");
    group.throughput(Throughput::Bytes(source.len() as u64));
    group.bench_function("single_function", |b| {
        b.iter(|| token_count(black_box(source)))
    });
    group.finish();
}

fn bench_many_functions(c: &mut Criterion) {
    let mut source = String::new();
    for i in 0..200 {
        source.push_str(&format!("f{i}(a b){{a+b*2-1}}\n"));
    }
    source.push_str("main(){f0(1,2)}");

    let mut group = c.benchmark_group("lexer_many_functions");
    group.throughput(Throughput::Bytes(source.len() as u64));
    group.bench_function("two_hundred_functions", |b| {
        b.iter(|| token_count(black_box(&source)))
    });
    group.finish();
}

criterion_group!(benches, bench_small_function, bench_many_functions);
criterion_main!(benches);
