//! Inline values benchmarks.
//!
//! Measures a single query against pre-parsed files, so parse time is not
//! part of the numbers.

use criterion::{BenchmarkId, Criterion, black_box, criterion_group, criterion_main};
use tsv_common::TextSpan;
use tsv_lsp::{InlineValuesProvider, ScopeLimits};
use tsv_parser::ParserState;

/// Flat top-level code with many declarations before the cursor.
fn flat_source(statements: usize) -> String {
    let mut source = String::new();
    for i in 0..statements {
        source.push_str(&format!("let v{i} = v{} + {i};\n", i.saturating_sub(1)));
    }
    source.push_str("debugger;\n");
    source
}

/// Functions nested `depth` deep, each with a loop and a switch.
fn nested_source(depth: usize) -> String {
    let mut source = String::new();
    for i in 0..depth {
        source.push_str(&format!(
            "function f{i}(a{i}, {{ b{i}, c{i} }}) {{\n\
             for (let j = 0; j < a{i}; j++) {{ total += j * b{i}; }}\n\
             switch (c{i}) {{ case 0: state = a{i}; break; default: state++; }}\n"
        ));
    }
    source.push_str("debugger;\n");
    for _ in 0..depth {
        source.push_str("}\n");
    }
    source
}

fn bench_provide(c: &mut Criterion) {
    let mut group = c.benchmark_group("inline_values");

    let cases = [
        ("flat_100", flat_source(100)),
        ("flat_2000", flat_source(2000)),
        ("nested_20", nested_source(20)),
        ("nested_200", nested_source(200)),
    ];

    for (name, source) in &cases {
        let mut parser = ParserState::new("bench.ts".to_string(), source.clone());
        let root = parser.parse_source_file();
        let arena = parser.get_arena();
        let position = source.find("debugger").unwrap_or(0) as u32;

        group.bench_with_input(BenchmarkId::new("default_limits", name), &position, |b, &pos| {
            let provider = InlineValuesProvider::new(arena, root);
            b.iter(|| black_box(provider.provide_inline_values(pos, TextSpan::everything())))
        });

        group.bench_with_input(BenchmarkId::new("unbounded", name), &position, |b, &pos| {
            let provider = InlineValuesProvider::new(arena, root).with_limits(ScopeLimits {
                max_strong_scopes: usize::MAX,
                max_scopes: usize::MAX,
            });
            b.iter(|| black_box(provider.provide_inline_values(pos, TextSpan::everything())))
        });
    }

    group.finish();
}

criterion_group!(benches, bench_provide);
criterion_main!(benches);
