//! Simplification benchmarks over a few characteristic tables.
//!
//! Run with:
//! ```bash
//! cargo bench --bench simplify
//! ```

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use karnaugh::{find_groupings, parse_expression, simplify, Form, TruthTable};

/// Named tables spanning the interesting shapes of the search space
fn tables() -> Vec<(&'static str, TruthTable)> {
    vec![
        ("empty", TruthTable::new()),
        ("corners", TruthTable::from_minterms(&[0, 2, 8, 10])),
        // even-parity cells: no two of them are adjacent, so nothing groups
        ("checkerboard", TruthTable::from_minterms(&[0, 3, 5, 6, 9, 10, 12, 15])),
        ("scattered", TruthTable::from_minterms(&[1, 2, 4, 8, 11, 13])),
        ("dense", TruthTable::from_maxterms(&[7, 13])),
    ]
}

fn bench_parse(c: &mut Criterion) {
    let mut group = c.benchmark_group("parse_expression");
    for (name, text, form) in [
        ("product", "AB'C", Form::Sop),
        ("sum_of_products", "A'B'C' + A'B'D + AB' + BCD'", Form::Sop),
        ("product_of_sums", "(A+B')(A+C)(B+C+D')", Form::Pos),
    ] {
        group.bench_with_input(BenchmarkId::from_parameter(name), &(text, form), |b, &(text, form)| {
            b.iter(|| parse_expression(black_box(text), form));
        });
    }
    group.finish();
}

fn bench_groupings(c: &mut Criterion) {
    let mut group = c.benchmark_group("find_groupings");
    for (name, table) in tables() {
        group.bench_with_input(BenchmarkId::from_parameter(name), &table, |b, table| {
            b.iter(|| find_groupings(black_box(table), Form::Sop));
        });
    }
    group.finish();
}

fn bench_simplify(c: &mut Criterion) {
    let mut group = c.benchmark_group("simplify");
    for (name, table) in tables() {
        for form in [Form::Sop, Form::Pos] {
            group.bench_with_input(BenchmarkId::new(form.to_string(), name), &table, |b, table| {
                b.iter(|| simplify(black_box(table), form));
            });
        }
    }
    group.finish();
}

criterion_group!(benches, bench_parse, bench_groupings, bench_simplify);
criterion_main!(benches);
