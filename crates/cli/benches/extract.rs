// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Benchmarks for markup removal and the full comment pipeline.

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use jq_core::{normalize, QaParser};

const BODIES: &[(&str, &str)] = &[
    ("plain_qa", "Tested on v1.2.3\nResult: Fixed\nNote: verified on staging"),
    (
        "heavy_markup",
        "{panel:bgcolor=#eee}*Tested on* SW {{v4.0.1-rc2}}\n*Result:* {color:red}Not Fixed{color}\n\
         _Observation:_ crash on [login page|https://example.com/login] !shot.png! [~qa.lead]{panel}",
    ),
    ("could_not_test", "Could not test on SW 3.1, device unavailable"),
    ("not_qa", "Merged into main, will be in the next nightly build."),
];

fn markup(c: &mut Criterion) {
    let mut group = c.benchmark_group("normalize");
    for (name, body) in BODIES {
        group.bench_with_input(BenchmarkId::from_parameter(name), body, |b, body| {
            b.iter(|| normalize(body))
        });
    }
    group.finish();
}

fn pipeline(c: &mut Criterion) {
    let parser = QaParser::with_defaults();
    let mut group = c.benchmark_group("parse");
    for (name, body) in BODIES {
        group.bench_with_input(BenchmarkId::from_parameter(name), body, |b, body| {
            b.iter(|| parser.parse(body))
        });
    }
    group.finish();
}

criterion_group!(benches, markup, pipeline);
criterion_main!(benches);
