use calver::prelude::*;
use criterion::{black_box, criterion_group, criterion_main, Criterion};

fn ymd_scheme() -> Scheme {
    Scheme::new([&FULL_YEAR, &ZERO_PADDED_MONTH, &ZERO_PADDED_DAY])
}

fn ok_inputs() -> Vec<&'static str> {
    vec![
        "2021.01.05",
        "2021.12.31",
        "2021.01.05.rc1",
        "2021.01.05.rc1.build7",
    ]
}

fn parse_ok(parser: &Parser, inputs: &[&str]) {
    for input in inputs {
        let res = parser.parse(input);
        assert!(res.is_ok());
    }
}

fn err_inputs() -> Vec<&'static str> {
    vec!["", "2021", "203.01.05", "2021.1.05", "2021.01.05.a.b.c"]
}

fn parse_err(parser: &Parser, inputs: &[&str]) {
    for input in inputs {
        let res = parser.parse(input);
        assert!(res.is_err());
    }
}

fn criterion_benchmark(c: &mut Criterion) {
    c.bench_function("new_scheme", |b| b.iter(|| black_box(ymd_scheme())));

    let parser = Parser::new(ymd_scheme());
    c.bench_function("parse_ok", |b| {
        b.iter(|| parse_ok(black_box(&parser), black_box(&ok_inputs())))
    });
    c.bench_function("parse_err", |b| {
        b.iter(|| parse_err(black_box(&parser), black_box(&err_inputs())))
    });

    let left = parser.parse("2021.01.05").unwrap();
    let right = parser.parse("2021.02.01").unwrap();
    c.bench_function("compare", |b| {
        b.iter(|| black_box(&left).partial_cmp(black_box(&right)))
    });
}

criterion_group!(benches, criterion_benchmark);
criterion_main!(benches);
