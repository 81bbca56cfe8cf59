use std::hint::black_box;
use std::time::{Duration, UNIX_EPOCH};

use clap::Parser;
use criterion::{Criterion, criterion_group, criterion_main};
use file_times::cli::Args;
use file_times_domain::DateCodec;

fn benchmark_codec(c: &mut Criterion) {
    let instant = UNIX_EPOCH + Duration::from_secs(1_689_446_710);
    c.bench_function("format_instant", |b| b.iter(|| DateCodec::try_format(black_box(instant)).unwrap()));
    c.bench_function("parse_text", |b| {
        b.iter(|| DateCodec::parse(black_box("15/07/2023 18:45:10")).unwrap())
    });
}

fn benchmark_cli_parsing(c: &mut Criterion) {
    c.bench_function("parse_args_set", |b| {
        b.iter(|| {
            let args = Args::try_parse_from(black_box([
                "file_times",
                "set",
                "a.txt",
                "--modified",
                "15/07/2023 18:45:10",
            ]))
            .unwrap();
            black_box(args);
        })
    });
}

criterion_group!(benches, benchmark_codec, benchmark_cli_parsing);
criterion_main!(benches);
