use criterion::{Criterion, criterion_group, criterion_main};
use station_stats_engine::aggregate;
use station_stats_engine::parse::parse_fixed_point;
use station_stats_engine::stats::format_scaled;
use std::hint::black_box;

const STATIONS: &[&str] = &[
    "Hamburg", "Palermo", "Oslo", "Reykjavík", "Jakarta", "Nairobi", "La Paz", "Sapporo",
];

fn synthetic_input(records: usize) -> Vec<u8> {
    let mut data = Vec::with_capacity(records * 16);
    for i in 0..records {
        let station = STATIONS[i % STATIONS.len()];
        let value = (i % 1999) as i64 - 999;
        data.extend_from_slice(station.as_bytes());
        data.push(b';');
        data.extend_from_slice(format_scaled(value).as_bytes());
        data.push(b'\n');
    }
    data
}

fn benchmark_parse(c: &mut Criterion) {
    c.bench_function("parse_fixed_point", |b| {
        b.iter(|| black_box(parse_fixed_point(black_box(b"-12.3"))))
    });
}

fn benchmark_aggregate(c: &mut Criterion) {
    let data = synthetic_input(100_000);
    let mut group = c.benchmark_group("aggregate_100k");
    for workers in [1usize, 4, 8] {
        group.bench_function(format!("workers_{workers}"), |b| {
            b.iter(|| {
                let map = aggregate(black_box(&data), workers, 128).unwrap();
                black_box(map);
            })
        });
    }
    group.finish();
}

criterion_group!(benches, benchmark_parse, benchmark_aggregate);
criterion_main!(benches);
