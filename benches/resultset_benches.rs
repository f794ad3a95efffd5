use std::hint::black_box;

use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use mysql_wire::constant::ColumnType;
use mysql_wire::protocol::wire::{WireShape, WireValue};
use mysql_wire::{ColumnOpts, Protocol, ResultSet, ResultSetOpts};

pub struct User {
    pub id: i32,
    pub name: String,
    pub hair_color: Option<String>,
}

fn users(n: usize) -> Vec<User> {
    (0..n)
        .map(|i| User {
            id: i as i32,
            name: format!("User {i}"),
            hair_color: (i % 2 == 0).then(|| "black".to_string()),
        })
        .collect()
}

fn build(protocol: Protocol, users: &[User]) -> ResultSet {
    let mut rs = ResultSet::new(ResultSetOpts {
        protocol,
        ..Default::default()
    });
    rs.add_column("id", ColumnType::MYSQL_TYPE_LONG, 11, ColumnOpts::default())
        .unwrap();
    rs.add_column("name", ColumnType::MYSQL_TYPE_VAR_STRING, 255, ColumnOpts::default())
        .unwrap();
    rs.add_column("hair_color", ColumnType::MYSQL_TYPE_VAR_STRING, 255, ColumnOpts::default())
        .unwrap();
    for user in users {
        rs.add_row((user.id, user.name.as_str(), user.hair_color.as_deref()))
            .unwrap();
    }
    rs
}

fn bench_resultset(c: &mut Criterion) {
    let mut group = c.benchmark_group("resultset");
    for size in [1, 100, 10_000] {
        let users = users(size);
        for protocol in [Protocol::Text, Protocol::Binary] {
            group.bench_with_input(
                BenchmarkId::new(format!("{protocol:?}"), size),
                &users,
                |b, users| {
                    let mut sink = Vec::with_capacity(size * 64);
                    b.iter(|| {
                        sink.clear();
                        let rs = build(protocol, users);
                        black_box(rs.write_out(&mut sink).unwrap());
                    });
                },
            );
        }
    }
    group.finish();
}

fn bench_lenenc(c: &mut Criterion) {
    let values: Vec<u64> = (0..1024).map(|i| 1u64 << (i % 64)).collect();
    c.bench_function("lenenc_int_encode_decode", |b| {
        let mut out = Vec::with_capacity(values.len() * 9);
        b.iter(|| {
            out.clear();
            for value in &values {
                WireValue::lenenc_int(*value).write_to(&mut out);
            }
            let mut data = out.as_slice();
            while !data.is_empty() {
                let (value, rest) = WireValue::parse(WireShape::LengthPrefixedInt, data).unwrap();
                black_box(value);
                data = rest;
            }
        });
    });
}

criterion_group!(benches, bench_resultset, bench_lenenc);
criterion_main!(benches);
