use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use statusmsg_core::{
    decoder::decode_state,
    deserialize,
    encoder::encode_state,
    schema::{describe, STATUS_MESSAGE},
    serialize, StatusMessage,
};

fn message_with(records: usize) -> StatusMessage {
    (0..records)
        .fold(StatusMessage::builder(), |builder, i| {
            builder.record(format!("account-{}.testnet", i), "status text ".repeat(8))
        })
        .build()
        .unwrap()
}

fn bench_encode(c: &mut Criterion) {
    let mut group = c.benchmark_group("encode");

    for records in [1, 16, 256, 4096] {
        let message = message_with(records);

        group.throughput(Throughput::Bytes(message.encoded_len() as u64));
        group.bench_with_input(BenchmarkId::new("raw", records), &message, |b, m| {
            b.iter(|| encode_state(black_box(m)).unwrap());
        });
        group.bench_with_input(BenchmarkId::new("base64", records), &message, |b, m| {
            b.iter(|| serialize(black_box(m)).unwrap());
        });
    }

    group.finish();
}

fn bench_decode(c: &mut Criterion) {
    let mut group = c.benchmark_group("decode");

    for records in [1, 16, 256, 4096] {
        let message = message_with(records);
        let raw = encode_state(&message).unwrap();
        let encoded = serialize(&message).unwrap();

        group.throughput(Throughput::Bytes(raw.len() as u64));
        group.bench_with_input(BenchmarkId::new("raw", records), &raw, |b, data| {
            b.iter(|| decode_state::<StatusMessage>(black_box(data)).unwrap());
        });
        group.bench_with_input(BenchmarkId::new("base64", records), &encoded, |b, data| {
            b.iter(|| deserialize(black_box(data)).unwrap());
        });
    }

    group.finish();
}

fn bench_describe(c: &mut Criterion) {
    let mut group = c.benchmark_group("describe");

    for records in [16, 256] {
        let raw = encode_state(&message_with(records)).unwrap();

        group.throughput(Throughput::Bytes(raw.len() as u64));
        group.bench_with_input(BenchmarkId::from_parameter(records), &raw, |b, data| {
            b.iter(|| describe(black_box(data), &STATUS_MESSAGE).unwrap());
        });
    }

    group.finish();
}

criterion_group!(benches, bench_encode, bench_decode, bench_describe);
criterion_main!(benches);
