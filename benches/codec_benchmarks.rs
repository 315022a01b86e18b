// ABOUTME: Benchmark suite for septet packing, message splitting and SMS-SUBMIT encoding
// ABOUTME: Measures throughput across single-part and multi-part message sizes

use criterion::{BenchmarkId, Criterion, black_box, criterion_group, criterion_main};
use smscodec::septet::{pack_septets, unpack_septets};
use smscodec::{Address, Encodable, SequentialReference, SmsEncoder, SmsSubmit, TextMessage};
use std::time::Duration;

fn create_encoder() -> SmsEncoder {
    SmsEncoder::builder()
        .reference_generator(SequentialReference::new(0))
        .build()
        .unwrap()
}

fn bench_septet_packing(c: &mut Criterion) {
    let mut group = c.benchmark_group("septets");
    group.measurement_time(Duration::from_secs(10));

    let septets: Vec<u8> = (0..160).map(|i| (i % 128) as u8).collect();
    let packed = pack_septets(&septets);

    group.bench_function("pack_160", |b| b.iter(|| pack_septets(black_box(&septets))));
    group.bench_function("unpack_160", |b| {
        b.iter(|| unpack_septets(black_box(&packed), 160))
    });

    group.finish();
}

fn bench_message_sizes(c: &mut Criterion) {
    let mut group = c.benchmark_group("message_sizes");
    group.measurement_time(Duration::from_secs(10));

    let encoder = create_encoder();
    let message_sizes = [10, 160, 161, 459, 1530]; // single part, boundary, 3 and 10 parts

    for &size in &message_sizes {
        let message = TextMessage::new("A".repeat(size));

        group.bench_with_input(BenchmarkId::new("gsm7_encode", size), &message, |b, message| {
            b.iter(|| encoder.encode(black_box(message)).unwrap())
        });
    }

    for &size in &[70, 71, 500] {
        let message = TextMessage::auto("ж".repeat(size));

        group.bench_with_input(BenchmarkId::new("ucs2_encode", size), &message, |b, message| {
            b.iter(|| encoder.encode(black_box(message)).unwrap())
        });
    }

    group.finish();
}

fn bench_serialization(c: &mut Criterion) {
    let mut group = c.benchmark_group("serialization");
    group.measurement_time(Duration::from_secs(10));

    let encoder = create_encoder();
    let parts = encoder.encode(&TextMessage::new("B".repeat(400))).unwrap();
    let submit = SmsSubmit::new(Address::new("+46708251358").unwrap());

    group.bench_function("tp_ud", |b| {
        b.iter(|| {
            for pdu in black_box(&parts) {
                pdu.to_bytes().unwrap();
            }
        })
    });
    group.bench_function("sms_submit", |b| {
        b.iter(|| submit.encode_parts(black_box(&parts)).unwrap())
    });

    group.finish();
}

criterion_group!(
    benches,
    bench_septet_packing,
    bench_message_sizes,
    bench_serialization,
);

criterion_main!(benches);
