use std::hint::black_box;
use bencher::fixtures;
use criterion::{criterion_group, criterion_main, BatchSize, BenchmarkId, Criterion, Throughput};
use micro_request::codec::{parse, RequestDecoder};
use micro_request::protocol::Endpoints;
use tokio_util::bytes::BytesMut;
use tokio_util::codec::Decoder;

fn benchmark_request_decoder(criterion: &mut Criterion) {
    let mut group = criterion.benchmark_group("request_decoder");

    for fixture in fixtures() {
        group.throughput(Throughput::Bytes(fixture.len()));
        group.bench_with_input(BenchmarkId::from_parameter(fixture.name()), &fixture, |b, fixture| {
            let mut request_decoder = RequestDecoder::new();
            b.iter_batched_ref(
                || BytesMut::from(fixture.content()),
                |bytes_mut| {
                    let request = request_decoder.decode(bytes_mut).expect("input should be valid http request head").unwrap();
                    black_box(request);
                },
                BatchSize::SmallInput,
            );
        });
    }

    group.finish();
}

fn benchmark_parse(criterion: &mut Criterion) {
    let mut group = criterion.benchmark_group("parse");
    let endpoints = Endpoints::new("127.0.0.1:50000", "127.0.0.1:8080");

    for fixture in fixtures() {
        group.throughput(Throughput::Bytes(fixture.len()));
        group.bench_with_input(BenchmarkId::from_parameter(fixture.name()), &fixture, |b, fixture| {
            b.iter_batched_ref(
                || BytesMut::from(fixture.content()),
                |bytes_mut| black_box(parse(bytes_mut, &endpoints).expect("input should be valid http request head")),
                BatchSize::SmallInput,
            );
        });
    }

    group.finish();
}

criterion_group!(decoder, benchmark_request_decoder, benchmark_parse);
criterion_main!(decoder);
