//
// Copyright 2017-2026 Hans W. Uhlig. All Rights Reserved.
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//      http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.
//


//! Benchmarks for telnetcodec performance

use bytes::{Bytes, BytesMut};
use clc_telnetcodec::consts::{self, option};
use clc_telnetcodec::{TelnetCodec, TelnetFrame, TelnetOption, ZmpMessage, ZmpRegistry};
use criterion::{BenchmarkId, Criterion, Throughput, criterion_group, criterion_main};
use std::hint::black_box;
use tokio_util::codec::{Decoder, Encoder};

// ============================================================================
// Encoding Benchmarks
// ============================================================================

fn bench_encode_data_sizes(c: &mut Criterion) {
    let mut group = c.benchmark_group("encode_data_sizes");

    for size in [10, 100, 1000, 10000].iter() {
        group.throughput(Throughput::Bytes(*size as u64));

        group.bench_with_input(BenchmarkId::from_parameter(size), size, |b, &size| {
            let mut codec = TelnetCodec::new();
            let mut buffer = BytesMut::with_capacity(size * 2);
            let data: Bytes = (0..size).map(|i| (i % 256) as u8).collect();

            b.iter(|| {
                buffer.clear();
                codec
                    .encode(black_box(TelnetFrame::Data(data.clone())), &mut buffer)
                    .unwrap();
            });
        });
    }

    group.finish();
}

fn bench_encode_negotiation(c: &mut Criterion) {
    let mut group = c.benchmark_group("encode_negotiation");

    group.bench_function("do_echo", |b| {
        let mut codec = TelnetCodec::new();
        let mut buffer = BytesMut::with_capacity(1024);

        b.iter(|| {
            buffer.clear();
            codec
                .encode(black_box(TelnetFrame::Do(TelnetOption::Echo)), &mut buffer)
                .unwrap();
        });
    });

    group.bench_function("naws", |b| {
        let mut codec = TelnetCodec::new();
        let mut buffer = BytesMut::with_capacity(1024);

        b.iter(|| {
            buffer.clear();
            codec
                .encode(
                    black_box(TelnetFrame::window_size(80, 24).unwrap()),
                    &mut buffer,
                )
                .unwrap();
        });
    });

    group.bench_function("zmp_ident", |b| {
        let mut codec = TelnetCodec::new();
        let mut buffer = BytesMut::with_capacity(1024);
        let message = ZmpMessage::new("zmp.ident")
            .with_argument("clc")
            .with_argument("0.1.0")
            .with_argument("Line-oriented MUD client");

        b.iter(|| {
            buffer.clear();
            codec.encode(black_box(&message), &mut buffer).unwrap();
        });
    });

    group.finish();
}

// ============================================================================
// Decoding Benchmarks
// ============================================================================

fn bench_decode_data_sizes(c: &mut Criterion) {
    let mut group = c.benchmark_group("decode_data_sizes");

    for size in [10, 100, 1000, 10000].iter() {
        group.throughput(Throughput::Bytes(*size as u64));

        group.bench_with_input(BenchmarkId::from_parameter(size), size, |b, &size| {
            let data: Vec<u8> = (0..size).map(|i| (i % 255) as u8).collect();

            b.iter(|| {
                let mut codec = TelnetCodec::new();
                let mut buffer = BytesMut::from(&data[..]);
                while let Some(event) = codec.decode(&mut buffer).unwrap() {
                    black_box(event);
                }
            });
        });
    }

    group.finish();
}

fn bench_decode_zmp(c: &mut Criterion) {
    let mut group = c.benchmark_group("decode_zmp");

    let mut input = vec![consts::IAC, consts::WILL, option::ZMP];
    for _ in 0..100 {
        input.extend_from_slice(&[consts::IAC, consts::SB, option::ZMP]);
        input.extend_from_slice(b"zmp.check\0zmp.ping\0");
        input.extend_from_slice(&[consts::IAC, consts::SE]);
    }
    group.throughput(Throughput::Bytes(input.len() as u64));

    group.bench_function("check_and_dispatch", |b| {
        let registry = ZmpRegistry::with_builtins();

        b.iter(|| {
            let mut codec = TelnetCodec::new();
            let mut buffer = BytesMut::from(&input[..]);
            while let Some(event) = codec.decode(&mut buffer).unwrap() {
                if let clc_telnetcodec::TelnetEvent::Zmp(message) = event {
                    black_box(registry.dispatch(&message));
                }
            }
        });
    });

    group.finish();
}

fn bench_decode_mixed_content(c: &mut Criterion) {
    let mut group = c.benchmark_group("decode_mixed_content");

    let mut input = Vec::new();
    for _ in 0..50 {
        input.extend_from_slice(b"\x1b[32mThe Town Square\x1b[0m\r\nYou see a fountain.\r\n");
        input.extend_from_slice(&[consts::IAC, consts::WILL, option::ECHO]);
        input.extend_from_slice(&[consts::IAC, consts::WONT, option::ECHO]);
        input.extend_from_slice(&[consts::IAC, consts::IAC]);
    }
    group.throughput(Throughput::Bytes(input.len() as u64));

    group.bench_function("room_descriptions", |b| {
        b.iter(|| {
            let mut codec = TelnetCodec::new();
            let mut buffer = BytesMut::from(&input[..]);
            while let Some(event) = codec.decode(&mut buffer).unwrap() {
                black_box(event);
            }
        });
    });

    group.finish();
}

criterion_group!(
    encoding_benches,
    bench_encode_data_sizes,
    bench_encode_negotiation
);

criterion_group!(
    decoding_benches,
    bench_decode_data_sizes,
    bench_decode_zmp,
    bench_decode_mixed_content
);

criterion_main!(encoding_benches, decoding_benches);
