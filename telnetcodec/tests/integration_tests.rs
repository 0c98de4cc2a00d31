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


//! Integration tests for telnetcodec
//!
//! These tests drive the codec with complete server conversations and check the replies a
//! client would put back on the wire.

use bytes::{Bytes, BytesMut};
use clc_telnetcodec::consts::{self, option};
use clc_telnetcodec::escape::escape;
use clc_telnetcodec::{TelnetCodec, TelnetEvent, TelnetFrame, TelnetOption, ZmpMessage, ZmpRegistry};
use proptest::prelude::*;
use tokio_util::codec::{Decoder, Encoder};

// ============================================================================
// Helper Functions
// ============================================================================

fn decode_all(codec: &mut TelnetCodec, buffer: &mut BytesMut) -> Vec<TelnetEvent> {
    let mut events = Vec::new();
    while let Some(event) = codec.decode(buffer).unwrap() {
        events.push(event);
    }
    events
}

fn decode_chunked(codec: &mut TelnetCodec, input: &[u8], chunk: usize) -> Vec<TelnetEvent> {
    let mut events = Vec::new();
    for piece in input.chunks(chunk.max(1)) {
        let mut buffer = BytesMut::from(piece);
        events.extend(decode_all(codec, &mut buffer));
    }
    events
}

fn data_bytes(events: &[TelnetEvent]) -> Vec<u8> {
    events
        .iter()
        .filter_map(|event| match event {
            TelnetEvent::Data(byte) => Some(*byte),
            _ => None,
        })
        .collect()
}

/// Plays the client: answers negotiation and ZMP the way a session would.
fn respond(codec: &mut TelnetCodec, registry: &ZmpRegistry, input: &[u8]) -> BytesMut {
    let mut buffer = BytesMut::from(input);
    let mut output = BytesMut::new();
    for event in decode_all(codec, &mut buffer) {
        match event {
            TelnetEvent::Negotiate(reply) => codec.encode(reply, &mut output).unwrap(),
            TelnetEvent::WindowSizeRequested => codec
                .encode(TelnetFrame::window_size(80, 24).unwrap(), &mut output)
                .unwrap(),
            TelnetEvent::Zmp(message) => {
                if let Some(reply) = registry.dispatch(&message) {
                    codec.encode(&reply, &mut output).unwrap();
                }
            }
            _ => {}
        }
    }
    output
}

// ============================================================================
// Negotiation Conversations
// ============================================================================

#[test]
fn password_prompt_suppresses_and_restores_echo() {
    let mut codec = TelnetCodec::new();
    let registry = ZmpRegistry::with_builtins();

    let reply = respond(
        &mut codec,
        &registry,
        b"Password: \xFF\xFB\x01",
    );
    assert_eq!(&reply[..], &[consts::IAC, consts::DO, option::ECHO]);
    assert!(!codec.options().local_echo());

    let reply = respond(&mut codec, &registry, b"\xFF\xFC\x01\r\nWelcome!\r\n");
    assert_eq!(&reply[..], &[consts::IAC, consts::DONT, option::ECHO]);
    assert!(codec.options().local_echo());
}

#[test]
fn naws_request_is_answered_with_size() {
    let mut codec = TelnetCodec::new();
    let registry = ZmpRegistry::with_builtins();
    let reply = respond(&mut codec, &registry, &[consts::IAC, consts::DO, option::NAWS]);
    assert_eq!(
        &reply[..],
        &[
            consts::IAC,
            consts::WILL,
            option::NAWS,
            consts::IAC,
            consts::SB,
            option::NAWS,
            0,
            80,
            0,
            24,
            consts::IAC,
            consts::SE,
        ]
    );
}

#[test]
fn zmp_check_round_trip() {
    let mut codec = TelnetCodec::new();
    let registry = ZmpRegistry::with_builtins();
    respond(&mut codec, &registry, &[consts::IAC, consts::WILL, option::ZMP]);

    let mut server = BytesMut::new();
    codec
        .encode(
            &ZmpMessage::new("zmp.check").with_argument("zmp.ping"),
            &mut server,
        )
        .unwrap();
    let reply = respond(&mut codec, &registry, &server);

    let mut expected = BytesMut::new();
    codec
        .encode(
            &ZmpMessage::new("zmp.support").with_argument("zmp.ping"),
            &mut expected,
        )
        .unwrap();
    assert_eq!(reply, expected);
}

#[test]
fn zmp_check_with_missing_argument_is_ignored() {
    let mut codec = TelnetCodec::new();
    let registry = ZmpRegistry::with_builtins();
    respond(&mut codec, &registry, &[consts::IAC, consts::WILL, option::ZMP]);
    let mut server = BytesMut::new();
    codec
        .encode(&ZmpMessage::new("zmp.check"), &mut server)
        .unwrap();
    assert!(respond(&mut codec, &registry, &server).is_empty());
}

#[test]
fn oversized_subnegotiation_is_dropped() {
    let mut codec = TelnetCodec::new();
    let mut input = vec![consts::IAC, consts::WILL, option::ZMP, consts::IAC, consts::SB, option::ZMP];
    input.extend(std::iter::repeat_n(b'a', consts::SUBNEGOTIATION_CAPACITY + 16));
    input.extend_from_slice(&[0, consts::IAC, consts::SE]);
    input.extend_from_slice(b"ok");

    let mut buffer = BytesMut::from(&input[..]);
    let events = decode_all(&mut codec, &mut buffer);
    assert!(!events.iter().any(|event| matches!(event, TelnetEvent::Zmp(_))));
    // The abandoned payload tail is read as data once the buffer overflows.
    assert!(data_bytes(&events).ends_with(b"ok"));
    assert!(codec.is_normal_data());
}

#[test]
fn subnegotiation_passthrough_keeps_payload() {
    let mut codec = TelnetCodec::new();
    let frame = TelnetFrame::Subnegotiate(TelnetOption::TTYPE, Bytes::from_static(&[1, 255, 2]));
    let mut buffer = BytesMut::new();
    codec.encode(frame, &mut buffer).unwrap();
    let events = decode_all(&mut codec, &mut buffer);
    assert_eq!(
        events,
        vec![TelnetEvent::Subnegotiate(
            TelnetOption::TTYPE,
            BytesMut::from(&[1u8, 255, 2][..])
        )]
    );
}

// ============================================================================
// Property Tests
// ============================================================================

proptest! {
    #[test]
    fn escaped_data_decodes_to_itself(data in proptest::collection::vec(any::<u8>(), 0..512)) {
        let mut codec = TelnetCodec::new();
        let mut buffer = escape(&data);
        let events = decode_all(&mut codec, &mut buffer);
        prop_assert_eq!(events.len(), data.len());
        prop_assert_eq!(data_bytes(&events), data);
        prop_assert!(codec.is_normal_data());
    }

    #[test]
    fn chunking_does_not_change_events(
        data in proptest::collection::vec(any::<u8>(), 0..512),
        chunk in 1usize..17,
    ) {
        let mut whole = TelnetCodec::new();
        let mut buffer = BytesMut::from(&data[..]);
        let expected = decode_all(&mut whole, &mut buffer);

        let mut split = TelnetCodec::new();
        let actual = decode_chunked(&mut split, &data, chunk);
        prop_assert_eq!(actual, expected);
        prop_assert_eq!(split.options(), whole.options());
    }

    #[test]
    fn zmp_messages_survive_the_wire(
        command in "[a-z]{1,8}\\.[a-z]{1,8}",
        arguments in proptest::collection::vec("[^\\x00]{0,16}", 0..8),
    ) {
        let mut message = ZmpMessage::new(command);
        for argument in arguments {
            message = message.with_argument(argument);
        }
        let mut codec = TelnetCodec::new();
        let mut buffer = BytesMut::from(&[consts::IAC, consts::WILL, option::ZMP][..]);
        codec.encode(&message, &mut buffer).unwrap();
        let events = decode_all(&mut codec, &mut buffer);
        prop_assert_eq!(events.last(), Some(&TelnetEvent::Zmp(message)));
    }
}
