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


//! Unit tests for telnetcodec components

use bytes::{Bytes, BytesMut};
use clc_telnetcodec::consts::{self, option};
use clc_telnetcodec::escape::{escape, escaped_len};
use clc_telnetcodec::zmp::command;
use clc_telnetcodec::{
    CodecError, SubnegotiationBuffer, TelnetFrame, TelnetOption, TelnetOptions, ZmpErrorKind,
    ZmpHandler, ZmpMessage, ZmpRegistry,
};

// ============================================================================
// Helper Functions
// ============================================================================

fn encode_frame(frame: &TelnetFrame) -> BytesMut {
    let mut buffer = BytesMut::new();
    frame.encode(&mut buffer);
    buffer
}

// ============================================================================
// TelnetOption Tests
// ============================================================================

#[test]
fn telnet_option_from_u8() {
    assert_eq!(TelnetOption::from(1), TelnetOption::Echo);
    assert_eq!(TelnetOption::from(3), TelnetOption::SuppressGoAhead);
    assert_eq!(TelnetOption::from(31), TelnetOption::NAWS);
    assert_eq!(TelnetOption::from(93), TelnetOption::ZMP);
    assert_eq!(TelnetOption::from(200), TelnetOption::Unknown(200));
}

#[test]
fn telnet_option_to_u8() {
    assert_eq!(u8::from(TelnetOption::Echo), 1);
    assert_eq!(u8::from(TelnetOption::TTYPE), 24);
    assert_eq!(u8::from(TelnetOption::ZMP), 93);
    assert_eq!(u8::from(TelnetOption::Unknown(77)), 77);
}

#[test]
fn telnet_options_default() {
    let options = TelnetOptions::default();
    assert!(options.local_echo());
    assert!(!options.zmp_enabled());
    assert!(!options.naws_enabled());
}

// ============================================================================
// Escaping Tests
// ============================================================================

#[test]
fn escape_doubles_only_iac() {
    let input = [0u8, 1, consts::IAC, 254, consts::IAC, consts::IAC];
    let escaped = escape(&input);
    assert_eq!(
        &escaped[..],
        &[
            0,
            1,
            consts::IAC,
            consts::IAC,
            254,
            consts::IAC,
            consts::IAC,
            consts::IAC,
            consts::IAC,
            consts::IAC,
            consts::IAC
        ]
    );
    assert_eq!(escaped_len(&input), escaped.len());
}

#[test]
fn escape_empty() {
    assert!(escape(&[]).is_empty());
    assert_eq!(escaped_len(&[]), 0);
}

// ============================================================================
// TelnetFrame Tests
// ============================================================================

#[test]
fn encode_negotiation_frames() {
    assert_eq!(
        &encode_frame(&TelnetFrame::Do(TelnetOption::Echo))[..],
        &[consts::IAC, consts::DO, option::ECHO]
    );
    assert_eq!(
        &encode_frame(&TelnetFrame::Dont(TelnetOption::Echo))[..],
        &[consts::IAC, consts::DONT, option::ECHO]
    );
    assert_eq!(
        &encode_frame(&TelnetFrame::Will(TelnetOption::NAWS))[..],
        &[consts::IAC, consts::WILL, option::NAWS]
    );
    assert_eq!(
        &encode_frame(&TelnetFrame::Wont(TelnetOption::ZMP))[..],
        &[consts::IAC, consts::WONT, option::ZMP]
    );
}

#[test]
fn encode_window_size() {
    let frame = TelnetFrame::window_size(80, 24).unwrap();
    assert_eq!(
        &encode_frame(&frame)[..],
        &[
            consts::IAC,
            consts::SB,
            option::NAWS,
            0,
            80,
            0,
            24,
            consts::IAC,
            consts::SE
        ]
    );
}

#[test]
fn encode_data_frame_escapes_iac() {
    let frame = TelnetFrame::Data(Bytes::from_static(b"\xFFok"));
    assert_eq!(&encode_frame(&frame)[..], b"\xFF\xFFok");
    assert!(frame.len() >= 4);
    assert!(TelnetFrame::Data(Bytes::new()).is_empty());
}

#[test]
fn encode_zmp_frame_rejects_embedded_nul() {
    let message = ZmpMessage::new("zmp.ident").with_argument("bad\0arg");
    assert_eq!(
        TelnetFrame::zmp(&message),
        Err(CodecError::Zmp(ZmpErrorKind::EmbeddedNul { index: 1 }))
    );
}

// ============================================================================
// SubnegotiationBuffer Tests
// ============================================================================

#[test]
fn subnegotiation_buffer_rejects_when_full() {
    let mut buffer = SubnegotiationBuffer::with_capacity(2);
    buffer.push(1).unwrap();
    buffer.push(2).unwrap();
    assert!(buffer.is_full());
    assert_eq!(
        buffer.push(3),
        Err(CodecError::CapacityExceeded { capacity: 2 })
    );
    assert_eq!(buffer.as_slice(), &[1, 2]);
    let taken = buffer.take();
    assert_eq!(&taken[..], &[1, 2]);
    assert!(buffer.is_empty());
}

// ============================================================================
// ZmpMessage Tests
// ============================================================================

#[test]
fn zmp_parse_arguments() {
    let message = ZmpMessage::parse(b"zmp.check\0zmp.ping\0").unwrap();
    assert_eq!(message.command(), "zmp.check");
    assert_eq!(message.arguments(), &["zmp.ping".to_string()]);
    assert_eq!(message.argc(), 2);
    assert_eq!(message.to_string(), "zmp.check zmp.ping");
}

#[test]
fn zmp_parse_keeps_empty_arguments() {
    let message = ZmpMessage::parse(b"x.y\0\0\0").unwrap();
    assert_eq!(message.argc(), 3);
    assert!(message.arguments().iter().all(String::is_empty));
}

#[test]
fn zmp_parse_errors() {
    assert_eq!(
        ZmpMessage::parse(b""),
        Err(CodecError::Zmp(ZmpErrorKind::Empty))
    );
    assert_eq!(
        ZmpMessage::parse(b"zmp.ping"),
        Err(CodecError::Zmp(ZmpErrorKind::Unterminated))
    );
    assert_eq!(
        ZmpMessage::parse(b"\0"),
        Err(CodecError::Zmp(ZmpErrorKind::MissingCommand))
    );
}

#[test]
fn zmp_parse_argument_limit() {
    let mut payload = Vec::new();
    for _ in 0..consts::ZMP_MAX_ARGUMENTS {
        payload.extend_from_slice(b"a\0");
    }
    assert_eq!(
        ZmpMessage::parse(&payload).unwrap().argc(),
        consts::ZMP_MAX_ARGUMENTS
    );
    payload.extend_from_slice(b"a\0");
    assert_eq!(
        ZmpMessage::parse(&payload),
        Err(CodecError::Zmp(ZmpErrorKind::TooManyArguments {
            max: consts::ZMP_MAX_ARGUMENTS
        }))
    );
}

// ============================================================================
// ZmpRegistry Tests
// ============================================================================

#[test]
fn registry_supports_packages_and_commands() {
    let registry = ZmpRegistry::with_builtins();
    assert!(registry.supports("zmp."));
    assert!(registry.supports(command::PING));
    assert!(!registry.supports("zmp"));
    assert!(!registry.supports("moo."));
    assert!(!registry.supports(""));
}

#[test]
fn registry_custom_command_is_found() {
    let mut registry = ZmpRegistry::new();
    assert!(registry.commands().is_empty());
    registry.register("moo.ping", ZmpHandler::Ping);
    assert_eq!(
        registry.find("moo.ping").map(|command| command.handler()),
        Some(ZmpHandler::Ping)
    );
    assert!(registry.supports("moo."));
    assert!(registry.find("moo.pong").is_none());
}

#[test]
fn registry_check_answers_no_support() {
    let registry = ZmpRegistry::with_builtins();
    let reply = registry
        .dispatch(&ZmpMessage::new(command::CHECK).with_argument("color.define"))
        .unwrap();
    assert_eq!(reply, ZmpMessage::new(command::NO_SUPPORT).with_argument("color.define"));
}

#[test]
fn registry_ping_answers_time() {
    let registry = ZmpRegistry::with_builtins();
    let reply = registry.dispatch(&ZmpMessage::new(command::PING)).unwrap();
    assert_eq!(reply.command(), command::TIME);
    assert_eq!(reply.argc(), 2);
    assert_eq!(reply.arguments()[0].len(), "YYYY-MM-DD HH:MM:SS".len());
}

#[test]
fn registry_ignores_unknown_commands() {
    let registry = ZmpRegistry::with_builtins();
    assert!(registry.dispatch(&ZmpMessage::new("color.use")).is_none());
}
