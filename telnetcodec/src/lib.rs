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


//! # CLC Telnet Protocol Codec
//!
//! The client half of the Telnet protocol (RFC 854) as spoken by MUD servers, together with
//! the Zenith MUD Protocol (ZMP) carried in option 93 subnegotiations.
//!
//! ## Overview
//!
//! The codec handles:
//!
//! - **Data transmission**: raw bytes with IAC (Interpret As Command) escaping
//! - **Option negotiation**: replies to `WILL ECHO`, `WONT ECHO`, `WILL ZMP` and `DO NAWS`
//! - **Subnegotiation**: bounded accumulation of `IAC SB ... IAC SE` payloads
//! - **ZMP**: NUL-separated argument vectors plus a registry of built-in commands
//!
//! ## Core Components
//!
//! ### [`TelnetCodec`]
//!
//! Implements [`Decoder`](tokio_util::codec::Decoder) producing [`TelnetEvent`]s and
//! [`Encoder`](tokio_util::codec::Encoder) for [`TelnetFrame`] and [`ZmpMessage`]. It owns
//! the negotiated [`TelnetOptions`].
//!
//! ### [`TelnetFrame`]
//!
//! Everything the client puts on the wire: escaped data, negotiation triplets and
//! subnegotiations such as window size reports and ZMP messages.
//!
//! ### [`ZmpRegistry`]
//!
//! Command table consulted for inbound ZMP messages. [`ZmpRegistry::dispatch`] returns the
//! reply to send, if any.
//!
//! ## Usage Example
//!
//! ```rust
//! use clc_telnetcodec::{TelnetCodec, TelnetEvent, TelnetFrame, TelnetOption};
//! use tokio_util::codec::{Decoder, Encoder};
//! use bytes::BytesMut;
//!
//! let mut codec = TelnetCodec::new();
//! let mut input = BytesMut::from(&b"Hi\xFF\xFB\x01"[..]); // Data + WILL Echo
//! let mut output = BytesMut::new();
//! while let Some(event) = codec.decode(&mut input).unwrap() {
//!     match event {
//!         TelnetEvent::Data(byte) => print!("{}", byte as char),
//!         TelnetEvent::Negotiate(reply) => codec.encode(reply, &mut output).unwrap(),
//!         _ => {}
//!     }
//! }
//! assert!(!codec.options().local_echo());
//! assert_eq!(&output[..], &[0xFF, 0xFD, 0x01]);
//! ```
//!
//! ## Error Handling
//!
//! Decoding never fails on malformed input: unknown commands are reported as events and
//! broken subnegotiations are dropped. [`CodecError`] is produced by transport I/O and by
//! encoding ZMP messages that cannot be represented on the wire.
//!
//! ## Related Documents
//!
//! - RFC 854: Telnet Protocol Specification
//! - RFC 857: Telnet Echo Option
//! - RFC 1073: Telnet Window Size Option
//! - ZMP: Zenith MUD Protocol

#![warn(
    clippy::cargo,
    missing_docs,
    clippy::pedantic,
    future_incompatible,
    rust_2018_idioms
)]
#![allow(
    clippy::option_if_let_else,
    clippy::module_name_repetitions,
    clippy::missing_errors_doc
)]

mod buffer;
mod codec;
pub mod consts;
pub mod escape;
mod event;
mod frame;
mod options;
mod result;
pub mod zmp;

pub use self::buffer::SubnegotiationBuffer;
pub use self::codec::TelnetCodec;
pub use self::event::TelnetEvent;
pub use self::frame::TelnetFrame;
pub use self::options::{TelnetOption, TelnetOptions};
pub use self::result::{CodecError, CodecResult, ZmpErrorKind};
pub use self::zmp::{ZmpHandler, ZmpMessage, ZmpRegistry};
