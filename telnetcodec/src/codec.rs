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


use super::{CodecError, TelnetEvent, TelnetFrame, TelnetOption, ZmpMessage, consts};
use crate::buffer::SubnegotiationBuffer;
use crate::options::TelnetOptions;
use bytes::{Buf, BytesMut};
use std::collections::VecDeque;
use tokio_util::codec::{Decoder, Encoder};
use tracing::{debug, trace, warn};

/// A codec for the client side of a Telnet connection.
///
/// `TelnetCodec` owns the negotiation state of one session: the decoder state machine,
/// the bounded subnegotiation accumulator and the negotiated [`TelnetOptions`]. It is
/// driven one byte at a time, so feeding a stream in arbitrary chunks yields the same
/// events as feeding it whole.
///
/// Malformed input never produces an error. Unknown commands surface as
/// [`TelnetEvent::UnknownCommand`], broken or oversized subnegotiations are dropped and
/// the decoder returns to normal data.
pub struct TelnetCodec {
    decoder_state: DecoderState,
    decoder_buffer: SubnegotiationBuffer,
    options: TelnetOptions,
    pending: VecDeque<TelnetEvent>,
}

impl TelnetCodec {
    /// Creates a codec with the default subnegotiation capacity.
    ///
    /// # Example
    /// ```
    /// use clc_telnetcodec::TelnetCodec;
    ///
    /// let codec = TelnetCodec::new();
    /// assert!(codec.options().local_echo());
    /// ```
    pub fn new() -> TelnetCodec {
        TelnetCodec::default()
    }

    /// Creates a codec whose subnegotiation buffer holds at most `capacity` bytes,
    /// option byte included.
    pub fn with_capacity(capacity: usize) -> TelnetCodec {
        TelnetCodec {
            decoder_state: DecoderState::NormalData,
            decoder_buffer: SubnegotiationBuffer::with_capacity(capacity),
            options: TelnetOptions::default(),
            pending: VecDeque::new(),
        }
    }

    /// Negotiated session state.
    pub fn options(&self) -> TelnetOptions {
        self.options
    }

    /// `true` while the decoder is between commands in plain data.
    pub fn is_normal_data(&self) -> bool {
        self.decoder_state == DecoderState::NormalData
    }

    /// `true` while a subnegotiation payload is being accumulated.
    pub fn is_subnegotiating(&self) -> bool {
        matches!(
            self.decoder_state,
            DecoderState::Subnegotiate | DecoderState::SubnegotiateIAC
        )
    }

    fn decode_byte(&mut self, byte: u8) -> Option<TelnetEvent> {
        match (self.decoder_state, byte) {
            (DecoderState::NormalData, consts::IAC) => {
                self.decoder_state = DecoderState::InterpretAsCommand;
                None
            }
            (DecoderState::NormalData, _) => Some(TelnetEvent::Data(byte)),
            (DecoderState::InterpretAsCommand, consts::IAC) => {
                self.decoder_state = DecoderState::NormalData;
                Some(TelnetEvent::Data(consts::IAC))
            }
            (DecoderState::InterpretAsCommand, consts::DO) => {
                self.decoder_state = DecoderState::NegotiateDo;
                None
            }
            (DecoderState::InterpretAsCommand, consts::DONT) => {
                self.decoder_state = DecoderState::NegotiateDont;
                None
            }
            (DecoderState::InterpretAsCommand, consts::WILL) => {
                self.decoder_state = DecoderState::NegotiateWill;
                None
            }
            (DecoderState::InterpretAsCommand, consts::WONT) => {
                self.decoder_state = DecoderState::NegotiateWont;
                None
            }
            (DecoderState::InterpretAsCommand, consts::SB) => {
                self.decoder_state = DecoderState::Subnegotiate;
                self.decoder_buffer.clear();
                None
            }
            (DecoderState::InterpretAsCommand, _) => {
                warn!("Received Unknown Command {:#X}", byte);
                self.decoder_state = DecoderState::NormalData;
                Some(TelnetEvent::UnknownCommand(byte))
            }
            (DecoderState::NegotiateDo, _) => {
                self.decoder_state = DecoderState::NormalData;
                match TelnetOption::from_u8(byte) {
                    TelnetOption::NAWS => {
                        self.options.set_naws(true);
                        self.pending.push_back(TelnetEvent::WindowSizeRequested);
                        Some(TelnetEvent::Negotiate(TelnetFrame::Will(TelnetOption::NAWS)))
                    }
                    option => {
                        debug!("Ignoring DO {}", option);
                        None
                    }
                }
            }
            (DecoderState::NegotiateDont, _) => {
                self.decoder_state = DecoderState::NormalData;
                debug!("Ignoring DONT {}", TelnetOption::from_u8(byte));
                None
            }
            (DecoderState::NegotiateWill, _) => {
                self.decoder_state = DecoderState::NormalData;
                match TelnetOption::from_u8(byte) {
                    TelnetOption::Echo => {
                        self.options.set_local_echo(false);
                        Some(TelnetEvent::Negotiate(TelnetFrame::Do(TelnetOption::Echo)))
                    }
                    TelnetOption::ZMP => {
                        self.options.set_zmp(true);
                        Some(TelnetEvent::Negotiate(TelnetFrame::Do(TelnetOption::ZMP)))
                    }
                    option => {
                        debug!("Ignoring WILL {}", option);
                        None
                    }
                }
            }
            (DecoderState::NegotiateWont, _) => {
                self.decoder_state = DecoderState::NormalData;
                match TelnetOption::from_u8(byte) {
                    TelnetOption::Echo => {
                        self.options.set_local_echo(true);
                        Some(TelnetEvent::Negotiate(TelnetFrame::Dont(TelnetOption::Echo)))
                    }
                    option => {
                        debug!("Ignoring WONT {}", option);
                        None
                    }
                }
            }
            (DecoderState::Subnegotiate, consts::IAC) => {
                self.decoder_state = DecoderState::SubnegotiateIAC;
                None
            }
            (DecoderState::Subnegotiate, _) => {
                self.accumulate(byte);
                None
            }
            (DecoderState::SubnegotiateIAC, consts::IAC) => {
                self.decoder_state = DecoderState::Subnegotiate;
                self.accumulate(consts::IAC);
                None
            }
            (DecoderState::SubnegotiateIAC, consts::SE) => {
                self.decoder_state = DecoderState::NormalData;
                self.end_subnegotiation()
            }
            (DecoderState::SubnegotiateIAC, _) => {
                warn!(
                    "Received Unknown or invalid Command during Subnegotiation {:#X}. Aborting",
                    byte
                );
                self.decoder_state = DecoderState::NormalData;
                self.decoder_buffer.clear();
                None
            }
        }
    }

    /// Appends a payload byte, abandoning the whole subnegotiation when the buffer is full.
    fn accumulate(&mut self, byte: u8) {
        if let Err(error) = self.decoder_buffer.push(byte) {
            warn!("Subnegotiation overflow ({}), discarding payload", error);
            self.decoder_state = DecoderState::NormalData;
            self.decoder_buffer.clear();
        }
    }

    fn end_subnegotiation(&mut self) -> Option<TelnetEvent> {
        let mut payload = self.decoder_buffer.take();
        if payload.is_empty() {
            return None;
        }
        let option = TelnetOption::from_u8(payload.get_u8());
        match option {
            TelnetOption::ZMP => self.zmp_message(&payload).map(TelnetEvent::Zmp),
            option => {
                trace!("Subnegotiation for {} ({} bytes)", option, payload.len());
                Some(TelnetEvent::Subnegotiate(option, payload))
            }
        }
    }

    /// Validates a ZMP payload (option byte already stripped).
    fn zmp_message(&self, payload: &[u8]) -> Option<ZmpMessage> {
        if !self.options.zmp_enabled() {
            debug!("Ignoring ZMP subnegotiation, ZMP was not negotiated");
            return None;
        }
        let well_formed = payload.len() >= 2
            && payload[0].is_ascii_alphabetic()
            && payload.last() == Some(&0);
        if !well_formed {
            debug!("Ignoring malformed ZMP subnegotiation");
            return None;
        }
        match ZmpMessage::parse(payload) {
            Ok(message) => Some(message),
            Err(error) => {
                warn!("Dropping ZMP subnegotiation: {}", error);
                None
            }
        }
    }
}

impl Default for TelnetCodec {
    fn default() -> Self {
        TelnetCodec::with_capacity(consts::SUBNEGOTIATION_CAPACITY)
    }
}

impl Decoder for TelnetCodec {
    type Item = TelnetEvent;
    type Error = CodecError;

    /// Consumes bytes from `src` until one event is produced.
    ///
    /// ## States
    /// - `NormalData`: bytes are data; IAC switches to `InterpretAsCommand`.
    /// - `InterpretAsCommand`: `IAC` is an escaped data byte, `DO`/`DONT`/`WILL`/`WONT`
    ///   select a negotiation state, `SB` starts a subnegotiation, anything else is an
    ///   unknown command.
    /// - `NegotiateDo`/`Dont`/`Will`/`Wont`: the byte is the option; the reply, if any,
    ///   is emitted as [`TelnetEvent::Negotiate`].
    /// - `Subnegotiate`: bytes accumulate until IAC; a full buffer abandons the payload.
    /// - `SubnegotiateIAC`: `IAC` is an escaped payload byte, `SE` completes the
    ///   subnegotiation, anything else abandons it.
    ///
    /// Returns `Ok(None)` once `src` is exhausted; partial sequences are carried over in
    /// the decoder state, not in `src`.
    fn decode(&mut self, src: &mut BytesMut) -> Result<Option<TelnetEvent>, Self::Error> {
        if let Some(event) = self.pending.pop_front() {
            return Ok(Some(event));
        }
        while src.has_remaining() {
            let byte = src.get_u8();
            if let Some(event) = self.decode_byte(byte) {
                return Ok(Some(event));
            }
        }
        Ok(None)
    }
}

impl Encoder<TelnetFrame> for TelnetCodec {
    type Error = CodecError;

    fn encode(&mut self, item: TelnetFrame, dst: &mut BytesMut) -> Result<(), Self::Error> {
        item.encode(dst);
        Ok(())
    }
}

impl Encoder<&ZmpMessage> for TelnetCodec {
    type Error = CodecError;

    fn encode(&mut self, item: &ZmpMessage, dst: &mut BytesMut) -> Result<(), Self::Error> {
        TelnetFrame::zmp(item)?.encode(dst);
        Ok(())
    }
}

///
/// Internal state of the Telnet decoder.
///
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
enum DecoderState {
    /// Normal Data
    NormalData,
    /// Received IAC, Next byte is Command
    InterpretAsCommand,
    /// Received DO Command, Next Byte is the option
    NegotiateDo,
    /// Received DONT Command, Next Byte is the option
    NegotiateDont,
    /// Received WILL Command, Next Byte is the option
    NegotiateWill,
    /// Received WONT Command, Next Byte is the option
    NegotiateWont,
    /// Inside a subnegotiation, accumulating payload
    Subnegotiate,
    /// Received IAC during Subnegotiation, Next Byte is command
    SubnegotiateIAC,
}
