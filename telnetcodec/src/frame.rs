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


use crate::consts::{DO, DONT, IAC, SB, SE, WILL, WONT};
use crate::escape::escape_into;
use crate::{CodecResult, TelnetOption, ZmpMessage};
use byteorder::{BigEndian, WriteBytesExt};
use bytes::{BufMut, Bytes, BytesMut};

///
/// `TelnetFrame` is a unit of outbound traffic.
///
/// Frames are turned into wire bytes by the [`TelnetCodec`](crate::TelnetCodec)
/// encoder, which applies IAC escaping to data and subnegotiation payloads.
///
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum TelnetFrame {
    /// Application data, escaped on encode
    Data(Bytes),
    /// Ask the peer to enable an option
    Do(TelnetOption),
    /// Ask the peer to disable an option
    Dont(TelnetOption),
    /// Offer to enable an option locally
    Will(TelnetOption),
    /// Refuse or disable an option locally
    Wont(TelnetOption),
    /// Subnegotiation payload for an option, escaped on encode
    Subnegotiate(TelnetOption, Bytes),
}

impl TelnetFrame {
    /// Builds a NAWS size report: columns then rows, both big-endian.
    pub fn window_size(cols: u16, rows: u16) -> CodecResult<TelnetFrame> {
        let mut payload = Vec::with_capacity(4);
        payload.write_u16::<BigEndian>(cols)?;
        payload.write_u16::<BigEndian>(rows)?;
        Ok(TelnetFrame::Subnegotiate(
            TelnetOption::NAWS,
            Bytes::from(payload),
        ))
    }

    /// Wraps a ZMP message in a subnegotiation frame.
    pub fn zmp(message: &ZmpMessage) -> CodecResult<TelnetFrame> {
        let mut payload = BytesMut::with_capacity(message.encoded_len());
        message.encode(&mut payload)?;
        Ok(TelnetFrame::Subnegotiate(TelnetOption::ZMP, payload.freeze()))
    }

    /// Upper bound of the encoded size of this frame.
    pub fn len(&self) -> usize {
        match self {
            TelnetFrame::Data(data) => data.len() * 2,
            TelnetFrame::Do(_)
            | TelnetFrame::Dont(_)
            | TelnetFrame::Will(_)
            | TelnetFrame::Wont(_) => 3,
            TelnetFrame::Subnegotiate(_, payload) => 5 + payload.len() * 2,
        }
    }

    /// `true` for a data frame without bytes.
    pub fn is_empty(&self) -> bool {
        matches!(self, TelnetFrame::Data(data) if data.is_empty())
    }

    /// Writes the wire representation of this frame to `dst`.
    pub fn encode(&self, dst: &mut BytesMut) {
        match self {
            TelnetFrame::Data(data) => escape_into(data, dst),
            TelnetFrame::Do(option) => Self::put_negotiation(dst, DO, *option),
            TelnetFrame::Dont(option) => Self::put_negotiation(dst, DONT, *option),
            TelnetFrame::Will(option) => Self::put_negotiation(dst, WILL, *option),
            TelnetFrame::Wont(option) => Self::put_negotiation(dst, WONT, *option),
            TelnetFrame::Subnegotiate(option, payload) => {
                dst.reserve(5 + payload.len());
                dst.put_u8(IAC);
                dst.put_u8(SB);
                dst.put_u8(option.to_u8());
                escape_into(payload, dst);
                dst.put_u8(IAC);
                dst.put_u8(SE);
            }
        }
    }

    fn put_negotiation(dst: &mut BytesMut, verb: u8, option: TelnetOption) {
        dst.reserve(3);
        dst.put_u8(IAC);
        dst.put_u8(verb);
        dst.put_u8(option.to_u8());
    }
}
