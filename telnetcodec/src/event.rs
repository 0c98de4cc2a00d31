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


use crate::{TelnetFrame, TelnetOption, ZmpMessage};
use bytes::BytesMut;

///
/// `TelnetEvent` represents what the decoder produced from the inbound stream.
///
/// Besides decoded data, the decoder reports the replies its negotiation logic wants
/// sent and any complete, validated subnegotiation.
///
#[derive(Clone, Debug, PartialEq)]
pub enum TelnetEvent {
    /// Telnet Data Byte
    Data(u8),
    /// IAC followed by a command byte the client does not handle
    UnknownCommand(u8),
    /// Negotiation reply that must be sent to the peer
    Negotiate(TelnetFrame),
    /// Peer enabled NAWS and expects a window size report now
    WindowSizeRequested,
    /// Complete, validated ZMP message
    Zmp(ZmpMessage),
    /// Complete subnegotiation for an option without a dedicated handler
    Subnegotiate(TelnetOption, BytesMut),
}
