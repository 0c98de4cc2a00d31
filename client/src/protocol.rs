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


//! Protocol selection

use crate::{ClientConfig, ProtocolKind, Result, TelnetProtocol, TextFrameProtocol};
use bytes::BytesMut;
use clc_terminal::{Display, TerminalEmulator, TerminalSize};

/// Session state a protocol reads and paints through.
pub struct SessionIo<'a> {
    pub emulator: &'a mut TerminalEmulator,
    pub display: &'a mut dyn Display,
    /// Bytes queued for the server
    pub outbound: &'a mut BytesMut,
    /// Prompt text shown on the status line
    pub prompt: &'a mut String,
}

impl SessionIo<'_> {
    /// Server output, interpreted by the emulator.
    pub fn feed(&mut self, bytes: &[u8]) {
        self.emulator.feed(&mut *self.display, bytes);
    }

    /// Text painted without any sequence interpretation.
    pub fn paint_plain(&mut self, bytes: &[u8]) {
        self.emulator.paint_plain(&mut *self.display, bytes);
    }

    pub fn size(&self) -> TerminalSize {
        self.display.size()
    }
}

/// The wire protocol of a session, chosen once at startup.
///
/// Each variant offers the same three operations so the editor, emulator and display
/// never need to know which protocol is in use.
pub enum Protocol {
    Telnet(TelnetProtocol),
    TextFrame(TextFrameProtocol),
}

impl Protocol {
    pub fn new(config: &ClientConfig) -> Protocol {
        match config.protocol {
            ProtocolKind::Telnet => Protocol::Telnet(TelnetProtocol::new(config)),
            ProtocolKind::TextFrame => Protocol::TextFrame(TextFrameProtocol::new(config)),
        }
    }

    pub fn kind(&self) -> ProtocolKind {
        match self {
            Protocol::Telnet(_) => ProtocolKind::Telnet,
            Protocol::TextFrame(_) => ProtocolKind::TextFrame,
        }
    }

    /// Queues a committed input line for the server.
    pub fn send_line(&mut self, io: &mut SessionIo<'_>, line: &str) -> Result<()> {
        match self {
            Protocol::Telnet(protocol) => protocol.send_line(io, line),
            Protocol::TextFrame(protocol) => protocol.send_line(io, line),
        }
    }

    /// Processes bytes received from the server.
    pub fn handle_input(&mut self, io: &mut SessionIo<'_>, bytes: &[u8]) -> Result<()> {
        match self {
            Protocol::Telnet(protocol) => protocol.handle_input(io, bytes),
            Protocol::TextFrame(protocol) => protocol.handle_input(io, bytes),
        }
    }

    /// Reacts to a new display size.
    pub fn handle_resize(&mut self, io: &mut SessionIo<'_>, size: TerminalSize) -> Result<()> {
        match self {
            Protocol::Telnet(protocol) => protocol.handle_resize(io, size),
            Protocol::TextFrame(protocol) => protocol.handle_resize(io, size),
        }
    }

    /// `false` while the server has taken over echoing, as during password entry.
    pub fn local_echo(&self) -> bool {
        match self {
            Protocol::Telnet(protocol) => protocol.local_echo(),
            Protocol::TextFrame(protocol) => protocol.local_echo(),
        }
    }
}
