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


//! Telnet protocol engine

use crate::{ClientConfig, Result, SessionIo};
use bytes::{BufMut, BytesMut};
use clc_telnetcodec::{
    TelnetCodec, TelnetEvent, TelnetFrame, TelnetOption, TelnetOptions, ZmpMessage, ZmpRegistry,
};
use clc_terminal::TerminalSize;
use tokio_util::codec::{Decoder, Encoder};
use tracing::{debug, info};

/// Telnet with ECHO, NAWS and ZMP support.
pub struct TelnetProtocol {
    codec: TelnetCodec,
    registry: ZmpRegistry,
    ident: ZmpMessage,
    input: BytesMut,
}

impl TelnetProtocol {
    pub fn new(config: &ClientConfig) -> Self {
        Self {
            codec: TelnetCodec::with_capacity(config.subnegotiation_capacity),
            registry: ZmpRegistry::with_builtins(),
            ident: config.ident(),
            input: BytesMut::with_capacity(config.buffer_size),
        }
    }

    pub fn options(&self) -> TelnetOptions {
        self.codec.options()
    }

    pub fn local_echo(&self) -> bool {
        self.codec.options().local_echo()
    }

    /// Sends `line` followed by a newline and echoes it when the client owns echo.
    pub fn send_line(&mut self, io: &mut SessionIo<'_>, line: &str) -> Result<()> {
        let mut data = BytesMut::with_capacity(line.len() + 1);
        data.put_slice(line.as_bytes());
        data.put_u8(b'\n');
        if self.local_echo() {
            io.paint_plain(&data);
        }
        self.codec.encode(TelnetFrame::Data(data.freeze()), io.outbound)?;
        Ok(())
    }

    pub fn handle_input(&mut self, io: &mut SessionIo<'_>, bytes: &[u8]) -> Result<()> {
        self.input.extend_from_slice(bytes);
        while let Some(event) = self.codec.decode(&mut self.input)? {
            self.handle_event(io, event)?;
        }
        Ok(())
    }

    /// Reports the new size when the server asked for window size updates.
    pub fn handle_resize(&mut self, io: &mut SessionIo<'_>, size: TerminalSize) -> Result<()> {
        if self.codec.options().naws_enabled() {
            debug!("Reporting window size {}", size);
            self.codec
                .encode(TelnetFrame::window_size(size.cols, size.rows)?, io.outbound)?;
        }
        Ok(())
    }

    fn handle_event(&mut self, io: &mut SessionIo<'_>, event: TelnetEvent) -> Result<()> {
        match event {
            TelnetEvent::Data(byte) => io.feed(&[byte]),
            TelnetEvent::UnknownCommand(command) => {
                io.paint_plain(format!("<IAC:{}>", command).as_bytes());
            }
            TelnetEvent::Negotiate(reply) => {
                let zmp_enabled = reply == TelnetFrame::Do(TelnetOption::ZMP);
                debug!("Negotiation reply {:?}", reply);
                self.codec.encode(reply, io.outbound)?;
                if zmp_enabled {
                    info!("ZMP enabled, announcing {}", self.ident);
                    self.codec.encode(&self.ident, io.outbound)?;
                }
            }
            TelnetEvent::WindowSizeRequested => {
                let size = io.size();
                self.codec
                    .encode(TelnetFrame::window_size(size.cols, size.rows)?, io.outbound)?;
            }
            TelnetEvent::Zmp(message) => {
                debug!("ZMP {}", message);
                if let Some(reply) = self.registry.dispatch(&message) {
                    self.codec.encode(&reply, io.outbound)?;
                }
            }
            TelnetEvent::Subnegotiate(option, payload) => {
                debug!(
                    "Ignoring subnegotiation for {} ({} bytes)",
                    option,
                    payload.len()
                );
            }
        }
        Ok(())
    }
}
