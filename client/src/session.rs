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


//! Per-connection session context

use crate::{ClientConfig, ConnectionStats, Protocol, Result, SessionIo};
use bytes::BytesMut;
use clc_terminal::{Display, Key, LineEditor, TerminalEmulator};
use tracing::{debug, info};

/// Banner painted when the server goes away.
pub const DISCONNECTED_BANNER: &str = "Disconnected.";

/// Connection state as seen by the session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionState {
    Connected,
    Disconnected,
}

/// Everything one connection needs besides the transport.
///
/// Owns the protocol engine, the emulator, the line editor, the display and the queue of
/// bytes waiting to be sent. Every handler runs to completion; the caller flushes
/// [`Session::take_outbound`] to the connection afterwards.
pub struct Session<D> {
    protocol: Protocol,
    emulator: TerminalEmulator,
    editor: LineEditor,
    display: D,
    outbound: BytesMut,
    prompt: String,
    address: String,
    state: SessionState,
}

impl<D: Display> Session<D> {
    pub fn new(config: &ClientConfig, display: D) -> Self {
        Self {
            protocol: Protocol::new(config),
            emulator: TerminalEmulator::new(),
            editor: LineEditor::with_capacity(config.edit_capacity),
            display,
            outbound: BytesMut::new(),
            prompt: String::new(),
            address: config.address(),
            state: SessionState::Connected,
        }
    }

    pub fn state(&self) -> SessionState {
        self.state
    }

    pub fn is_connected(&self) -> bool {
        self.state == SessionState::Connected
    }

    pub fn protocol(&self) -> &Protocol {
        &self.protocol
    }

    pub fn emulator(&self) -> &TerminalEmulator {
        &self.emulator
    }

    pub fn editor(&self) -> &LineEditor {
        &self.editor
    }

    pub fn display(&self) -> &D {
        &self.display
    }

    pub fn display_mut(&mut self) -> &mut D {
        &mut self.display
    }

    /// Prompt most recently set by the server.
    pub fn prompt(&self) -> &str {
        &self.prompt
    }

    /// Removes and returns the queued outbound bytes.
    pub fn take_outbound(&mut self) -> BytesMut {
        self.outbound.split()
    }

    /// Processes bytes received from the server.
    pub fn handle_input(&mut self, bytes: &[u8]) -> Result<()> {
        if !self.is_connected() {
            return Ok(());
        }
        let echo_before = self.protocol.local_echo();
        let mut io = SessionIo {
            emulator: &mut self.emulator,
            display: &mut self.display,
            outbound: &mut self.outbound,
            prompt: &mut self.prompt,
        };
        let result = self.protocol.handle_input(&mut io, bytes);
        if self.protocol.local_echo() != echo_before {
            self.render_input();
        }
        result
    }

    /// Applies a keystroke, sending the line on Enter.
    pub fn handle_key(&mut self, key: Key) -> Result<()> {
        let committed = self.editor.handle_key(key);
        let mut result = Ok(());
        if let Some(line) = committed {
            if self.is_connected() {
                let mut io = SessionIo {
                    emulator: &mut self.emulator,
                    display: &mut self.display,
                    outbound: &mut self.outbound,
                    prompt: &mut self.prompt,
                };
                result = self.protocol.send_line(&mut io, &line);
            } else {
                debug!("Dropping line typed after disconnect");
            }
        }
        self.render_input();
        result
    }

    /// Tells the protocol about the display's current size.
    pub fn handle_resize(&mut self) -> Result<()> {
        let size = self.display.size();
        debug!("Display resized to {}", size);
        let result = if self.is_connected() {
            let mut io = SessionIo {
                emulator: &mut self.emulator,
                display: &mut self.display,
                outbound: &mut self.outbound,
                prompt: &mut self.prompt,
            };
            self.protocol.handle_resize(&mut io, size)
        } else {
            Ok(())
        };
        self.render_input();
        result
    }

    /// Enters the disconnected state. Returns `true` only on the first call.
    pub fn disconnect(&mut self) -> bool {
        if !self.is_connected() {
            return false;
        }
        info!("Session with {} ended", self.address);
        self.state = SessionState::Disconnected;
        self.outbound.clear();
        self.emulator.reset(&mut self.display);
        self.emulator.paint_plain(&mut self.display, b"\n");
        self.emulator
            .paint_plain(&mut self.display, DISCONNECTED_BANNER.as_bytes());
        self.emulator.paint_plain(&mut self.display, b"\n");
        true
    }

    /// Redraws the input line, masked while echo is suppressed.
    pub fn render_input(&mut self) {
        self.editor
            .render(&mut self.display, !self.protocol.local_echo());
    }

    /// Updates the status line with the prompt or banner and the traffic counters.
    pub fn refresh_status(&mut self, stats: ConnectionStats) {
        let banner = match self.state {
            SessionState::Disconnected => DISCONNECTED_BANNER,
            SessionState::Connected if !self.prompt.is_empty() => self.prompt.as_str(),
            SessionState::Connected => self.address.as_str(),
        };
        let status = format!(
            "{} | {} | sent {} recv {}",
            banner,
            self.protocol.kind(),
            stats.bytes_sent,
            stats.bytes_received
        );
        self.display.set_status(&status);
    }

    pub fn flush(&mut self) -> Result<()> {
        self.display.flush()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ProtocolKind;
    use clc_telnetcodec::consts::{self, option};
    use clc_terminal::TerminalBuffer;

    fn telnet_session() -> Session<TerminalBuffer> {
        Session::new(&ClientConfig::new("mud.example.org", 4000), TerminalBuffer::new())
    }

    fn type_line(session: &mut Session<TerminalBuffer>, line: &str) {
        for ch in line.chars() {
            session.handle_key(Key::Char(ch)).unwrap();
        }
        session.handle_key(Key::Enter).unwrap();
    }

    #[test]
    fn test_typed_line_is_queued_and_echoed() {
        let mut session = telnet_session();
        type_line(&mut session, "look");
        assert_eq!(&session.take_outbound()[..], b"look\n");
        assert_eq!(session.display().text(), "look\n");
        assert_eq!(session.display().input(), "");
    }

    #[test]
    fn test_password_entry_is_masked() {
        let mut session = telnet_session();
        session
            .handle_input(&[consts::IAC, consts::WILL, option::ECHO])
            .unwrap();
        session.take_outbound();
        for ch in "pw".chars() {
            session.handle_key(Key::Char(ch)).unwrap();
        }
        assert_eq!(session.display().input(), "**");
        session.handle_key(Key::Enter).unwrap();
        assert_eq!(&session.take_outbound()[..], b"pw\n");
        assert_eq!(session.display().text(), "");

        session
            .handle_input(&[consts::IAC, consts::WONT, option::ECHO])
            .unwrap();
        session.handle_key(Key::Char('x')).unwrap();
        assert_eq!(session.display().input(), "x");
    }

    #[test]
    fn test_echo_change_rerenders_pending_input() {
        let mut session = telnet_session();
        session.handle_key(Key::Char('a')).unwrap();
        session
            .handle_input(&[consts::IAC, consts::WILL, option::ECHO])
            .unwrap();
        assert_eq!(session.display().input(), "*");
    }

    #[test]
    fn test_disconnect_happens_once() {
        let mut session = telnet_session();
        session.handle_key(Key::Char('n')).unwrap();
        assert!(session.disconnect());
        assert!(!session.disconnect());
        assert_eq!(session.state(), SessionState::Disconnected);
        assert_eq!(session.display().text(), "\nDisconnected.\n");

        session.handle_key(Key::Enter).unwrap();
        session.handle_input(b"late data").unwrap();
        assert!(session.take_outbound().is_empty());
        assert_eq!(session.display().text(), "\nDisconnected.\n");
    }

    #[test]
    fn test_status_line() {
        let mut session = telnet_session();
        session.refresh_status(ConnectionStats {
            bytes_sent: 3,
            bytes_received: 10,
        });
        assert_eq!(
            session.display().status(),
            "mud.example.org:4000 | telnet | sent 3 recv 10"
        );
        session.disconnect();
        session.refresh_status(ConnectionStats::default());
        assert_eq!(
            session.display().status(),
            "Disconnected. | telnet | sent 0 recv 0"
        );
    }

    #[test]
    fn test_text_frame_session() {
        let config = ClientConfig::new("localhost", 4000).with_protocol(ProtocolKind::TextFrame);
        let mut session = Session::new(&config, TerminalBuffer::new());
        session
            .handle_input(b"\"Welcome\n\0>Name?\0p1\0")
            .unwrap();
        assert_eq!(session.display().text(), "Welcome\n");
        assert_eq!(session.prompt(), "Name?");

        type_line(&mut session, "secret");
        assert_eq!(&session.take_outbound()[..], b"=secret\0");
        assert_eq!(session.display().text(), "Welcome\n");

        session.handle_input(b"C\0").unwrap();
        assert_eq!(session.display().clear_count(), 1);
        session.refresh_status(ConnectionStats::default());
        assert!(session.display().status().starts_with("Name? | text-frame"));
    }

    #[test]
    fn test_resize_reports_when_negotiated() {
        let mut session = telnet_session();
        session
            .handle_input(&[consts::IAC, consts::DO, option::NAWS])
            .unwrap();
        session.take_outbound();
        session.display_mut().resize(clc_terminal::TerminalSize::new(90, 30));
        session.handle_resize().unwrap();
        assert_eq!(
            &session.take_outbound()[..],
            &[
                consts::IAC,
                consts::SB,
                option::NAWS,
                0,
                90,
                0,
                30,
                consts::IAC,
                consts::SE
            ]
        );
    }
}
