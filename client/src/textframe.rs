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


//! NUL-delimited text-frame protocol

use crate::{ClientConfig, Result, SessionIo};
use bytes::{Buf, BufMut, BytesMut};
use clc_telnetcodec::CodecError;
use clc_terminal::TerminalSize;
use tokio_util::codec::{Decoder, Encoder};
use tracing::{debug, trace, warn};

/// Frame tags.
pub mod tag {
    /// Outbound command line
    pub const COMMAND: u8 = b'=';
    /// Text to display
    pub const TEXT: u8 = b'"';
    /// Prompt or banner text
    pub const PROMPT: u8 = b'>';
    /// Clear the screen
    pub const CLEAR: u8 = b'C';
    /// Echo control, followed by `1` (suppress) or `0` (restore)
    pub const ECHO: u8 = b'p';
}

/// Frame terminator.
pub const TERMINATOR: u8 = 0;

/// An inbound text frame.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum TextFrame {
    Text(BytesMut),
    Prompt(BytesMut),
    Clear,
    /// `true` while the server wants local echo suppressed
    EchoSuppressed(bool),
}

/// Codec for NUL-terminated tagged frames.
///
/// Frames whose payload exceeds `max_length` are discarded up to and including their
/// terminator, however many reads that takes. Empty frames and unknown tags are skipped.
#[derive(Clone, Debug)]
pub struct TextFrameCodec {
    max_length: usize,
    /// Already scanned prefix of the pending frame
    next_index: usize,
    discarding: bool,
}

impl TextFrameCodec {
    pub fn new(max_length: usize) -> Self {
        Self {
            max_length,
            next_index: 0,
            discarding: false,
        }
    }

    pub fn max_length(&self) -> usize {
        self.max_length
    }

    fn parse(mut payload: BytesMut) -> Option<TextFrame> {
        if payload.is_empty() {
            debug!("Ignoring empty text frame");
            return None;
        }
        let frame_tag = payload.get_u8();
        match frame_tag {
            tag::TEXT => Some(TextFrame::Text(payload)),
            tag::PROMPT => Some(TextFrame::Prompt(payload)),
            tag::CLEAR => Some(TextFrame::Clear),
            tag::ECHO => match payload.first() {
                Some(b'1') => Some(TextFrame::EchoSuppressed(true)),
                Some(b'0') => Some(TextFrame::EchoSuppressed(false)),
                _ => {
                    debug!("Ignoring malformed echo frame");
                    None
                }
            },
            other => {
                debug!("Ignoring text frame with unknown tag {:#X}", other);
                None
            }
        }
    }
}

impl Decoder for TextFrameCodec {
    type Item = TextFrame;
    type Error = CodecError;

    fn decode(&mut self, src: &mut BytesMut) -> std::result::Result<Option<TextFrame>, CodecError> {
        loop {
            let start = self.next_index.min(src.len());
            let Some(offset) = src[start..].iter().position(|&byte| byte == TERMINATOR) else {
                if self.discarding {
                    src.clear();
                } else if src.len() > self.max_length {
                    warn!(
                        "Text frame exceeds {} bytes, discarding",
                        self.max_length
                    );
                    self.discarding = true;
                    src.clear();
                } else {
                    self.next_index = src.len();
                    return Ok(None);
                }
                self.next_index = 0;
                return Ok(None);
            };

            let end = start + offset;
            self.next_index = 0;
            let mut frame = src.split_to(end + 1);
            frame.truncate(end);

            if std::mem::take(&mut self.discarding) {
                trace!("Dropped tail of oversized text frame");
                continue;
            }
            if frame.len() > self.max_length {
                warn!(
                    "Text frame of {} bytes exceeds {} bytes, discarding",
                    frame.len(),
                    self.max_length
                );
                continue;
            }
            if let Some(frame) = Self::parse(frame) {
                return Ok(Some(frame));
            }
        }
    }
}

impl Encoder<&str> for TextFrameCodec {
    type Error = CodecError;

    fn encode(&mut self, line: &str, dst: &mut BytesMut) -> std::result::Result<(), CodecError> {
        dst.reserve(line.len() + 2);
        dst.put_u8(tag::COMMAND);
        dst.extend(line.bytes().filter(|&byte| byte != TERMINATOR));
        dst.put_u8(TERMINATOR);
        Ok(())
    }
}

/// Text-frame protocol engine.
pub struct TextFrameProtocol {
    codec: TextFrameCodec,
    input: BytesMut,
    echo_suppressed: bool,
}

impl TextFrameProtocol {
    pub fn new(config: &ClientConfig) -> Self {
        Self {
            codec: TextFrameCodec::new(config.subnegotiation_capacity),
            input: BytesMut::with_capacity(config.buffer_size),
            echo_suppressed: false,
        }
    }

    pub fn local_echo(&self) -> bool {
        !self.echo_suppressed
    }

    pub fn send_line(&mut self, io: &mut SessionIo<'_>, line: &str) -> Result<()> {
        self.codec.encode(line, io.outbound)?;
        if self.local_echo() {
            io.paint_plain(line.as_bytes());
            io.paint_plain(b"\n");
        }
        Ok(())
    }

    pub fn handle_input(&mut self, io: &mut SessionIo<'_>, bytes: &[u8]) -> Result<()> {
        self.input.extend_from_slice(bytes);
        while let Some(frame) = self.codec.decode(&mut self.input)? {
            match frame {
                TextFrame::Text(text) => io.paint_plain(&text),
                TextFrame::Prompt(text) => {
                    io.prompt.clear();
                    io.prompt.push_str(&String::from_utf8_lossy(&text));
                }
                TextFrame::Clear => io.display.clear(),
                TextFrame::EchoSuppressed(suppressed) => {
                    debug!("Local echo suppressed: {}", suppressed);
                    self.echo_suppressed = suppressed;
                }
            }
        }
        Ok(())
    }

    /// Text frames carry no window size.
    pub fn handle_resize(&mut self, _io: &mut SessionIo<'_>, size: TerminalSize) -> Result<()> {
        trace!("Ignoring resize to {}", size);
        Ok(())
    }
}
