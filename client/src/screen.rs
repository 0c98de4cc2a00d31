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


//! Crossterm display
//!
//! The screen is split into three regions: server output on every row but the last two,
//! a reverse-video status row, and the input row at the bottom.

use crate::InputEvent;
use clc_terminal::{Color, Display, Key, TerminalError, TerminalResult, TerminalSize};
use crossterm::QueueableCommand;
use crossterm::cursor::MoveTo;
use crossterm::event::{Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use crossterm::style::{self, Attribute, Print, SetAttribute, SetForegroundColor};
use crossterm::terminal::{
    self, Clear, ClearType, EnterAlternateScreen, LeaveAlternateScreen, ScrollUp,
};
use std::io::{self, BufWriter, Stdout, Write};
use tracing::{debug, warn};

const TAB_WIDTH: u16 = 8;

/// [`Display`] painting to a terminal through crossterm.
pub struct Screen<W: Write> {
    out: W,
    size: TerminalSize,
    col: u16,
    row: u16,
    color: Color,
    input: String,
    input_cursor: usize,
    status: String,
    chrome_dirty: bool,
    error: Option<io::Error>,
    raw: bool,
}

impl Screen<BufWriter<Stdout>> {
    /// Takes over the controlling terminal: raw mode and the alternate screen.
    pub fn open() -> TerminalResult<Self> {
        let (cols, rows) = terminal::size().map_err(|e| TerminalError::io(&e, "size"))?;
        terminal::enable_raw_mode().map_err(|e| TerminalError::io(&e, "enable raw mode"))?;
        let mut out = BufWriter::new(io::stdout());
        out.queue(EnterAlternateScreen)
            .and_then(|out| out.queue(Clear(ClearType::All)))
            .and_then(|out| out.queue(MoveTo(0, 0)))
            .map_err(|e| TerminalError::io(&e, "enter alternate screen"))?;
        let mut screen = Screen::with_writer(out, TerminalSize { cols, rows });
        screen.raw = true;
        debug!("Screen opened at {}", screen.size);
        Ok(screen)
    }
}

impl<W: Write> Screen<W> {
    /// Screen over an arbitrary writer. Does not touch terminal modes.
    pub fn with_writer(out: W, size: TerminalSize) -> Self {
        Self {
            out,
            size,
            col: 0,
            row: 0,
            color: Color::Default,
            input: String::new(),
            input_cursor: 0,
            status: String::new(),
            chrome_dirty: true,
            error: None,
            raw: false,
        }
    }

    pub fn writer(&self) -> &W {
        &self.out
    }

    /// Restores the terminal. Safe to call more than once.
    pub fn close(&mut self) -> TerminalResult<()> {
        if !self.raw {
            return Ok(());
        }
        self.raw = false;
        self.out
            .queue(LeaveAlternateScreen)
            .and_then(|out| out.flush())
            .map_err(|e| TerminalError::io(&e, "leave alternate screen"))?;
        terminal::disable_raw_mode().map_err(|e| TerminalError::io(&e, "disable raw mode"))
    }

    fn output_rows(&self) -> u16 {
        self.size.rows.saturating_sub(2).max(1)
    }

    fn status_row(&self) -> u16 {
        self.size.rows.saturating_sub(2)
    }

    fn input_row(&self) -> u16 {
        self.size.rows.saturating_sub(1)
    }

    /// Keeps the first write error for the next flush.
    fn record(&mut self, result: io::Result<()>) {
        if let Err(error) = result {
            if self.error.is_none() {
                self.error = Some(error);
            }
        }
    }

    fn line_feed(&mut self) {
        self.col = 0;
        if self.row + 1 < self.output_rows() {
            self.row += 1;
            return;
        }
        let row = self.row;
        let result = self
            .out
            .queue(ScrollUp(1))
            .and_then(|out| out.queue(MoveTo(0, row)))
            .and_then(|out| out.queue(Clear(ClearType::CurrentLine)))
            .map(|_| ());
        self.record(result);
        self.chrome_dirty = true;
    }

    fn put(&mut self, ch: char) {
        if self.size.cols > 0 && self.col >= self.size.cols {
            self.line_feed();
        }
        let (col, row) = (self.col, self.row);
        let result = self
            .out
            .queue(MoveTo(col, row))
            .and_then(|out| out.queue(Print(ch)))
            .map(|_| ());
        self.record(result);
        self.col = self.col.saturating_add(1);
    }

    fn draw_chrome(&mut self) {
        let width = usize::from(self.size.cols);
        let status: String = self.status.chars().take(width).collect();
        let input: String = self.input.chars().take(width).collect();
        let (status_row, input_row) = (self.status_row(), self.input_row());
        let color = crossterm_color(self.color);
        let result = self
            .out
            .queue(MoveTo(0, status_row))
            .and_then(|out| out.queue(SetAttribute(Attribute::Reverse)))
            .and_then(|out| out.queue(Print(format!("{:<width$}", status))))
            .and_then(|out| out.queue(SetAttribute(Attribute::Reset)))
            .and_then(|out| out.queue(MoveTo(0, input_row)))
            .and_then(|out| out.queue(Clear(ClearType::CurrentLine)))
            .and_then(|out| out.queue(Print(input)))
            .and_then(|out| out.queue(SetForegroundColor(color)))
            .map(|_| ());
        self.record(result);
        self.chrome_dirty = false;
    }
}

impl<W: Write> Display for Screen<W> {
    fn paint_char(&mut self, byte: u8) {
        match byte {
            b'\n' => self.line_feed(),
            b'\r' => self.col = 0,
            b'\t' => {
                let stop = (self.col / TAB_WIDTH + 1) * TAB_WIDTH;
                while self.col < stop && self.col < self.size.cols {
                    self.put(' ');
                }
            }
            0x00..=0x1F | 0x7F => {}
            _ => self.put(char::from(byte)),
        }
    }

    fn set_color(&mut self, color: Color) {
        self.color = color;
        let result = self
            .out
            .queue(SetForegroundColor(crossterm_color(color)))
            .map(|_| ());
        self.record(result);
    }

    fn clear(&mut self) {
        let result = self.out.queue(Clear(ClearType::All)).map(|_| ());
        self.record(result);
        self.col = 0;
        self.row = 0;
        self.chrome_dirty = true;
    }

    fn size(&self) -> TerminalSize {
        self.size
    }

    fn resize(&mut self, size: TerminalSize) {
        self.size = size;
        self.clear();
    }

    fn set_input(&mut self, text: &str) {
        if self.input != text {
            self.input.clear();
            self.input.push_str(text);
            self.chrome_dirty = true;
        }
    }

    fn move_cursor(&mut self, col: usize) {
        self.input_cursor = col;
    }

    fn set_status(&mut self, text: &str) {
        if self.status != text {
            self.status.clear();
            self.status.push_str(text);
            self.chrome_dirty = true;
        }
    }

    fn flush(&mut self) -> TerminalResult<()> {
        if self.chrome_dirty {
            self.draw_chrome();
        }
        let col = u16::try_from(self.input_cursor)
            .unwrap_or(u16::MAX)
            .min(self.size.cols.saturating_sub(1));
        let row = self.input_row();
        let result = self.out.queue(MoveTo(col, row)).map(|_| ());
        self.record(result);
        let result = self.out.flush();
        self.record(result);
        match self.error.take() {
            Some(error) => Err(TerminalError::io(&error, "paint")),
            None => Ok(()),
        }
    }
}

impl<W: Write> Drop for Screen<W> {
    fn drop(&mut self) {
        if let Err(error) = self.close() {
            warn!("Failed to restore terminal: {}", error);
        }
    }
}

fn crossterm_color(color: Color) -> style::Color {
    match color {
        Color::Default => style::Color::Reset,
        Color::Red => style::Color::DarkRed,
        Color::Green => style::Color::DarkGreen,
        Color::Yellow => style::Color::DarkYellow,
        Color::Blue => style::Color::DarkBlue,
        Color::Magenta => style::Color::DarkMagenta,
        Color::Cyan => style::Color::DarkCyan,
        Color::White => style::Color::Grey,
    }
}

/// Maps a crossterm event to a client input event. Releases and unmapped keys yield `None`.
pub fn input_event(event: Event) -> Option<InputEvent> {
    match event {
        Event::Key(key) => key_event(key),
        Event::Resize(cols, rows) => Some(InputEvent::Resize(TerminalSize { cols, rows })),
        _ => None,
    }
}

fn key_event(event: KeyEvent) -> Option<InputEvent> {
    if event.kind == KeyEventKind::Release {
        return None;
    }
    let key = match event.code {
        KeyCode::Char('c') if event.modifiers.contains(KeyModifiers::CONTROL) => {
            return Some(InputEvent::Interrupt);
        }
        KeyCode::Char(_) if event.modifiers.contains(KeyModifiers::CONTROL) => return None,
        KeyCode::Char(ch) => Key::Char(ch),
        KeyCode::Enter => Key::Enter,
        KeyCode::Backspace => Key::Backspace,
        KeyCode::Delete => Key::Delete,
        KeyCode::Left => Key::Left,
        KeyCode::Right => Key::Right,
        KeyCode::Home => Key::Home,
        KeyCode::End => Key::End,
        _ => return None,
    };
    Some(InputEvent::Key(key))
}
