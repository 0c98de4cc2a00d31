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


use crate::{Color, Display, TerminalResult, TerminalSize};
use std::collections::VecDeque;

/// Default number of completed lines retained by a [`TerminalBuffer`].
pub const DEFAULT_SCROLLBACK: usize = 1000;

/// One painted character cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Cell {
    pub byte: u8,
    pub color: Color,
}

/// In-memory [`Display`].
///
/// Records everything painted into it: output lines with their colors, screen clears,
/// the input line and its cursor, and the status line. Lines wrap at the surface width
/// and only the most recent `scrollback` completed lines are kept.
#[derive(Debug, Clone)]
pub struct TerminalBuffer {
    /// Terminal dimensions
    size: TerminalSize,
    /// Completed lines, oldest first
    completed_lines: VecDeque<Vec<Cell>>,
    /// The line currently being painted
    current_line: Vec<Cell>,
    /// Retained completed lines
    scrollback: usize,
    color: Color,
    input: String,
    input_cursor: usize,
    status: String,
    clear_count: usize,
    flush_count: usize,
}

impl TerminalBuffer {
    /// Creates a new terminal buffer with a default size of (80x24)
    pub fn new() -> Self {
        Self::new_with_size(80, 24)
    }

    /// Creates a new terminal buffer with specified dimensions
    pub fn new_with_size(cols: u16, rows: u16) -> Self {
        TerminalBuffer {
            size: TerminalSize::new(cols, rows),
            completed_lines: VecDeque::new(),
            current_line: Vec::new(),
            scrollback: DEFAULT_SCROLLBACK,
            color: Color::Default,
            input: String::new(),
            input_cursor: 0,
            status: String::new(),
            clear_count: 0,
            flush_count: 0,
        }
    }

    /// Limits the number of retained completed lines.
    #[must_use]
    pub fn with_scrollback(mut self, scrollback: usize) -> Self {
        self.scrollback = scrollback;
        self.trim_scrollback();
        self
    }

    // ===== Terminal Size Management =====

    /// Sets the terminal size
    pub fn set_size(&mut self, cols: u16, rows: u16) {
        self.size = TerminalSize::new(cols, rows);
    }

    /// Display width in columns.
    pub fn width(&self) -> usize {
        usize::from(self.size.cols)
    }

    /// Display height in rows.
    pub fn height(&self) -> usize {
        usize::from(self.size.rows)
    }

    // ===== Output Window =====

    /// Completed lines, oldest first.
    pub fn completed_lines(&self) -> impl Iterator<Item = &[Cell]> {
        self.completed_lines.iter().map(Vec::as_slice)
    }

    /// Number of lines ended by a newline or a wrap, up to the scrollback limit.
    pub fn completed_line_count(&self) -> usize {
        self.completed_lines.len()
    }

    /// The partially painted last line.
    pub fn current_line(&self) -> &[Cell] {
        &self.current_line
    }

    /// `true` when nothing has been painted since the last line break.
    pub fn is_current_line_empty(&self) -> bool {
        self.current_line.is_empty()
    }

    /// All painted text, completed lines joined by newlines, followed by the current line.
    pub fn text(&self) -> String {
        let mut text = String::new();
        for line in &self.completed_lines {
            text.push_str(&Self::line_text(line));
            text.push('\n');
        }
        text.push_str(&Self::line_text(&self.current_line));
        text
    }

    /// Renders a line of cells as text.
    pub fn line_text(cells: &[Cell]) -> String {
        cells.iter().map(|cell| char::from(cell.byte)).collect()
    }

    /// Active paint color.
    pub fn color(&self) -> Color {
        self.color
    }

    /// Number of times the output window was cleared.
    pub fn clear_count(&self) -> usize {
        self.clear_count
    }

    // ===== Input and Status Lines =====

    /// Text last shown on the input line.
    pub fn input(&self) -> &str {
        &self.input
    }

    /// Cursor column on the input line.
    pub fn input_cursor(&self) -> usize {
        self.input_cursor
    }

    /// Text last shown on the status line.
    pub fn status(&self) -> &str {
        &self.status
    }

    /// Number of completed [`Display::flush`] calls.
    pub fn flush_count(&self) -> usize {
        self.flush_count
    }

    fn complete_line(&mut self) {
        let line = std::mem::take(&mut self.current_line);
        self.completed_lines.push_back(line);
        self.trim_scrollback();
    }

    fn trim_scrollback(&mut self) {
        while self.completed_lines.len() > self.scrollback {
            self.completed_lines.pop_front();
        }
    }
}

impl Default for TerminalBuffer {
    fn default() -> Self {
        Self::new()
    }
}

impl Display for TerminalBuffer {
    fn paint_char(&mut self, byte: u8) {
        if byte == b'\n' {
            self.complete_line();
            return;
        }
        self.current_line.push(Cell {
            byte,
            color: self.color,
        });
        if self.size.cols > 0 && self.current_line.len() >= self.width() {
            self.complete_line();
        }
    }

    fn set_color(&mut self, color: Color) {
        self.color = color;
    }

    fn clear(&mut self) {
        self.completed_lines.clear();
        self.current_line.clear();
        self.clear_count += 1;
    }

    fn size(&self) -> TerminalSize {
        self.size
    }

    fn resize(&mut self, size: TerminalSize) {
        self.size = size;
    }

    fn set_input(&mut self, text: &str) {
        self.input.clear();
        self.input.push_str(text);
    }

    fn move_cursor(&mut self, col: usize) {
        self.input_cursor = col;
    }

    fn set_status(&mut self, text: &str) {
        self.status.clear();
        self.status.push_str(text);
    }

    fn flush(&mut self) -> TerminalResult<()> {
        self.flush_count += 1;
        Ok(())
    }
}
