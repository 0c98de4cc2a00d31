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


use crate::{Display, Key, TerminalError, TerminalResult};
use tracing::trace;

/// Default number of characters an input line may hold.
pub const DEFAULT_EDIT_CAPACITY: usize = 1024;

/// Character shown in place of each input character while echo is suppressed.
pub const MASK_CHARACTER: char = '*';

/// Bounded single-line input editor.
///
/// Holds at most `capacity` characters and a cursor with `0 <= cursor <= len`. Edits that
/// cannot apply (full buffer, backspace at the start, delete at the end) leave the editor
/// untouched.
#[derive(Clone, Debug)]
pub struct LineEditor {
    buffer: Vec<char>,
    cursor: usize,
    capacity: usize,
}

impl LineEditor {
    /// Creates an empty editor holding up to [`DEFAULT_EDIT_CAPACITY`] characters.
    pub fn new() -> Self {
        Self::with_capacity(DEFAULT_EDIT_CAPACITY)
    }

    /// Creates an empty editor holding up to `capacity` characters.
    pub fn with_capacity(capacity: usize) -> Self {
        LineEditor {
            buffer: Vec::with_capacity(capacity),
            cursor: 0,
            capacity,
        }
    }

    /// Current contents.
    pub fn text(&self) -> String {
        self.buffer.iter().collect()
    }

    /// Cursor position in characters from the start of the line.
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// Number of characters in the line.
    pub fn len(&self) -> usize {
        self.buffer.len()
    }

    /// `true` when the line holds no characters.
    pub fn is_empty(&self) -> bool {
        self.buffer.is_empty()
    }

    /// Maximum number of characters the line accepts.
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// `true` when further inserts are rejected.
    pub fn is_full(&self) -> bool {
        self.buffer.len() >= self.capacity
    }

    /// Inserts `ch` at the cursor and advances the cursor.
    pub fn insert(&mut self, ch: char) -> TerminalResult<()> {
        if ch.is_control() {
            return Err(TerminalError::Unprintable(ch));
        }
        if self.is_full() {
            return Err(TerminalError::EditBufferFull {
                capacity: self.capacity,
            });
        }
        self.buffer.insert(self.cursor, ch);
        self.cursor += 1;
        Ok(())
    }

    /// Removes the character left of the cursor. Returns `false` at the start of the line.
    pub fn backspace(&mut self) -> bool {
        if self.cursor == 0 {
            return false;
        }
        self.cursor -= 1;
        self.buffer.remove(self.cursor);
        true
    }

    /// Removes the character under the cursor. Returns `false` at the end of the line.
    pub fn delete(&mut self) -> bool {
        if self.cursor >= self.buffer.len() {
            return false;
        }
        self.buffer.remove(self.cursor);
        true
    }

    /// Moves the cursor one character left. No-op at the start of the line.
    pub fn move_left(&mut self) {
        self.cursor = self.cursor.saturating_sub(1);
    }

    /// Moves the cursor one character right. No-op at the end of the line.
    pub fn move_right(&mut self) {
        self.cursor = (self.cursor + 1).min(self.buffer.len());
    }

    /// Moves the cursor to the start of the line.
    pub fn home(&mut self) {
        self.cursor = 0;
    }

    /// Moves the cursor past the last character.
    pub fn end(&mut self) {
        self.cursor = self.buffer.len();
    }

    /// Replaces the contents and moves the cursor to the end.
    ///
    /// Control characters are dropped and the text is cut at the capacity.
    pub fn set(&mut self, text: &str) {
        self.buffer.clear();
        self.buffer.extend(
            text.chars()
                .filter(|ch| !ch.is_control())
                .take(self.capacity),
        );
        self.cursor = self.buffer.len();
    }

    /// Takes the current line and leaves the editor empty.
    pub fn commit(&mut self) -> String {
        let line = self.text();
        self.set("");
        line
    }

    /// Applies one keystroke. Returns the committed line on [`Key::Enter`].
    pub fn handle_key(&mut self, key: Key) -> Option<String> {
        match key {
            Key::Char(ch) => {
                if let Err(error) = self.insert(ch) {
                    trace!("Rejected keystroke: {}", error);
                }
            }
            Key::Enter => return Some(self.commit()),
            Key::Backspace => {
                self.backspace();
            }
            Key::Delete => {
                self.delete();
            }
            Key::Left => self.move_left(),
            Key::Right => self.move_right(),
            Key::Home => self.home(),
            Key::End => self.end(),
        }
        None
    }

    /// Draws the input line on `display`.
    ///
    /// With `masked` set every character is drawn as [`MASK_CHARACTER`]. When the line is
    /// wider than the display the view scrolls to keep the cursor visible.
    pub fn render<D: Display + ?Sized>(&self, display: &mut D, masked: bool) {
        let width = usize::from(display.size().cols).max(1);
        let offset = self.cursor.saturating_sub(width - 1);
        let visible = self.buffer.iter().skip(offset).take(width);
        let text: String = if masked {
            visible.map(|_| MASK_CHARACTER).collect()
        } else {
            visible.collect()
        };
        display.set_input(&text);
        display.move_cursor(self.cursor - offset);
    }
}

impl Default for LineEditor {
    fn default() -> Self {
        Self::new()
    }
}
