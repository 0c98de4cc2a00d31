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


use crate::{Color, TerminalResult, TerminalSize};

/// Paint surface driven by the emulator and the line editor.
///
/// A display has three areas: the scrolling output window, a one-line status area and a
/// one-line input area. Painting is infallible and may be buffered; backend failures are
/// reported by [`Display::flush`].
pub trait Display {
    /// Paints one byte at the output cursor in the active color.
    fn paint_char(&mut self, byte: u8);

    /// Selects the color used by subsequent [`Display::paint_char`] calls.
    fn set_color(&mut self, color: Color);

    /// Erases the output window.
    fn clear(&mut self);

    /// Current size of the whole surface.
    fn size(&self) -> TerminalSize;

    /// Adopts a new surface size.
    fn resize(&mut self, size: TerminalSize);

    /// Replaces the contents of the input line.
    fn set_input(&mut self, text: &str);

    /// Places the visible cursor at column `col` of the input line.
    fn move_cursor(&mut self, col: usize);

    /// Replaces the contents of the status line.
    fn set_status(&mut self, text: &str);

    /// Pushes buffered painting to the backend.
    fn flush(&mut self) -> TerminalResult<()>;
}

impl<D: Display + ?Sized> Display for &mut D {
    fn paint_char(&mut self, byte: u8) {
        (**self).paint_char(byte);
    }

    fn set_color(&mut self, color: Color) {
        (**self).set_color(color);
    }

    fn clear(&mut self) {
        (**self).clear();
    }

    fn size(&self) -> TerminalSize {
        (**self).size()
    }

    fn resize(&mut self, size: TerminalSize) {
        (**self).resize(size);
    }

    fn set_input(&mut self, text: &str) {
        (**self).set_input(text);
    }

    fn move_cursor(&mut self, col: usize) {
        (**self).move_cursor(col);
    }

    fn set_status(&mut self, text: &str) {
        (**self).set_status(text);
    }

    fn flush(&mut self) -> TerminalResult<()> {
        (**self).flush()
    }
}

impl<D: Display + ?Sized> Display for Box<D> {
    fn paint_char(&mut self, byte: u8) {
        (**self).paint_char(byte);
    }

    fn set_color(&mut self, color: Color) {
        (**self).set_color(color);
    }

    fn clear(&mut self) {
        (**self).clear();
    }

    fn size(&self) -> TerminalSize {
        (**self).size()
    }

    fn resize(&mut self, size: TerminalSize) {
        (**self).resize(size);
    }

    fn set_input(&mut self, text: &str) {
        (**self).set_input(text);
    }

    fn move_cursor(&mut self, col: usize) {
        (**self).move_cursor(col);
    }

    fn set_status(&mut self, text: &str) {
        (**self).set_status(text);
    }

    fn flush(&mut self) -> TerminalResult<()> {
        (**self).flush()
    }
}
