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


use std::fmt;

/// Dimensions of the output area in character cells.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct TerminalSize {
    pub cols: u16,
    pub rows: u16,
}

impl TerminalSize {
    /// Creates a size of `cols` columns by `rows` rows.
    pub fn new(cols: u16, rows: u16) -> Self {
        Self { cols, rows }
    }
}

impl Default for TerminalSize {
    fn default() -> Self {
        Self::new(80, 24)
    }
}

impl fmt::Display for TerminalSize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}x{}", self.cols, self.rows)
    }
}

/// Foreground palette selectable through SGR 31 to 37.
///
/// [`Color::index`] numbers the palette 1 to 7 in SGR order; `Default` is 0.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum Color {
    #[default]
    Default,
    Red,
    Green,
    Yellow,
    Blue,
    Magenta,
    Cyan,
    White,
}

impl Color {
    const PALETTE: [Color; 8] = [
        Color::Default,
        Color::Red,
        Color::Green,
        Color::Yellow,
        Color::Blue,
        Color::Magenta,
        Color::Cyan,
        Color::White,
    ];

    /// Maps a palette index (0 to 7) back to a color.
    pub fn from_index(index: u8) -> Option<Color> {
        Self::PALETTE.get(usize::from(index)).copied()
    }

    /// Maps an SGR foreground parameter (31 to 37) to a color.
    pub fn from_sgr(parameter: u32) -> Option<Color> {
        match parameter {
            31..=37 => u8::try_from(parameter - 30).ok().and_then(Color::from_index),
            _ => None,
        }
    }

    /// Palette index: 0 for the default color, 1 to 7 for the ANSI colors.
    pub fn index(self) -> u8 {
        match self {
            Color::Default => 0,
            Color::Red => 1,
            Color::Green => 2,
            Color::Yellow => 3,
            Color::Blue => 4,
            Color::Magenta => 5,
            Color::Cyan => 6,
            Color::White => 7,
        }
    }
}
