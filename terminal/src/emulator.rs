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


use crate::{Color, Display};
use tracing::trace;

/// Escape byte that introduces a control sequence.
pub const ESC: u8 = 27;

/// Maximum number of numeric parameters kept for one control sequence.
pub const MAX_PARAMETERS: usize = 16;

///
/// Parser state of the [`TerminalEmulator`].
///
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum EmulatorState {
    /// Painting characters
    Plain,
    /// Received ESC, expecting `[`
    Escape,
    /// Inside `ESC [`, accumulating parameters
    EscapeParams,
}

/// Virtual terminal for server output.
///
/// Interprets the small ANSI subset MUD servers rely on and paints everything else:
///
/// - `ESC [ ... m` applies each parameter in order: `0` resets the color, `31` to `37`
///   select palette colors 1 to 7, other values are ignored.
/// - `ESC [ 2 J` clears the output window.
/// - Any other final byte ends the sequence without effect.
/// - Carriage returns are swallowed.
///
/// Parser state persists between calls, so sequences may span reads.
#[derive(Clone, Debug)]
pub struct TerminalEmulator {
    state: EmulatorState,
    parameters: Vec<u32>,
    color: Color,
}

impl TerminalEmulator {
    /// Creates an emulator in plain painting mode with the default color.
    pub fn new() -> Self {
        TerminalEmulator {
            state: EmulatorState::Plain,
            parameters: Vec::with_capacity(MAX_PARAMETERS),
            color: Color::Default,
        }
    }

    /// Current parser state.
    pub fn state(&self) -> EmulatorState {
        self.state
    }

    /// Color applied to the characters painted next.
    pub fn color(&self) -> Color {
        self.color
    }

    /// Parameters of the sequence being parsed.
    pub fn parameters(&self) -> &[u32] {
        &self.parameters
    }

    /// Interprets `bytes` and paints the result on `display`.
    pub fn feed<D: Display + ?Sized>(&mut self, display: &mut D, bytes: &[u8]) {
        for &byte in bytes {
            self.feed_byte(display, byte);
        }
    }

    /// Advances the parser by one byte, painting or applying a sequence as it completes.
    pub fn feed_byte<D: Display + ?Sized>(&mut self, display: &mut D, byte: u8) {
        match (self.state, byte) {
            (EmulatorState::Plain, ESC) => self.state = EmulatorState::Escape,
            (EmulatorState::Plain, b'\r') => {}
            (EmulatorState::Plain, _) => display.paint_char(byte),
            (EmulatorState::Escape, b'[') => {
                self.parameters.clear();
                self.parameters.push(0);
                self.state = EmulatorState::EscapeParams;
            }
            (EmulatorState::Escape, _) => {
                trace!("Abandoning escape sequence at {:#X}", byte);
                self.state = EmulatorState::Plain;
            }
            (EmulatorState::EscapeParams, b'0'..=b'9') => {
                if let Some(parameter) = self.parameters.last_mut() {
                    *parameter = parameter
                        .saturating_mul(10)
                        .saturating_add(u32::from(byte - b'0'));
                }
            }
            (EmulatorState::EscapeParams, b';') => {
                if self.parameters.len() < MAX_PARAMETERS {
                    self.parameters.push(0);
                }
            }
            (EmulatorState::EscapeParams, _) => {
                self.state = EmulatorState::Plain;
                self.execute(display, byte);
            }
        }
    }

    /// Paints `bytes` verbatim except ESC, with no sequence interpretation.
    ///
    /// Used for locally echoed input and text-frame messages, which must never change the
    /// color or clear the screen. Parser state is left untouched.
    pub fn paint_plain<D: Display + ?Sized>(&self, display: &mut D, bytes: &[u8]) {
        for &byte in bytes.iter().filter(|&&byte| byte != ESC) {
            display.paint_char(byte);
        }
    }

    /// Returns the parser to plain painting with the default color.
    pub fn reset<D: Display + ?Sized>(&mut self, display: &mut D) {
        self.state = EmulatorState::Plain;
        self.parameters.clear();
        self.set_color(display, Color::Default);
    }

    fn execute<D: Display + ?Sized>(&mut self, display: &mut D, command: u8) {
        match command {
            b'm' => {
                let selected = self.parameters.iter().fold(None, |selected, &parameter| {
                    match parameter {
                        0 => Some(Color::Default),
                        parameter => Color::from_sgr(parameter).or(selected),
                    }
                });
                if let Some(color) = selected {
                    self.set_color(display, color);
                }
            }
            b'J' => {
                if self.parameters.first() == Some(&2) {
                    display.clear();
                }
            }
            _ => trace!(
                "Ignoring control sequence {:?} {:?}",
                char::from(command),
                self.parameters
            ),
        }
    }

    fn set_color<D: Display + ?Sized>(&mut self, display: &mut D, color: Color) {
        self.color = color;
        display.set_color(color);
    }
}

impl Default for TerminalEmulator {
    fn default() -> Self {
        Self::new()
    }
}
