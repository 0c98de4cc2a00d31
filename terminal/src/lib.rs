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


//! # CLC Terminal
//!
//! Output and input handling shared by every protocol the client speaks:
//!
//! - [`TerminalEmulator`] interprets the ANSI color and screen-clear subset of server output
//!   and offers a plain painting path for text that must never be interpreted.
//! - [`LineEditor`] is the bounded input line with cursor editing.
//! - [`Display`] is the paint surface both draw on; [`TerminalBuffer`] implements it in
//!   memory.

#![warn(
    clippy::cargo,
    clippy::pedantic,
    future_incompatible,
    rust_2018_idioms
)]
#![allow(
    clippy::module_name_repetitions,
    clippy::missing_errors_doc,
    clippy::must_use_candidate
)]

mod buffer;
mod display;
mod editor;
mod emulator;
mod key;
mod result;
mod types;

pub use self::buffer::{Cell, DEFAULT_SCROLLBACK, TerminalBuffer};
pub use self::display::Display;
pub use self::editor::{DEFAULT_EDIT_CAPACITY, LineEditor, MASK_CHARACTER};
pub use self::emulator::{ESC, EmulatorState, MAX_PARAMETERS, TerminalEmulator};
pub use self::key::Key;
pub use self::result::{TerminalError, TerminalResult};
pub use self::types::{Color, TerminalSize};
