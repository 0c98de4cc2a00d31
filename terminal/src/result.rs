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


use std::io;

/// Result type for the terminal
pub type TerminalResult<T> = Result<T, TerminalError>;

/// Errors raised by the terminal layer.
///
/// Edit-buffer rejections are recoverable: the offending keystroke is dropped and the
/// buffer is left untouched. I/O errors come from the display backend.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum TerminalError {
    /// Edit buffer already holds `capacity` characters
    #[error("Edit buffer is full ({capacity} characters)")]
    EditBufferFull { capacity: usize },
    /// Control characters are never inserted into the edit buffer
    #[error("Unprintable character {0:?}")]
    Unprintable(char),
    /// Display backend failure
    #[error("IO Error during {operation}: {kind}")]
    IOError {
        kind: io::ErrorKind,
        operation: String,
    },
}

impl TerminalError {
    /// Builds an [`TerminalError::IOError`] tagged with the failing operation.
    pub fn io(error: &io::Error, operation: &str) -> TerminalError {
        TerminalError::IOError {
            kind: error.kind(),
            operation: operation.to_string(),
        }
    }

    /// `true` for rejections that leave the terminal fully usable.
    pub fn is_recoverable(&self) -> bool {
        !matches!(self, TerminalError::IOError { .. })
    }
}

impl From<io::Error> for TerminalError {
    fn from(error: io::Error) -> Self {
        TerminalError::io(&error, "display")
    }
}
