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


/// Result Type for Codec Operations
pub type CodecResult<T> = Result<T, CodecError>;

/// Represents possible errors that can occur in the codec handling process.
///
/// Malformed protocol input is recovered inside the decoder and never surfaces as a
/// `CodecError`; these values describe rejected payloads and buffer limits to the
/// code that asked for them.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CodecError {
    /// An I/O error occurred while reading from or writing to the underlying stream.
    #[error("I/O error during {operation}: {kind:?}")]
    IOError {
        /// The kind of I/O error that occurred
        kind: std::io::ErrorKind,
        /// Description of the operation that failed
        operation: String,
    },

    /// A bounded buffer refused another byte.
    #[error("buffer capacity of {capacity} bytes exceeded")]
    CapacityExceeded {
        /// Maximum number of bytes the buffer holds
        capacity: usize,
    },

    /// A ZMP payload could not be split into arguments.
    #[error("malformed ZMP payload: {0}")]
    Zmp(#[from] ZmpErrorKind),
}

/// Reasons a ZMP payload is rejected.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ZmpErrorKind {
    /// Payload contained no bytes.
    #[error("empty payload")]
    Empty,

    /// Payload did not end with a NUL terminator.
    #[error("payload is not NUL terminated")]
    Unterminated,

    /// Command name was empty.
    #[error("missing command name")]
    MissingCommand,

    /// Payload carried more arguments than allowed.
    #[error("too many arguments (max {max})")]
    TooManyArguments {
        /// Argument limit that was exceeded
        max: usize,
    },

    /// An argument contained an embedded NUL and cannot be encoded.
    #[error("argument {index} contains a NUL byte")]
    EmbeddedNul {
        /// Position of the offending argument
        index: usize,
    },
}

impl From<std::io::Error> for CodecError {
    fn from(err: std::io::Error) -> Self {
        CodecError::IOError {
            kind: err.kind(),
            operation: err.to_string(),
        }
    }
}
