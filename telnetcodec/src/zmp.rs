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


//! ZMP (Zenith Mud Protocol) messages.
//!
//! A ZMP message is an argument vector. The first argument is the command name, the
//! rest are its parameters. On the wire every argument is followed by a NUL byte and
//! the whole vector travels as one `IAC SB ZMP ... IAC SE` subnegotiation.
//!
//! ```text
//! zmp.check\0zmp.\0
//! ```

mod registry;

pub use self::registry::{ZmpCommand, ZmpHandler, ZmpRegistry, command};

use crate::consts::ZMP_MAX_ARGUMENTS;
use crate::{CodecResult, ZmpErrorKind};
use bytes::{BufMut, BytesMut};
use std::fmt;

/// Separator between package and command in a ZMP name, e.g. `zmp.ping`.
pub const PACKAGE_SEPARATOR: char = '.';

/// A decoded ZMP argument vector.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ZmpMessage {
    argv: Vec<String>,
}

impl ZmpMessage {
    /// Creates a message for `command` without parameters.
    pub fn new<S: Into<String>>(command: S) -> Self {
        ZmpMessage {
            argv: vec![command.into()],
        }
    }

    /// Appends one parameter.
    pub fn with_argument<S: Into<String>>(mut self, argument: S) -> Self {
        self.argv.push(argument.into());
        self
    }

    /// Builds a message from a full argument vector, command first.
    ///
    /// Returns `None` when `argv` is empty.
    pub fn from_argv<I, S>(argv: I) -> Option<Self>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let argv: Vec<String> = argv.into_iter().map(Into::into).collect();
        if argv.is_empty() {
            None
        } else {
            Some(ZmpMessage { argv })
        }
    }

    /// Splits a subnegotiation payload (without the option byte) into arguments.
    ///
    /// The payload must be non-empty, end with NUL and carry at most
    /// [`ZMP_MAX_ARGUMENTS`] arguments. Argument bytes that are not UTF-8 are
    /// replaced lossily.
    pub fn parse(payload: &[u8]) -> CodecResult<Self> {
        let Some((&last, body)) = payload.split_last() else {
            return Err(ZmpErrorKind::Empty.into());
        };
        if last != 0 {
            return Err(ZmpErrorKind::Unterminated.into());
        }

        let mut argv = Vec::new();
        for argument in body.split(|&byte| byte == 0) {
            if argv.len() == ZMP_MAX_ARGUMENTS {
                return Err(ZmpErrorKind::TooManyArguments {
                    max: ZMP_MAX_ARGUMENTS,
                }
                .into());
            }
            argv.push(String::from_utf8_lossy(argument).into_owned());
        }

        if argv[0].is_empty() {
            return Err(ZmpErrorKind::MissingCommand.into());
        }
        Ok(ZmpMessage { argv })
    }

    /// Writes the NUL-terminated arguments to `dst` without IAC escaping.
    pub fn encode(&self, dst: &mut BytesMut) -> CodecResult<()> {
        if self.command().is_empty() {
            return Err(ZmpErrorKind::MissingCommand.into());
        }
        if let Some(index) = self.argv.iter().position(|arg| arg.as_bytes().contains(&0)) {
            return Err(ZmpErrorKind::EmbeddedNul { index }.into());
        }
        dst.reserve(self.encoded_len());
        for argument in &self.argv {
            dst.put_slice(argument.as_bytes());
            dst.put_u8(0);
        }
        Ok(())
    }

    /// Encoded payload length in bytes, terminators included.
    pub fn encoded_len(&self) -> usize {
        self.argv.iter().map(|arg| arg.len() + 1).sum()
    }

    /// The command name (`argv[0]`).
    pub fn command(&self) -> &str {
        &self.argv[0]
    }

    /// Parameters following the command name.
    pub fn arguments(&self) -> &[String] {
        &self.argv[1..]
    }

    /// Full argument vector, command first.
    pub fn argv(&self) -> &[String] {
        &self.argv
    }

    /// Number of entries in the argument vector, command included.
    pub fn argc(&self) -> usize {
        self.argv.len()
    }
}

impl fmt::Display for ZmpMessage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.argv.join(" "))
    }
}

/// `true` when `name` addresses a whole package (`zmp.`) rather than one command.
pub fn is_package(name: &str) -> bool {
    name.ends_with(PACKAGE_SEPARATOR)
}
