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


//! Client error types

use clc_telnetcodec::CodecError;
use clc_terminal::TerminalError;
use std::io;

/// Client error type
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ClientError {
    /// Transport failure other than would-block or interrupted
    #[error("I/O error during {operation}: {kind}")]
    Io {
        kind: io::ErrorKind,
        operation: String,
    },

    /// Connection closed by server
    #[error("Connection closed by server")]
    Disconnected,

    /// Wire encoding failure
    #[error("Codec error: {0}")]
    Codec(#[from] CodecError),

    /// Display or input failure
    #[error("Terminal error: {0}")]
    Terminal(#[from] TerminalError),

    /// Failure before the session started
    #[error("Setup failed: {0}")]
    Setup(String),
}

impl ClientError {
    /// Classifies a transport error. Resets and broken pipes count as the peer going away.
    pub fn io(error: &io::Error, operation: &str) -> ClientError {
        match error.kind() {
            io::ErrorKind::ConnectionReset
            | io::ErrorKind::ConnectionAborted
            | io::ErrorKind::BrokenPipe
            | io::ErrorKind::UnexpectedEof => ClientError::Disconnected,
            kind => ClientError::Io {
                kind,
                operation: operation.to_string(),
            },
        }
    }

    /// `true` when the client must release the display and exit.
    pub fn is_fatal(&self) -> bool {
        match self {
            ClientError::Io { .. } | ClientError::Setup(_) => true,
            ClientError::Disconnected => false,
            ClientError::Codec(error) => matches!(error, CodecError::IOError { .. }),
            ClientError::Terminal(error) => !error.is_recoverable(),
        }
    }
}

impl From<io::Error> for ClientError {
    fn from(error: io::Error) -> Self {
        ClientError::io(&error, "transport")
    }
}

/// Client result type
pub type Result<T> = std::result::Result<T, ClientError>;

/// `true` for I/O errors that are retried instead of reported.
pub(crate) fn is_retryable(error: &io::Error) -> bool {
    matches!(
        error.kind(),
        io::ErrorKind::WouldBlock | io::ErrorKind::Interrupted
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use clc_telnetcodec::ZmpErrorKind;

    #[test]
    fn test_peer_errors_are_disconnects() {
        for kind in [
            io::ErrorKind::ConnectionReset,
            io::ErrorKind::BrokenPipe,
            io::ErrorKind::UnexpectedEof,
        ] {
            let error = ClientError::from(io::Error::from(kind));
            assert_eq!(error, ClientError::Disconnected);
            assert!(!error.is_fatal());
        }
    }

    #[test]
    fn test_transport_errors_are_fatal() {
        let error = ClientError::io(&io::Error::from(io::ErrorKind::PermissionDenied), "send");
        assert!(error.is_fatal());
        assert!(error.to_string().contains("send"));
    }

    #[test]
    fn test_protocol_errors_are_recoverable() {
        let error = ClientError::from(CodecError::from(ZmpErrorKind::MissingCommand));
        assert!(!error.is_fatal());
        let error = ClientError::from(TerminalError::EditBufferFull { capacity: 4 });
        assert!(!error.is_fatal());
    }

    #[test]
    fn test_retryable() {
        assert!(is_retryable(&io::Error::from(io::ErrorKind::WouldBlock)));
        assert!(is_retryable(&io::Error::from(io::ErrorKind::Interrupted)));
        assert!(!is_retryable(&io::Error::from(io::ErrorKind::TimedOut)));
    }
}
