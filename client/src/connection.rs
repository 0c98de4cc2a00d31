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


//! Client connection wrapper

use crate::error::is_retryable;
use crate::{ClientError, Result, Transport};
use tracing::{debug, info, trace};

/// Traffic counters of a [`Connection`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ConnectionStats {
    pub bytes_sent: u64,
    pub bytes_received: u64,
}

/// A live link to the server.
///
/// Retries would-block and interrupted I/O internally. Once the peer closes the stream
/// the connection is marked dead and every later send is dropped.
pub struct Connection<T> {
    transport: T,
    stats: ConnectionStats,
    alive: bool,
}

impl<T: Transport> Connection<T> {
    pub fn new(transport: T) -> Self {
        Self {
            transport,
            stats: ConnectionStats::default(),
            alive: true,
        }
    }

    pub fn is_alive(&self) -> bool {
        self.alive
    }

    pub fn stats(&self) -> ConnectionStats {
        self.stats
    }

    /// Stops all further traffic.
    pub fn mark_closed(&mut self) {
        if self.alive {
            debug!("Connection marked closed");
        }
        self.alive = false;
    }

    /// Writes all of `bytes` in order.
    pub async fn send_all(&mut self, mut bytes: &[u8]) -> Result<()> {
        if !self.alive {
            if !bytes.is_empty() {
                debug!("Dropping {} outbound bytes, connection closed", bytes.len());
            }
            return Ok(());
        }
        while !bytes.is_empty() {
            match self.transport.send(bytes).await {
                Ok(0) => {
                    self.alive = false;
                    return Err(ClientError::Disconnected);
                }
                Ok(written) => {
                    trace!("Sent {} bytes", written);
                    self.stats.bytes_sent += written as u64;
                    bytes = &bytes[written..];
                }
                Err(error) if is_retryable(&error) => tokio::task::yield_now().await,
                Err(error) => {
                    let error = ClientError::io(&error, "send");
                    if error == ClientError::Disconnected {
                        self.alive = false;
                    }
                    return Err(error);
                }
            }
        }
        Ok(())
    }

    /// Reads the next chunk into `buffer`.
    ///
    /// Returns `Ok(None)` when the peer closed the stream; the connection is dead afterwards.
    pub async fn receive(&mut self, buffer: &mut [u8]) -> Result<Option<usize>> {
        if !self.alive {
            return Ok(None);
        }
        loop {
            match self.transport.receive(buffer).await {
                Ok(0) => {
                    info!("Connection closed by server");
                    self.alive = false;
                    return Ok(None);
                }
                Ok(read) => {
                    trace!("Received {} bytes", read);
                    self.stats.bytes_received += read as u64;
                    return Ok(Some(read));
                }
                Err(error) if is_retryable(&error) => tokio::task::yield_now().await,
                Err(error) => {
                    let error = ClientError::io(&error, "receive");
                    if error == ClientError::Disconnected {
                        self.alive = false;
                    }
                    return Err(error);
                }
            }
        }
    }

    /// Closes the write side of the transport.
    pub async fn shutdown(&mut self) -> Result<()> {
        self.alive = false;
        self.transport
            .shutdown()
            .await
            .map_err(|error| ClientError::io(&error, "shutdown"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use std::collections::VecDeque;
    use std::io;
    use tokio::io::{AsyncReadExt, AsyncWriteExt, duplex};

    /// Transport replaying scripted results.
    struct Scripted {
        sends: VecDeque<io::Result<usize>>,
        receives: VecDeque<io::Result<usize>>,
        written: Vec<u8>,
    }

    #[async_trait]
    impl Transport for Scripted {
        async fn send(&mut self, bytes: &[u8]) -> io::Result<usize> {
            let result = self.sends.pop_front().unwrap_or(Ok(bytes.len()));
            if let Ok(count) = result {
                self.written.extend_from_slice(&bytes[..count.min(bytes.len())]);
            }
            result
        }

        async fn receive(&mut self, _buffer: &mut [u8]) -> io::Result<usize> {
            self.receives.pop_front().unwrap_or(Ok(0))
        }

        async fn shutdown(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    fn scripted(sends: Vec<io::Result<usize>>, receives: Vec<io::Result<usize>>) -> Scripted {
        Scripted {
            sends: sends.into(),
            receives: receives.into(),
            written: Vec::new(),
        }
    }

    #[tokio::test]
    async fn test_send_and_receive_over_duplex() {
        let (client, mut server) = duplex(64);
        let mut connection = Connection::new(client);

        connection.send_all(b"look\n").await.unwrap();
        let mut received = [0u8; 5];
        server.read_exact(&mut received).await.unwrap();
        assert_eq!(&received, b"look\n");

        server.write_all(b"You see").await.unwrap();
        let mut buffer = [0u8; 32];
        let read = connection.receive(&mut buffer).await.unwrap().unwrap();
        assert_eq!(&buffer[..read], b"You see");
        assert_eq!(
            connection.stats(),
            ConnectionStats {
                bytes_sent: 5,
                bytes_received: 7
            }
        );
    }

    #[tokio::test]
    async fn test_peer_close_is_reported_once() {
        let (client, server) = duplex(64);
        let mut connection = Connection::new(client);
        drop(server);

        let mut buffer = [0u8; 8];
        assert_eq!(connection.receive(&mut buffer).await.unwrap(), None);
        assert!(!connection.is_alive());
        assert_eq!(connection.receive(&mut buffer).await.unwrap(), None);
        connection.send_all(b"ignored").await.unwrap();
        assert_eq!(connection.stats().bytes_sent, 0);
    }

    #[tokio::test]
    async fn test_send_retries_partial_and_interrupted_writes() {
        let transport = scripted(
            vec![
                Ok(2),
                Err(io::Error::from(io::ErrorKind::Interrupted)),
                Err(io::Error::from(io::ErrorKind::WouldBlock)),
                Ok(3),
            ],
            vec![],
        );
        let mut connection = Connection::new(transport);
        connection.send_all(b"hello").await.unwrap();
        assert_eq!(connection.transport.written, b"hello");
        assert_eq!(connection.stats().bytes_sent, 5);
    }

    #[tokio::test]
    async fn test_receive_retries_interrupted_reads() {
        let transport = scripted(
            vec![],
            vec![Err(io::Error::from(io::ErrorKind::Interrupted)), Ok(4)],
        );
        let mut connection = Connection::new(transport);
        let mut buffer = [0u8; 8];
        assert_eq!(connection.receive(&mut buffer).await.unwrap(), Some(4));
    }

    #[tokio::test]
    async fn test_receive_yields_while_would_block() {
        let transport = scripted(
            vec![],
            vec![
                Err(io::Error::from(io::ErrorKind::WouldBlock)),
                Err(io::Error::from(io::ErrorKind::WouldBlock)),
                Ok(3),
            ],
        );
        let mut connection = Connection::new(transport);
        let mut buffer = [0u8; 8];
        let mut receive = std::pin::pin!(connection.receive(&mut buffer));
        // Each would-block hands control back to the runtime instead of spinning.
        assert!(futures::poll!(receive.as_mut()).is_pending());
        assert!(futures::poll!(receive.as_mut()).is_pending());
        assert_eq!(receive.await.unwrap(), Some(3));
    }

    #[tokio::test]
    async fn test_fatal_send_error() {
        let transport = scripted(
            vec![Err(io::Error::from(io::ErrorKind::PermissionDenied))],
            vec![],
        );
        let mut connection = Connection::new(transport);
        let error = connection.send_all(b"x").await.unwrap_err();
        assert!(error.is_fatal());
    }

    #[tokio::test]
    async fn test_broken_pipe_marks_connection_closed() {
        let transport = scripted(vec![Err(io::Error::from(io::ErrorKind::BrokenPipe))], vec![]);
        let mut connection = Connection::new(transport);
        assert_eq!(
            connection.send_all(b"x").await,
            Err(ClientError::Disconnected)
        );
        assert!(!connection.is_alive());
    }
}
