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


//! Byte transport underneath a [`Connection`](crate::Connection)

use async_trait::async_trait;
use std::io;
use tokio::io::{AsyncRead, AsyncReadExt, AsyncWrite, AsyncWriteExt};

/// Ordered byte pipe to the server.
///
/// Implemented for every tokio stream, so a `TcpStream` or an in-memory
/// `tokio::io::DuplexStream` can be used directly.
#[async_trait]
pub trait Transport: Send {
    /// Writes some prefix of `bytes`, returning how many were written.
    async fn send(&mut self, bytes: &[u8]) -> io::Result<usize>;

    /// Reads into `buffer`. `Ok(0)` means the peer closed the stream.
    async fn receive(&mut self, buffer: &mut [u8]) -> io::Result<usize>;

    /// Closes the write side.
    async fn shutdown(&mut self) -> io::Result<()>;
}

#[async_trait]
impl<T> Transport for T
where
    T: AsyncRead + AsyncWrite + Unpin + Send,
{
    async fn send(&mut self, bytes: &[u8]) -> io::Result<usize> {
        AsyncWriteExt::write(self, bytes).await
    }

    async fn receive(&mut self, buffer: &mut [u8]) -> io::Result<usize> {
        AsyncReadExt::read(self, buffer).await
    }

    async fn shutdown(&mut self) -> io::Result<()> {
        AsyncWriteExt::shutdown(self).await
    }
}
