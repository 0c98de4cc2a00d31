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


use crate::{CodecError, CodecResult};
use bytes::{BufMut, BytesMut};

/// Bounded accumulator for subnegotiation payloads.
///
/// The buffer never holds more than `capacity` bytes. A push beyond that is refused
/// with [`CodecError::CapacityExceeded`] and leaves the contents untouched; the caller
/// decides whether to abandon the payload.
#[derive(Debug)]
pub struct SubnegotiationBuffer {
    bytes: BytesMut,
    capacity: usize,
}

impl SubnegotiationBuffer {
    /// Creates an empty buffer that holds at most `capacity` bytes.
    pub fn with_capacity(capacity: usize) -> Self {
        SubnegotiationBuffer {
            bytes: BytesMut::new(),
            capacity,
        }
    }

    /// Appends one byte, refusing it once the buffer is full.
    pub fn push(&mut self, byte: u8) -> CodecResult<()> {
        if self.is_full() {
            return Err(CodecError::CapacityExceeded {
                capacity: self.capacity,
            });
        }
        self.bytes.put_u8(byte);
        Ok(())
    }

    /// Discards all buffered bytes.
    pub fn clear(&mut self) {
        self.bytes.clear();
    }

    /// Removes and returns the buffered payload, leaving the buffer empty.
    pub fn take(&mut self) -> BytesMut {
        self.bytes.split()
    }

    /// Buffered payload.
    pub fn as_slice(&self) -> &[u8] {
        &self.bytes
    }

    /// Number of buffered bytes.
    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    /// `true` if nothing is buffered.
    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }

    /// `true` once no further byte fits.
    pub fn is_full(&self) -> bool {
        self.bytes.len() >= self.capacity
    }

    /// Maximum number of bytes this buffer holds.
    pub fn capacity(&self) -> usize {
        self.capacity
    }
}
