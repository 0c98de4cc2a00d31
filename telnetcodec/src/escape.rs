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


//! IAC escaping for outbound data.
//!
//! Every literal `0xFF` in an outbound stream is doubled so the peer can tell data apart
//! from commands. Decoding is the `IAC IAC` case of [`TelnetCodec`](crate::TelnetCodec).

use crate::consts::IAC;
use bytes::{BufMut, BytesMut};

/// Number of bytes `src` occupies once escaped.
pub fn escaped_len(src: &[u8]) -> usize {
    src.len() + src.iter().filter(|&&byte| byte == IAC).count()
}

/// Appends `src` to `dst`, doubling every IAC byte.
///
/// Runs of plain bytes are copied in one slice; byte order is preserved exactly.
pub fn escape_into(src: &[u8], dst: &mut BytesMut) {
    dst.reserve(escaped_len(src));
    let mut start = 0;
    for (index, &byte) in src.iter().enumerate() {
        if byte == IAC {
            dst.put_slice(&src[start..index]);
            dst.put_u8(IAC);
            dst.put_u8(IAC);
            start = index + 1;
        }
    }
    dst.put_slice(&src[start..]);
}

/// Returns an escaped copy of `src`.
pub fn escape(src: &[u8]) -> BytesMut {
    let mut dst = BytesMut::with_capacity(escaped_len(src));
    escape_into(src, &mut dst);
    dst
}
