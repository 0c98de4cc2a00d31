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


//! Telnet protocol byte values.

/// Interpret As Command
pub const IAC: u8 = 255;
/// Refuse or stop performing an option
pub const DONT: u8 = 254;
/// Request the other party perform an option
pub const DO: u8 = 253;
/// Refuse to perform an option
pub const WONT: u8 = 252;
/// Offer to perform an option
pub const WILL: u8 = 251;
/// Subnegotiation Begin
pub const SB: u8 = 250;
/// Go Ahead
pub const GA: u8 = 249;
/// No Operation
pub const NOP: u8 = 241;
/// Subnegotiation End
pub const SE: u8 = 240;

/// Upper bound on buffered subnegotiation payload bytes.
pub const SUBNEGOTIATION_CAPACITY: usize = 8 * 1024;

/// Upper bound on the number of arguments in a single ZMP message.
pub const ZMP_MAX_ARGUMENTS: usize = 32;

/// Option codes
pub mod option {
    /// Telnet Echo Option [RFC857](https://tools.ietf.org/html/rfc857)
    pub const ECHO: u8 = 1;
    /// Suppress Go Ahead [RFC858](https://tools.ietf.org/html/rfc858)
    pub const SGA: u8 = 3;
    /// Terminal Type [RFC1091](http://www.iana.org/go/rfc1091)
    pub const TTYPE: u8 = 24;
    /// Negotiate About Window Size [RFC1073](http://www.iana.org/go/rfc1073)
    pub const NAWS: u8 = 31;
    /// Zenith Mud Protocol
    pub const ZMP: u8 = 93;
}
