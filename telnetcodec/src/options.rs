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


use crate::consts::option;
use std::fmt;

/// [Telnet Terminal Options](https://www.iana.org/assignments/telnet-options/telnet-options.xhtml)
/// recognised by the client.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum TelnetOption {
    /// [`option::ECHO`] Telnet Echo Option [RFC857](https://tools.ietf.org/html/rfc857)
    Echo,
    /// [`option::SGA`] Suppress Go Ahead [RFC858](https://tools.ietf.org/html/rfc858)
    SuppressGoAhead,
    /// [`option::TTYPE`] Terminal Type [RFC1091](http://www.iana.org/go/rfc1091)
    TTYPE,
    /// [`option::NAWS`] Negotiate About Window Size [RFC1073](http://www.iana.org/go/rfc1073)
    NAWS,
    /// [`option::ZMP`] Zenith Mud Protocol [ZMP](http://discworld.starturtle.net/external/protocols/zmp.html)
    ZMP,
    /// Any option code without a named variant
    Unknown(u8),
}

impl TelnetOption {
    /// Converts an option code into a `TelnetOption`.
    pub fn from_u8(byte: u8) -> TelnetOption {
        match byte {
            option::ECHO => TelnetOption::Echo,
            option::SGA => TelnetOption::SuppressGoAhead,
            option::TTYPE => TelnetOption::TTYPE,
            option::NAWS => TelnetOption::NAWS,
            option::ZMP => TelnetOption::ZMP,
            other => TelnetOption::Unknown(other),
        }
    }

    /// Returns the option code sent on the wire.
    pub fn to_u8(self) -> u8 {
        match self {
            TelnetOption::Echo => option::ECHO,
            TelnetOption::SuppressGoAhead => option::SGA,
            TelnetOption::TTYPE => option::TTYPE,
            TelnetOption::NAWS => option::NAWS,
            TelnetOption::ZMP => option::ZMP,
            TelnetOption::Unknown(byte) => byte,
        }
    }
}

impl From<u8> for TelnetOption {
    fn from(byte: u8) -> Self {
        TelnetOption::from_u8(byte)
    }
}

impl From<TelnetOption> for u8 {
    fn from(option: TelnetOption) -> Self {
        option.to_u8()
    }
}

impl fmt::Display for TelnetOption {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TelnetOption::Unknown(byte) => write!(f, "Unknown({})", byte),
            other => write!(f, "{:?}", other),
        }
    }
}

/// Negotiated state of a single Telnet session.
///
/// Only the [`TelnetCodec`](crate::TelnetCodec) decoder mutates these flags;
/// everyone else observes them. A fresh value describes a session that has
/// not negotiated anything yet: the client echoes locally, ZMP is off and
/// no window size is being reported.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct TelnetOptions {
    local_echo: bool,
    zmp: bool,
    naws: bool,
}

impl Default for TelnetOptions {
    fn default() -> Self {
        TelnetOptions {
            local_echo: true,
            zmp: false,
            naws: false,
        }
    }
}

impl TelnetOptions {
    /// `true` while the client is responsible for echoing typed input.
    pub fn local_echo(&self) -> bool {
        self.local_echo
    }

    /// `true` once the server has offered ZMP and we accepted.
    pub fn zmp_enabled(&self) -> bool {
        self.zmp
    }

    /// `true` once the server asked for window size reports.
    pub fn naws_enabled(&self) -> bool {
        self.naws
    }

    pub(crate) fn set_local_echo(&mut self, enabled: bool) {
        self.local_echo = enabled;
    }

    pub(crate) fn set_zmp(&mut self, enabled: bool) {
        self.zmp = enabled;
    }

    pub(crate) fn set_naws(&mut self, enabled: bool) {
        self.naws = enabled;
    }
}
