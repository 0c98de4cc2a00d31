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


//! Client configuration

use clc_telnetcodec::ZmpMessage;
use clc_telnetcodec::consts::SUBNEGOTIATION_CAPACITY;
use clc_telnetcodec::zmp::command;
use clc_terminal::DEFAULT_EDIT_CAPACITY;
use std::fmt;

/// Wire protocol spoken with the server.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, clap::ValueEnum)]
pub enum ProtocolKind {
    /// Telnet with ECHO, NAWS and ZMP negotiation
    #[default]
    Telnet,
    /// NUL-delimited tagged frames
    TextFrame,
}

impl ProtocolKind {
    pub fn name(self) -> &'static str {
        match self {
            ProtocolKind::Telnet => "telnet",
            ProtocolKind::TextFrame => "text-frame",
        }
    }
}

impl fmt::Display for ProtocolKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Client configuration
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Server hostname or IP address
    pub host: String,

    /// Server port
    pub port: u16,

    /// Wire protocol
    pub protocol: ProtocolKind,

    /// Bytes read from the socket per receive
    pub buffer_size: usize,

    /// Largest subnegotiation or text frame accepted from the server
    pub subnegotiation_capacity: usize,

    /// Characters the input line may hold
    pub edit_capacity: usize,

    /// Name announced through `zmp.ident`
    pub client_name: String,

    /// Version announced through `zmp.ident`
    pub client_version: String,

    /// Description announced through `zmp.ident`
    pub client_about: String,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            host: "localhost".to_string(),
            port: 23,
            protocol: ProtocolKind::Telnet,
            buffer_size: 2048,
            subnegotiation_capacity: SUBNEGOTIATION_CAPACITY,
            edit_capacity: DEFAULT_EDIT_CAPACITY,
            client_name: "clc".to_string(),
            client_version: env!("CARGO_PKG_VERSION").to_string(),
            client_about: "Line-oriented MUD client".to_string(),
        }
    }
}

impl ClientConfig {
    /// Create a new client configuration with the given host and port
    pub fn new(host: impl Into<String>, port: u16) -> Self {
        Self {
            host: host.into(),
            port,
            ..Default::default()
        }
    }

    /// Set the wire protocol
    pub fn with_protocol(mut self, protocol: ProtocolKind) -> Self {
        self.protocol = protocol;
        self
    }

    /// Set the socket read size
    pub fn with_buffer_size(mut self, buffer_size: usize) -> Self {
        self.buffer_size = buffer_size.max(1);
        self
    }

    /// Set the subnegotiation and text frame limit
    pub fn with_subnegotiation_capacity(mut self, capacity: usize) -> Self {
        self.subnegotiation_capacity = capacity;
        self
    }

    /// Set the input line capacity
    pub fn with_edit_capacity(mut self, capacity: usize) -> Self {
        self.edit_capacity = capacity;
        self
    }

    /// Set the identity announced to ZMP servers
    pub fn with_identity(
        mut self,
        name: impl Into<String>,
        version: impl Into<String>,
        about: impl Into<String>,
    ) -> Self {
        self.client_name = name.into();
        self.client_version = version.into();
        self.client_about = about.into();
        self
    }

    /// Get the server address as a string
    pub fn address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    /// The `zmp.ident` announcement for this client.
    pub fn ident(&self) -> ZmpMessage {
        ZmpMessage::new(command::IDENT)
            .with_argument(self.client_name.as_str())
            .with_argument(self.client_version.as_str())
            .with_argument(self.client_about.as_str())
    }
}
