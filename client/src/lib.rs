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


//! # CLC Client
//!
//! Session plumbing for the `clc` line-oriented MUD client.
//!
//! A [`Session`] owns everything one connection needs: the wire [`Protocol`] (Telnet with
//! ZMP, or the NUL-delimited text-frame protocol), the terminal emulator, the line editor
//! and a [`Display`](clc_terminal::Display). The [`run`] loop owns the [`Connection`] and
//! waits on the socket and the keyboard in one place; everything else runs synchronously
//! between waits.
//!
//! ```no_run
//! use clc_client::{ClientConfig, Connection, InputEvent, Session, SignalFlags, run};
//! use clc_terminal::TerminalBuffer;
//!
//! # async fn example() -> clc_client::Result<()> {
//! let config = ClientConfig::new("mud.example.org", 4000);
//! let stream = tokio::net::TcpStream::connect(config.address()).await?;
//! let mut connection = Connection::new(stream);
//! let mut session = Session::new(&config, TerminalBuffer::new());
//! let mut input = futures::stream::empty::<InputEvent>();
//! run(&mut connection, &mut session, &mut input, &SignalFlags::new(), config.buffer_size).await
//! # }
//! ```

#![warn(
    clippy::cargo,
    clippy::pedantic,
    future_incompatible,
    rust_2018_idioms
)]
#![allow(
    clippy::module_name_repetitions,
    clippy::missing_errors_doc,
    clippy::must_use_candidate
)]

mod client;
mod config;
mod connection;
mod error;
mod protocol;
pub mod screen;
mod session;
mod signals;
mod telnet;
mod textframe;
mod transport;

pub use self::client::{InputEvent, run};
pub use self::config::{ClientConfig, ProtocolKind};
pub use self::connection::{Connection, ConnectionStats};
pub use self::error::{ClientError, Result};
pub use self::protocol::{Protocol, SessionIo};
pub use self::session::{DISCONNECTED_BANNER, Session, SessionState};
pub use self::signals::SignalFlags;
pub use self::telnet::TelnetProtocol;
pub use self::textframe::{TERMINATOR, TextFrame, TextFrameCodec, TextFrameProtocol, tag};
pub use self::transport::Transport;
