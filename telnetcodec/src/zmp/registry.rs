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


//! Registry of ZMP commands the client understands.

use super::{ZmpMessage, is_package};
use chrono::{DateTime, Utc};
use tracing::{debug, info};

/// Names of the built-in `zmp` package commands.
pub mod command {
    /// Liveness probe; answered with [`TIME`]
    pub const PING: &str = "zmp.ping";
    /// Current time in `YYYY-MM-DD HH:MM:SS` UTC
    pub const TIME: &str = "zmp.time";
    /// Implementation identification
    pub const IDENT: &str = "zmp.ident";
    /// Capability query for a command or package
    pub const CHECK: &str = "zmp.check";
    /// Positive answer to [`CHECK`]
    pub const SUPPORT: &str = "zmp.support";
    /// Negative answer to [`CHECK`]
    pub const NO_SUPPORT: &str = "zmp.no-support";
}

/// Timestamp layout carried by `zmp.time`.
pub const TIME_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// What a registered command does when the server invokes it.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum ZmpHandler {
    /// Reply with the current time
    Ping,
    /// Answer whether a command or package is registered
    Check,
    /// Record the server's clock
    Time,
    /// Record the server's identity
    Ident,
    /// Record a positive capability answer
    Support,
    /// Record a negative capability answer
    NoSupport,
}

/// A registry entry.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ZmpCommand {
    name: String,
    handler: ZmpHandler,
}

impl ZmpCommand {
    /// Full command name, e.g. `zmp.ping`.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Behaviour bound to this name.
    pub fn handler(&self) -> ZmpHandler {
        self.handler
    }
}

/// Ordered list of known ZMP commands.
///
/// Populated once at startup and only read afterwards. Lookups are a linear scan,
/// which is plenty for a handful of entries.
#[derive(Clone, Debug, Default)]
pub struct ZmpRegistry {
    commands: Vec<ZmpCommand>,
}

impl ZmpRegistry {
    /// Creates an empty registry.
    pub fn new() -> Self {
        ZmpRegistry::default()
    }

    /// Creates a registry holding the `zmp` package.
    pub fn with_builtins() -> Self {
        let mut registry = ZmpRegistry::new();
        registry.register(command::PING, ZmpHandler::Ping);
        registry.register(command::TIME, ZmpHandler::Time);
        registry.register(command::IDENT, ZmpHandler::Ident);
        registry.register(command::CHECK, ZmpHandler::Check);
        registry.register(command::SUPPORT, ZmpHandler::Support);
        registry.register(command::NO_SUPPORT, ZmpHandler::NoSupport);
        registry
    }

    /// Binds `name` to `handler`. Later registrations of the same name are shadowed
    /// by the first one.
    pub fn register<S: Into<String>>(&mut self, name: S, handler: ZmpHandler) {
        self.commands.push(ZmpCommand {
            name: name.into(),
            handler,
        });
    }

    /// Exact-name lookup.
    pub fn find(&self, name: &str) -> Option<&ZmpCommand> {
        self.commands.iter().find(|command| command.name == name)
    }

    /// Registered commands in registration order.
    pub fn commands(&self) -> &[ZmpCommand] {
        &self.commands
    }

    /// Capability check.
    ///
    /// A package query (`zmp.`) matches any command starting with it; a command query
    /// must match exactly. An empty query is never supported.
    pub fn supports(&self, query: &str) -> bool {
        if query.is_empty() {
            return false;
        }
        if is_package(query) {
            self.commands
                .iter()
                .any(|command| command.name.starts_with(query))
        } else {
            self.find(query).is_some()
        }
    }

    /// Runs the handler for `message`, returning the reply to send if any.
    pub fn dispatch(&self, message: &ZmpMessage) -> Option<ZmpMessage> {
        self.dispatch_at(message, Utc::now())
    }

    /// Like [`dispatch`](Self::dispatch) with an explicit clock reading.
    pub fn dispatch_at(&self, message: &ZmpMessage, now: DateTime<Utc>) -> Option<ZmpMessage> {
        let Some(command) = self.find(message.command()) else {
            debug!("Ignoring unregistered ZMP command {}", message.command());
            return None;
        };

        match command.handler {
            ZmpHandler::Ping => Some(
                ZmpMessage::new(command::TIME).with_argument(now.format(TIME_FORMAT).to_string()),
            ),
            ZmpHandler::Check => {
                if message.argc() != 2 {
                    debug!("Ignoring {} with {} arguments", command.name, message.argc());
                    return None;
                }
                let query = &message.argv()[1];
                let answer = if self.supports(query) {
                    command::SUPPORT
                } else {
                    command::NO_SUPPORT
                };
                Some(ZmpMessage::new(answer).with_argument(query.as_str()))
            }
            ZmpHandler::Time => {
                info!("Server time: {}", message.arguments().join(" "));
                None
            }
            ZmpHandler::Ident => {
                info!("Server identifies as: {}", message.arguments().join(" "));
                None
            }
            ZmpHandler::Support | ZmpHandler::NoSupport => {
                debug!("{} {}", message.command(), message.arguments().join(" "));
                None
            }
        }
    }
}
