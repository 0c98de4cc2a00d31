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


//! `clc`: a line-oriented Telnet/ZMP MUD client.

use clap::Parser;
use clc_client::screen::{self, Screen};
use clc_client::{
    ClientConfig, ClientError, Connection, InputEvent, ProtocolKind, Result, Session,
    SignalFlags, run,
};
use clc_terminal::TerminalResult;
use crossterm::event::EventStream;
use futures::StreamExt;
use futures::future::ready;
use std::fs::OpenOptions;
use std::path::{Path, PathBuf};
use std::pin::pin;
use std::process::ExitCode;
use std::sync::Mutex;
use tokio::net::TcpStream;
use tracing::{error, info, warn};
use tracing_subscriber::EnvFilter;

#[derive(Debug, Parser)]
#[command(name = "clc", version, about = "Line-oriented Telnet/ZMP MUD client")]
struct Cli {
    /// Server host name or address
    host: String,

    /// Server port
    #[arg(default_value_t = 23)]
    port: u16,

    /// Wire protocol spoken by the server
    #[arg(long, value_enum, default_value_t = ProtocolKind::Telnet)]
    protocol: ProtocolKind,

    /// Write logs to this file. Logging is off without it.
    #[arg(long)]
    log_file: Option<PathBuf>,
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    if let Some(path) = cli.log_file.as_deref() {
        if let Err(error) = init_logging(path) {
            eprintln!("clc: cannot open log file {}: {}", path.display(), error);
            return ExitCode::FAILURE;
        }
    }

    let runtime = match tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
    {
        Ok(runtime) => runtime,
        Err(error) => {
            eprintln!("clc: cannot start runtime: {}", error);
            return ExitCode::FAILURE;
        }
    };

    let config = ClientConfig::new(cli.host, cli.port).with_protocol(cli.protocol);
    match runtime.block_on(run_client(config)) {
        Ok(()) => ExitCode::SUCCESS,
        Err(error) => {
            error!("{}", error);
            eprintln!("clc: {}", error);
            ExitCode::FAILURE
        }
    }
}

fn init_logging(path: &Path) -> std::io::Result<()> {
    let file = OpenOptions::new().create(true).append(true).open(path)?;
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .init();
    Ok(())
}

/// Connects, runs the session and restores the terminal before returning.
async fn run_client(config: ClientConfig) -> Result<()> {
    let address = config.address();
    info!("Connecting to {} using {}", address, config.protocol);
    let stream = TcpStream::connect(&address)
        .await
        .map_err(|error| ClientError::Setup(format!("cannot connect to {}: {}", address, error)))?;
    if let Err(error) = stream.set_nodelay(true) {
        warn!("Failed to set TCP_NODELAY: {}", error);
    }
    let mut connection = Connection::new(stream);

    let screen = Screen::open().map_err(|error| ClientError::Setup(error.to_string()))?;
    let mut session = Session::new(&config, screen);
    let signals = SignalFlags::new();

    let keys = EventStream::new().filter_map(|event| {
        ready(match event {
            Ok(event) => screen::input_event(event),
            Err(error) => {
                warn!("Keyboard read failed: {}", error);
                Some(InputEvent::Interrupt)
            }
        })
    });
    let interrupts = futures::stream::once(tokio::signal::ctrl_c()).map(|_| InputEvent::Interrupt);
    let mut input = pin!(futures::stream::select(keys, interrupts));

    let result = run(
        &mut connection,
        &mut session,
        &mut input,
        &signals,
        config.buffer_size,
    )
    .await;

    let closed = session.display_mut().close();
    if let Err(error) = connection.shutdown().await {
        info!("Shutdown after session end: {}", error);
    }
    finish(result, closed)
}

/// The session outcome wins over a failure to restore the terminal.
fn finish(result: Result<()>, closed: TerminalResult<()>) -> Result<()> {
    match (result, closed) {
        (Err(error), Err(close_error)) => {
            warn!("Failed to restore terminal: {}", close_error);
            Err(error)
        }
        (Err(error), Ok(())) => Err(error),
        (Ok(()), closed) => closed.map_err(ClientError::from),
    }
}
