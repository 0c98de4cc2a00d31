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


//! The client event loop

use crate::{ClientError, Connection, Result, Session, SignalFlags, Transport};
use clc_terminal::{Display, Key, TerminalSize};
use futures::{Stream, StreamExt};
use tracing::{debug, info, warn};

/// Something the user did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputEvent {
    Key(Key),
    Resize(TerminalSize),
    Interrupt,
}

/// Drives one session until the user interrupts or the input source ends.
///
/// Each pass flushes queued output and the display, then blocks on whichever of the socket
/// and the input stream is ready first. All parsing happens synchronously in the handler of
/// that wait. Peer disconnects switch the session to its disconnected state; only fatal
/// errors end the loop early.
pub async fn run<T, D, S>(
    connection: &mut Connection<T>,
    session: &mut Session<D>,
    input: &mut S,
    signals: &SignalFlags,
    buffer_size: usize,
) -> Result<()>
where
    T: Transport,
    D: Display,
    S: Stream<Item = InputEvent> + Unpin,
{
    let mut buffer = vec![0u8; buffer_size.max(1)];
    session.render_input();

    loop {
        if signals.is_interrupted() {
            info!("Interrupted");
            break;
        }
        if signals.take_resize() {
            let result = session.handle_resize();
            settle(connection, session, result)?;
        }

        let outbound = session.take_outbound();
        let result = connection.send_all(&outbound).await;
        settle(connection, session, result)?;

        session.refresh_status(connection.stats());
        let result = session.flush();
        settle(connection, session, result)?;

        tokio::select! {
            received = connection.receive(&mut buffer), if session.is_connected() => {
                match received {
                    Ok(Some(read)) => {
                        let result = session.handle_input(&buffer[..read]);
                        settle(connection, session, result)?;
                    }
                    Ok(None) => {
                        session.disconnect();
                    }
                    Err(error) => settle(connection, session, Err(error))?,
                }
            }
            event = input.next() => match event {
                Some(InputEvent::Key(key)) => {
                    let result = session.handle_key(key);
                    settle(connection, session, result)?;
                }
                Some(InputEvent::Resize(size)) => {
                    session.display_mut().resize(size);
                    signals.raise_resize();
                }
                Some(InputEvent::Interrupt) => signals.raise_interrupt(),
                None => {
                    debug!("Input source closed");
                    break;
                }
            },
        }
    }

    let stats = connection.stats();
    info!(
        "Session finished: sent {} bytes, received {} bytes",
        stats.bytes_sent, stats.bytes_received
    );
    Ok(())
}

/// Applies the error policy to a handler result.
fn settle<T: Transport, D: Display>(
    connection: &mut Connection<T>,
    session: &mut Session<D>,
    result: Result<()>,
) -> Result<()> {
    match result {
        Ok(()) => Ok(()),
        Err(ClientError::Disconnected) => {
            connection.mark_closed();
            session.disconnect();
            Ok(())
        }
        Err(error) if error.is_fatal() => Err(error),
        Err(error) => {
            warn!("{}", error);
            Ok(())
        }
    }
}
