//! Client side of the realtime push channel.
//!
//! One [`RealtimeChannel`] owns one WebSocket connection. Every frame it
//! receives is decoded and, if recognized, published on the [`EventBus`].
//! The channel never sends anything and never authenticates.

use std::time::Duration;

use futures::StreamExt;
use tokio::net::TcpStream;
use tokio::sync::watch;
use tokio_tungstenite::tungstenite::Message;
use tokio_tungstenite::{MaybeTlsStream, WebSocketStream, connect_async};
use tokio_util::sync::CancellationToken;

use remit_core::config::RealtimeConfig;

use super::reconnect::ReconnectPolicy;
use super::status::ChannelStatus;
use crate::bridge::EventBus;
use crate::message::{Decoded, decode_text};

type Socket = WebSocketStream<MaybeTlsStream<TcpStream>>;

/// Upper bound on the closing handshake when the channel is cancelled.
const CLOSE_TIMEOUT: Duration = Duration::from_secs(1);

/// How a connected session ended.
enum SessionEnd {
    /// The owner cancelled the channel.
    Cancelled,
    /// The server or the network ended the connection.
    Lost(String),
}

/// Realtime push channel.
#[derive(Debug)]
pub struct RealtimeChannel {
    url: String,
    max_frame_bytes: usize,
    policy: ReconnectPolicy,
    bus: EventBus,
    status: watch::Sender<ChannelStatus>,
}

impl RealtimeChannel {
    /// Create a channel publishing onto `bus`.
    pub fn new(config: &RealtimeConfig, bus: EventBus) -> Self {
        let (status, _) = watch::channel(ChannelStatus::Connecting);
        Self {
            url: config.url.clone(),
            max_frame_bytes: config.max_frame_bytes,
            policy: ReconnectPolicy::from_config(&config.reconnect),
            bus,
            status,
        }
    }

    /// Watch the channel status.
    pub fn status(&self) -> watch::Receiver<ChannelStatus> {
        self.status.subscribe()
    }

    /// Connect and pump frames until `cancel` fires or the connection is
    /// gone for good.
    ///
    /// A refused or lost connection is retried only while the reconnect
    /// policy allows it. The retry budget starts over after each
    /// successful connection.
    pub async fn run(self, cancel: CancellationToken) {
        let mut attempt: u32 = 0;

        loop {
            self.status.send_replace(ChannelStatus::Connecting);

            let connected = tokio::select! {
                _ = cancel.cancelled() => {
                    self.status.send_replace(ChannelStatus::Closed);
                    return;
                }
                result = connect_async(self.url.as_str()) => result,
            };

            let reason = match connected {
                Ok((socket, _response)) => {
                    tracing::info!("Realtime channel connected to {}", self.url);
                    attempt = 0;
                    self.status.send_replace(ChannelStatus::Open);

                    match self.pump(socket, &cancel).await {
                        SessionEnd::Cancelled => {
                            tracing::debug!("Realtime channel closed");
                            self.status.send_replace(ChannelStatus::Closed);
                            return;
                        }
                        SessionEnd::Lost(reason) => reason,
                    }
                }
                Err(e) => e.to_string(),
            };

            tracing::warn!("Realtime channel unavailable: {}", reason);
            self.status.send_replace(ChannelStatus::Failed(reason));

            let Some(delay) = self.policy.delay_for(attempt) else {
                return;
            };
            attempt += 1;
            tracing::debug!(
                "Reconnecting realtime channel in {:?} (attempt {})",
                delay,
                attempt
            );

            tokio::select! {
                _ = cancel.cancelled() => {
                    self.status.send_replace(ChannelStatus::Closed);
                    return;
                }
                _ = tokio::time::sleep(delay) => {}
            }
        }
    }

    async fn pump(&self, mut socket: Socket, cancel: &CancellationToken) -> SessionEnd {
        loop {
            tokio::select! {
                biased;
                _ = cancel.cancelled() => {
                    // Frames still buffered on the socket are discarded.
                    let _ = tokio::time::timeout(CLOSE_TIMEOUT, socket.close(None)).await;
                    return SessionEnd::Cancelled;
                }
                next = socket.next() => match next {
                    Some(Ok(Message::Text(text))) => self.dispatch(text.as_str()),
                    Some(Ok(Message::Binary(bytes))) => match std::str::from_utf8(&bytes) {
                        Ok(text) => self.dispatch(text),
                        Err(_) => tracing::debug!("Dropping non-UTF-8 binary frame"),
                    },
                    Some(Ok(Message::Close(frame))) => {
                        let reason = frame
                            .map(|f| format!("closed by server: {}", f.reason.as_str()))
                            .unwrap_or_else(|| "closed by server".to_string());
                        return SessionEnd::Lost(reason);
                    }
                    Some(Ok(_)) => {}
                    Some(Err(e)) => return SessionEnd::Lost(e.to_string()),
                    None => return SessionEnd::Lost("connection ended".to_string()),
                },
            }
        }
    }

    fn dispatch(&self, raw: &str) {
        match decode_text(raw, self.max_frame_bytes) {
            Decoded::Event(event) => {
                tracing::debug!("Realtime {} for {}", event.kind(), event.reference());
                self.bus.publish(event);
            }
            Decoded::Ignored(kind) => {
                tracing::trace!("Ignoring realtime frame of type {}", kind);
            }
            Decoded::Malformed(reason) => {
                tracing::debug!("Dropping malformed realtime frame: {}", reason);
            }
        }
    }
}
