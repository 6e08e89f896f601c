//! Live feed against a local push server.

use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Duration;

use futures::{SinkExt, StreamExt};
use serde_json::json;
use tokio::net::TcpListener;
use tokio::sync::{broadcast, watch};
use tokio_tungstenite::accept_async;
use tokio_tungstenite::tungstenite::Message;

use remit_core::config::{RealtimeConfig, ReconnectConfig};
use remit_entity::event::RealtimeEvent;
use remit_realtime::{ChannelStatus, LiveFeed, NotificationState, Toast};

const WAIT: Duration = Duration::from_secs(5);

/// What the server pushes to every open connection.
#[derive(Debug, Clone)]
enum Outbound {
    Text(String),
    Binary(Vec<u8>),
    Close,
}

struct PushServer {
    url: String,
    connections: Arc<AtomicUsize>,
    frames: broadcast::Sender<Outbound>,
}

impl PushServer {
    async fn start() -> Self {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let url = format!(
            "ws://{}/api/v1/transactions/ws/transactions",
            listener.local_addr().unwrap()
        );
        let connections = Arc::new(AtomicUsize::new(0));
        let (frames, _) = broadcast::channel::<Outbound>(32);

        let counter = connections.clone();
        let outbound = frames.clone();
        tokio::spawn(async move {
            while let Ok((tcp, _)) = listener.accept().await {
                counter.fetch_add(1, Ordering::SeqCst);
                let mut rx = outbound.subscribe();
                tokio::spawn(async move {
                    let Ok(mut ws) = accept_async(tcp).await else {
                        return;
                    };
                    loop {
                        tokio::select! {
                            frame = rx.recv() => match frame {
                                Ok(Outbound::Close) => {
                                    let _ = ws.close(None).await;
                                    break;
                                }
                                Ok(Outbound::Text(frame)) => {
                                    if ws.send(Message::text(frame)).await.is_err() {
                                        break;
                                    }
                                }
                                Ok(Outbound::Binary(bytes)) => {
                                    if ws.send(Message::binary(bytes)).await.is_err() {
                                        break;
                                    }
                                }
                                Err(_) => break,
                            },
                            incoming = ws.next() => match incoming {
                                Some(Ok(_)) => {}
                                _ => break,
                            },
                        }
                    }
                });
            }
        });

        Self {
            url,
            connections,
            frames,
        }
    }

    fn config(&self) -> RealtimeConfig {
        RealtimeConfig {
            url: self.url.clone(),
            ..RealtimeConfig::default()
        }
    }

    fn push(&self, frame: serde_json::Value) {
        self.frames.send(Outbound::Text(frame.to_string())).unwrap();
    }

    fn push_raw(&self, frame: &str) {
        self.frames.send(Outbound::Text(frame.to_string())).unwrap();
    }

    fn push_binary(&self, bytes: Vec<u8>) {
        self.frames.send(Outbound::Binary(bytes)).unwrap();
    }

    fn close_all(&self) {
        self.frames.send(Outbound::Close).unwrap();
    }

    fn connections(&self) -> usize {
        self.connections.load(Ordering::SeqCst)
    }
}

fn new_transaction(reference: &str) -> serde_json::Value {
    json!({
        "type": "NEW_TRANSACTION",
        "data": {
            "reference": reference,
            "amount": 125000,
            "currency": "XOF",
            "status": "En attente"
        }
    })
}

async fn wait_open(status: &mut watch::Receiver<ChannelStatus>) {
    tokio::time::timeout(WAIT, status.wait_for(|s| *s == ChannelStatus::Open))
        .await
        .expect("channel did not open")
        .unwrap();
}

async fn wait_accepted(state: &mut watch::Receiver<NotificationState>, count: u64) {
    tokio::time::timeout(WAIT, state.wait_for(|s| s.accepted() >= count))
        .await
        .expect("event did not arrive")
        .unwrap();
}

#[tokio::test]
async fn test_one_connection_feeds_toast_and_badge() {
    let server = PushServer::start().await;
    let feed = LiveFeed::mount(&server.config());
    wait_open(&mut feed.status()).await;

    server.push(new_transaction("TX-1"));
    server.push(new_transaction("TX-2"));

    let mut state = feed.notifications();
    wait_accepted(&mut state, 2).await;
    let mut unseen = feed.unseen();
    tokio::time::timeout(WAIT, unseen.wait_for(|n| *n == 2))
        .await
        .unwrap()
        .unwrap();

    let shown = feed.notification();
    let current = shown.visible().unwrap();
    assert_eq!(current.event.reference(), "TX-2");
    assert_eq!(
        Toast::from_event(&current.event).amount.as_deref(),
        Some("125000 XOF")
    );
    assert_eq!(server.connections(), 1);

    feed.mark_all_read();
    assert_eq!(feed.unseen_count(), 0);

    feed.unmount().await;
}

#[tokio::test]
async fn test_unknown_and_malformed_frames_change_nothing() {
    let server = PushServer::start().await;
    let feed = LiveFeed::mount(&server.config());
    wait_open(&mut feed.status()).await;

    server.push(json!({"type": "BALANCE_UPDATE", "data": {"reference": "TX-1"}}));
    server.push_raw("definitely not json");
    server.push(json!({"type": 5, "data": {"reference": "TX-1"}}));
    server.push(json!({"data": {"reference": "TX-1"}}));
    // Sentinel: once this arrives, everything before it has been handled.
    server.push(json!({
        "type": "STATUS_CHANGE",
        "data": {"reference": "TX-7", "old_status": "En attente", "new_status": "Effectuée"}
    }));

    let mut state = feed.notifications();
    wait_accepted(&mut state, 1).await;

    let snapshot = feed.notification();
    assert_eq!(snapshot.accepted(), 1);
    match &snapshot.visible().unwrap().event {
        RealtimeEvent::StatusChange(change) => assert_eq!(change.reference, "TX-7"),
        other => panic!("unexpected event {other:?}"),
    }
    assert_eq!(feed.unseen_count(), 0);

    feed.unmount().await;
}

#[tokio::test]
async fn test_partial_new_transaction_still_counts() {
    let server = PushServer::start().await;
    let feed = LiveFeed::mount(&server.config());
    wait_open(&mut feed.status()).await;

    server.push(json!({"type": "NEW_TRANSACTION", "data": {"reference": 1042}}));
    server.push(json!({"type": "NEW_TRANSACTION", "data": {"reference": "TX-2", "amount": null}}));
    server.push(json!({"type": "NEW_TRANSACTION", "data": {"reference": "TX-3", "amount": 10, "currency": "XOF"}}));

    let mut unseen = feed.unseen();
    tokio::time::timeout(WAIT, unseen.wait_for(|n| *n == 3))
        .await
        .expect("badge did not reach 3")
        .unwrap();
    assert_eq!(feed.notification().accepted(), 3);

    feed.unmount().await;
}

#[tokio::test]
async fn test_binary_frames_are_decoded_as_text() {
    let server = PushServer::start().await;
    let feed = LiveFeed::mount(&server.config());
    wait_open(&mut feed.status()).await;

    server.push_binary(vec![0xff, 0xfe, 0xfd]);
    server.push_binary(new_transaction("TX-bin").to_string().into_bytes());

    let mut state = feed.notifications();
    wait_accepted(&mut state, 1).await;

    let snapshot = feed.notification();
    assert_eq!(snapshot.accepted(), 1);
    assert_eq!(snapshot.visible().unwrap().event.reference(), "TX-bin");
    assert_eq!(feed.unseen_count(), 1);
    assert_eq!(server.connections(), 1);

    feed.unmount().await;
}

#[tokio::test]
async fn test_frames_after_unmount_are_not_observed() {
    let server = PushServer::start().await;
    let feed = LiveFeed::mount(&server.config());
    let mut status = feed.status();
    wait_open(&mut status).await;

    server.push(new_transaction("TX-1"));
    let mut state = feed.notifications();
    wait_accepted(&mut state, 1).await;
    let unseen = feed.unseen();
    let before = state.borrow().clone();

    feed.unmount().await;
    assert_eq!(*status.borrow(), ChannelStatus::Closed);

    let _ = server
        .frames
        .send(Outbound::Text(new_transaction("TX-2").to_string()));
    tokio::time::sleep(Duration::from_millis(200)).await;

    assert_eq!(*state.borrow(), before);
    assert_eq!(*unseen.borrow(), 1);
}

#[tokio::test]
async fn test_refused_connection_reports_failure() {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);

    let feed = LiveFeed::mount(&RealtimeConfig {
        url: format!("ws://{addr}/ws"),
        ..RealtimeConfig::default()
    });

    let mut status = feed.status();
    tokio::time::timeout(WAIT, status.wait_for(ChannelStatus::is_failed))
        .await
        .unwrap()
        .unwrap();

    feed.unmount().await;
}

#[tokio::test]
async fn test_no_reconnect_by_default() {
    let server = PushServer::start().await;
    let feed = LiveFeed::mount(&server.config());
    let mut status = feed.status();
    wait_open(&mut status).await;

    server.close_all();
    tokio::time::timeout(WAIT, status.wait_for(ChannelStatus::is_failed))
        .await
        .unwrap()
        .unwrap();

    tokio::time::sleep(Duration::from_millis(200)).await;
    assert_eq!(server.connections(), 1);

    feed.unmount().await;
}

#[tokio::test]
async fn test_opt_in_reconnect_after_server_close() {
    let server = PushServer::start().await;
    let config = RealtimeConfig {
        reconnect: ReconnectConfig {
            max_attempts: 3,
            initial_backoff_ms: 20,
            max_backoff_ms: 100,
        },
        ..server.config()
    };
    let feed = LiveFeed::mount(&config);
    let mut status = feed.status();
    wait_open(&mut status).await;

    server.close_all();
    tokio::time::timeout(WAIT, async {
        while server.connections() < 2 {
            tokio::time::sleep(Duration::from_millis(10)).await;
        }
    })
    .await
    .expect("channel did not reconnect");
    wait_open(&mut status).await;

    server.push(new_transaction("TX-after-reconnect"));
    let mut state = feed.notifications();
    wait_accepted(&mut state, 1).await;
    assert_eq!(feed.unseen_count(), 1);

    feed.unmount().await;
}
