//! Backend runtime setup and orchestration.
//!
//! This module wires together configuration, the playback session worker,
//! shared state, and the message dispatch loop that listens to frontend
//! bridge requests.

use std::{sync::Arc, thread};

use festa_audio::session::{SessionCommand, SessionEvent, SessionHandle};
use festa_bridge::notification::{NotificationMessage, NotificationType};
use festa_bridge::{MessageFromBackend, MessageToBackend};
use tokio::sync::{
    RwLock,
    mpsc::{Receiver, Sender},
};

use crate::app::AppContext;
use crate::services::{countdown_service, playback_service};
use crate::state::State;

/// Initialize backend state and start processing frontend messages.
async fn setup_backend(rx: Receiver<MessageToBackend>, tx: Sender<MessageFromBackend>) {
    let (config, cache_path) = crate::config::load_config()
        .await
        .expect("failed to load config");

    let request_client = reqwest::Client::new();

    // The session worker reports from its own thread, hence the blocking
    // sends. Snapshots become playback updates, failures become error
    // notifications on top of the snapshot's own error field.
    let session_tx = tx.clone();
    let session = SessionHandle::spawn(config.playback.default_volume, move |event| {
        let message = match event {
            SessionEvent::State(snapshot) => {
                MessageFromBackend::PlaybackStateUpdate(playback_service::to_bridge_session(snapshot))
            }
            SessionEvent::Failure { message } => MessageFromBackend::NotificationMessage(
                NotificationMessage::new(NotificationType::Error, message),
            ),
        };
        if session_tx.blocking_send(message).is_err() {
            log::warn!("Frontend bridge is closed, dropping session event");
        }
    });

    if let Some(device_name) = &config.audio_device_config.selected_device_name {
        session.send(SessionCommand::SetOutputDevice {
            name: Some(device_name.clone()),
        });
    }

    let state = Arc::new(RwLock::new(State {
        config,
        cache_path,
        request_client,
        session,
        countdown: None,
    }));

    let context = Arc::new(AppContext { state, tx });
    countdown_service::arm_from_config(context.clone()).await;
    context.consume_bridge_messages(rx).await;
}

/// Spawn the backend runtime and begin processing bridge messages.
pub fn run(rx: Receiver<MessageToBackend>, tx: Sender<MessageFromBackend>) {
    thread::spawn(move || {
        let runtime = tokio::runtime::Builder::new_multi_thread()
            .enable_all()
            .build()
            .expect("failed to build tokio runtime");
        runtime.block_on(async { setup_backend(rx, tx).await });
    });
}
