//! Application context and message dispatching utilities.
//!
//! The context contains the shared state and provides helpers for sending
//! responses and notifications back to the frontend bridge.

use std::sync::Arc;

use festa_bridge::{MessageFromBackend, MessageToBackend};
use tokio::sync::mpsc::{Receiver, Sender};

use crate::services;
use crate::state::SharedState;

/// Shared application context passed to services and message handlers.
pub(crate) struct AppContext {
    /// Mutable runtime application state shared across services.
    pub state: SharedState,
    /// Outbound channel to the frontend bridge.
    pub tx: Sender<MessageFromBackend>,
}

impl AppContext {
    /// Read and dispatch messages from the frontend bridge until it closes.
    pub async fn consume_bridge_messages(self: &Arc<Self>, mut rx: Receiver<MessageToBackend>) {
        while let Some(message) = rx.recv().await {
            log::debug!("Got a frontend message: {message:?}");
            self.dispatch_message(message).await;
        }
    }

    /// Dispatches the received message from frontend down to individual
    /// service handlers.
    async fn dispatch_message(self: &Arc<Self>, message: MessageToBackend) {
        match message {
            MessageToBackend::ConfigurationRequest => {
                services::config_service::handle_config_request(self.clone()).await;
            }
            MessageToBackend::UpdateConfig(config) => {
                services::config_service::handle_config_update(self.clone(), config).await;
            }
            MessageToBackend::OutputDevicesListRequest => {
                services::audio_service::handle_output_devices_list_request(self.clone()).await;
            }
            MessageToBackend::SelectOutputDevice(device_name) => {
                services::audio_service::handle_output_device_selection(self.clone(), device_name)
                    .await;
            }
            MessageToBackend::Play => {
                services::playback_service::handle_play(self.clone()).await;
            }
            MessageToBackend::Pause => {
                services::playback_service::handle_pause(self.clone()).await;
            }
            MessageToBackend::TogglePlay => {
                services::playback_service::handle_toggle_play(self.clone()).await;
            }
            MessageToBackend::SetVolume(volume) => {
                services::playback_service::handle_set_volume(self.clone(), volume).await;
            }
            MessageToBackend::ToggleMute => {
                services::playback_service::handle_toggle_mute(self.clone()).await;
            }
            MessageToBackend::SeekTo(seconds) => {
                services::playback_service::handle_seek_to(self.clone(), seconds).await;
            }
            MessageToBackend::ChangeSong { url } => {
                services::playback_service::handle_change_song(self.clone(), url).await;
            }
            MessageToBackend::StartCountdown { target } => {
                services::countdown_service::handle_start(self.clone(), target).await;
            }
            MessageToBackend::ResetCountdown { target } => {
                services::countdown_service::handle_reset(self.clone(), target).await;
            }
        }
    }

    /// Send a message to the frontend bridge. A closed bridge only means the
    /// frontend is shutting down, so the message is dropped rather than
    /// treated as fatal.
    pub async fn send(&self, message: MessageFromBackend) {
        if self.tx.send(message).await.is_err() {
            log::warn!("Frontend bridge is closed, dropping message");
        }
    }

    /// Send a notification message to the frontend bridge.
    pub async fn send_notification(
        &self,
        notification_type: festa_bridge::notification::NotificationType,
        content: impl Into<String>,
    ) {
        self.send(MessageFromBackend::NotificationMessage(
            festa_bridge::notification::NotificationMessage::new(notification_type, content),
        ))
        .await;
    }
}
