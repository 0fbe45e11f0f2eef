use chrono::{DateTime, Local};
use gpui::{AppContext, Application, Global, WindowOptions};
use gpui_component::{
    Root, WindowExt,
    notification::{Notification, NotificationType},
};
use festa_bridge::MessageFromBackend;
use tokio::sync::mpsc;

use crate::entities::{
    countdown_entity::CountdownEntity,
    devices_entity::OutputDevicesEntity,
    download_entity::{DownloadEntity, DownloadProgressEvent},
    party_entity::PartyEntity,
    playback_entity::PlaybackEntity,
    settings_entity::SettingsEntity,
};

pub mod components;
pub mod data;
pub mod entities;
pub mod formatting;
mod views;

/// Cloneable handle views use to issue commands to the backend.
#[derive(Clone)]
pub struct BackendBridge {
    pub to_backend: mpsc::Sender<festa_bridge::MessageToBackend>,
}

impl BackendBridge {
    pub async fn request_config(&self) {
        self.to_backend
            .send(festa_bridge::MessageToBackend::ConfigurationRequest)
            .await
            .expect("failed to request config");
    }

    pub async fn update_config(&self, config: festa_bridge::config::Config) {
        self.to_backend
            .send(festa_bridge::MessageToBackend::UpdateConfig(config))
            .await
            .expect("failed to send the updated config");
    }

    pub async fn request_output_devices(&self) {
        self.to_backend
            .send(festa_bridge::MessageToBackend::OutputDevicesListRequest)
            .await
            .expect("failed to request output devices list");
    }

    pub async fn select_output_device(&self, device_name: Option<String>) {
        self.to_backend
            .send(festa_bridge::MessageToBackend::SelectOutputDevice(
                device_name,
            ))
            .await
            .expect("failed to select the output device");
    }

    pub async fn play(&self) {
        self.to_backend
            .send(festa_bridge::MessageToBackend::Play)
            .await
            .expect("failed to request playback");
    }

    pub async fn pause(&self) {
        self.to_backend
            .send(festa_bridge::MessageToBackend::Pause)
            .await
            .expect("failed to request a pause");
    }

    pub async fn toggle_play(&self) {
        self.to_backend
            .send(festa_bridge::MessageToBackend::TogglePlay)
            .await
            .expect("failed to toggle playback");
    }

    pub async fn set_volume(&self, volume: f32) {
        self.to_backend
            .send(festa_bridge::MessageToBackend::SetVolume(volume))
            .await
            .expect("failed to set the volume");
    }

    pub async fn toggle_mute(&self) {
        self.to_backend
            .send(festa_bridge::MessageToBackend::ToggleMute)
            .await
            .expect("failed to toggle mute");
    }

    pub async fn seek_to(&self, seconds: f64) {
        self.to_backend
            .send(festa_bridge::MessageToBackend::SeekTo(seconds))
            .await
            .expect("failed to seek");
    }

    pub async fn change_song(&self, url: String) {
        self.to_backend
            .send(festa_bridge::MessageToBackend::ChangeSong { url })
            .await
            .expect("failed to change the song");
    }

    pub async fn start_countdown(&self, target: DateTime<Local>) {
        self.to_backend
            .send(festa_bridge::MessageToBackend::StartCountdown { target })
            .await
            .expect("failed to start the countdown");
    }

    pub async fn reset_countdown(&self, target: Option<DateTime<Local>>) {
        self.to_backend
            .send(festa_bridge::MessageToBackend::ResetCountdown { target })
            .await
            .expect("failed to reset the countdown");
    }
}

impl Global for BackendBridge {}

pub fn run(
    mut rx: mpsc::Receiver<festa_bridge::MessageFromBackend>,
    tx: mpsc::Sender<festa_bridge::MessageToBackend>,
) -> anyhow::Result<()> {
    let app = Application::new().with_assets(gpui_component_assets::Assets);

    app.run(move |cx| {
        gpui_component::init(cx);

        let settings = cx.new(|_| SettingsEntity::default());
        let playback = cx.new(|_| PlaybackEntity::default());
        let countdown = cx.new(|_| CountdownEntity::default());
        let download = cx.new(DownloadEntity::new);
        let devices = cx.new(|_| OutputDevicesEntity::default());
        let party = cx.new(|_| PartyEntity::default());

        let data = entities::DataEntities {
            settings,
            playback,
            countdown,
            download,
            devices,
            party,
        };
        let listener_data = data.clone();

        let bridge = BackendBridge {
            to_backend: tx.clone(),
        };
        cx.set_global(bridge.clone());
        let pump_bridge = bridge.clone();

        cx.spawn(async move |cx| {
            cx.open_window(WindowOptions::default(), |window, cx| {
                // TODO: move this message pump out of the window-open closure?
                let window_handle = window.window_handle();
                cx.spawn(async move |cx| {
                    while let Some(message) = rx.recv().await {
                        match message {
                            MessageFromBackend::ConfigurationResponse(config) => {
                                SettingsEntity::update(&listener_data.settings, config, cx)
                            }
                            MessageFromBackend::NotificationMessage(notification) => {
                                let notification_type = match notification.notification_type {
                                    festa_bridge::notification::NotificationType::Info => {
                                        NotificationType::Info
                                    }
                                    festa_bridge::notification::NotificationType::Success => {
                                        NotificationType::Success
                                    }
                                    festa_bridge::notification::NotificationType::Warning => {
                                        NotificationType::Warning
                                    }
                                    festa_bridge::notification::NotificationType::Error => {
                                        NotificationType::Error
                                    }
                                    festa_bridge::notification::NotificationType::Celebration => {
                                        NotificationType::Success
                                    }
                                };
                                window_handle
                                    .update(cx, |_, window, cx| {
                                        let notification = Notification::new()
                                            .message(notification.message)
                                            .with_type(notification_type);
                                        window.push_notification(notification, cx);
                                    })
                                    .expect("failed to push a new notification");
                            }
                            MessageFromBackend::DownloadProgressUpdate {
                                downloaded_bytes,
                                total_bytes,
                                speed,
                                remaining_time,
                            } => {
                                let event = DownloadProgressEvent {
                                    downloaded_bytes,
                                    total_bytes,
                                    speed,
                                    remaining_time,
                                };
                                DownloadEntity::update(&listener_data.download, event, cx);
                            }
                            MessageFromBackend::OutputDevicesListResponse(devices) => {
                                OutputDevicesEntity::update(&listener_data.devices, devices, cx);
                            }
                            MessageFromBackend::PlaybackStateUpdate(session) => {
                                PlaybackEntity::update(&listener_data.playback, session, cx);
                            }
                            MessageFromBackend::CountdownTick(state) => {
                                CountdownEntity::update(&listener_data.countdown, state, cx);
                            }
                            MessageFromBackend::CountdownReset { target } => {
                                // The ticker never restarts itself after a
                                // reset; the display was already zeroed by the
                                // preceding tick, so just re-arm it.
                                pump_bridge.start_countdown(target).await;
                            }
                        }
                    }
                })
                .detach();

                cx.spawn(async move |_| {
                    bridge.request_config().await;
                    bridge.request_output_devices().await;
                })
                .detach();

                let view = cx.new(|cx| crate::views::FrontendUi::new(&data, window, cx));
                cx.new(|cx| Root::new(view, window, cx))
            })?;

            Ok::<_, anyhow::Error>(())
        })
        .detach();
    });

    Ok(())
}
