use chrono::Local;
use festa_bridge::config::Config;
use festa_bridge::countdown::next_occurrence;
use festa_bridge::notification::NotificationType;

use crate::services::countdown_service;

/// Handles an incoming configuration request (see
/// [`festa_bridge::MessageToBackend::ConfigurationRequest`]).
pub async fn handle_config_request(context: super::AppContextHandle) {
    let config = {
        let state = context.state.read().await;
        state.config.clone()
    };
    context
        .send(festa_bridge::MessageFromBackend::ConfigurationResponse(
            config,
        ))
        .await;
}

/// Validates and persists a configuration update (see
/// [`festa_bridge::MessageToBackend::UpdateConfig`]). A changed birthday
/// re-arms the countdown against the new date.
pub async fn handle_config_update(context: super::AppContextHandle, mut config: Config) {
    let month = config.celebration.birthday_month;
    let day = config.celebration.birthday_day;
    if next_occurrence(&Local::now(), month, day).is_none() {
        context
            .send_notification(
                NotificationType::Error,
                format!("{month:02}-{day:02} is not a real calendar date"),
            )
            .await;
        return;
    }

    let volume = config.playback.default_volume;
    config.playback.default_volume = if volume.is_finite() {
        volume.clamp(0.0, 1.0)
    } else {
        festa_bridge::config::PlaybackConfig::default().default_volume
    };

    let birthday_changed = {
        let mut state = context.state.write().await;
        let previous = &state.config.celebration;
        let changed =
            previous.birthday_month != month || previous.birthday_day != day;
        state.config = config.clone();
        changed
    };

    match crate::config::save_config(&config).await {
        Ok(()) => {
            if birthday_changed {
                countdown_service::arm_from_config(context.clone()).await;
            }
            context
                .send(festa_bridge::MessageFromBackend::ConfigurationResponse(
                    config,
                ))
                .await;
            context
                .send_notification(NotificationType::Success, "Settings saved")
                .await;
        }
        Err(error) => {
            log::error!("Failed to save config: {error}");
            context
                .send_notification(
                    NotificationType::Error,
                    format!("Failed to save settings: {error}"),
                )
                .await;
        }
    }
}
