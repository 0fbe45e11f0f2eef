use festa_audio::session::SessionCommand;
use festa_bridge::audio::OutputDevice;
use festa_bridge::notification::NotificationType;

/// Handles an incoming output devices list request (see
/// [`festa_bridge::MessageToBackend::OutputDevicesListRequest`]).
pub async fn handle_output_devices_list_request(context: super::AppContextHandle) {
    let config = {
        let state = context.state.read().await;
        state.config.clone()
    };

    let devices = match festa_audio::device::list_output_devices() {
        Ok(devices) => devices,
        Err(error) => {
            log::error!("Failed to list output devices: {error}");
            context
                .send_notification(
                    NotificationType::Error,
                    format!("Failed to list output devices: {error}"),
                )
                .await;
            return;
        }
    };

    let response_devices: Vec<OutputDevice> = devices
        .iter()
        .map(|device| OutputDevice {
            name: device.name.clone(),
            selected: config.audio_device_config.selected_device_name.as_deref()
                == Some(device.name.as_str()),
        })
        .collect();

    context
        .send(festa_bridge::MessageFromBackend::OutputDevicesListResponse(
            response_devices,
        ))
        .await;
}

/// Handles an output device selection, reroutes the playback session, and
/// persists the choice to config. `None` returns to the host's default.
pub async fn handle_output_device_selection(
    context: super::AppContextHandle,
    device_name: Option<String>,
) {
    if let Some(name) = &device_name {
        match festa_audio::device::get_device_by_name(name) {
            Ok(Some(_)) => {}
            Ok(None) => {
                log::error!("Could not find the target device {name}");
                context
                    .send_notification(
                        NotificationType::Error,
                        format!("Output device '{name}' is not available"),
                    )
                    .await;
                return;
            }
            Err(error) => {
                log::error!("Failed to look up output device {name}: {error}");
                context
                    .send_notification(
                        NotificationType::Error,
                        format!("Failed to look up output device '{name}': {error}"),
                    )
                    .await;
                return;
            }
        }
    }

    let config = {
        let mut state = context.state.write().await;
        state.config.audio_device_config.selected_device_name = device_name.clone();
        state.session.send(SessionCommand::SetOutputDevice {
            name: device_name.clone(),
        });
        state.config.clone()
    };

    // persist the updated selection so it is remembered across runs
    if let Err(error) = crate::config::save_config(&config).await {
        log::error!("Failed to persist the selected output device: {error}");
        context
            .send_notification(
                NotificationType::Error,
                format!("Failed to save the selected output device: {error}"),
            )
            .await;
        return;
    }

    context
        .send(festa_bridge::MessageFromBackend::ConfigurationResponse(
            config,
        ))
        .await;
    let target = device_name.unwrap_or_else(|| "the system default output".to_string());
    context
        .send_notification(NotificationType::Success, format!("Playing through {target}"))
        .await;
}
