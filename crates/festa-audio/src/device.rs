use rodio::cpal::{
    self, Device,
    traits::{DeviceTrait, HostTrait},
};

/// Errors that can occur while enumerating or resolving audio output devices.
#[derive(Debug, thiserror::Error)]
pub enum DeviceError {
    /// Failed to enumerate audio output devices. This error occurs when the
    /// underlying audio backend fails to query the list of available output
    /// devices for the host.
    #[error("failed to read device's information: {0}")]
    ReadDevices(#[from] cpal::DevicesError),
    /// Failed to obtain the host-assigned name of a device. The name doubles
    /// as the device's identifier across the application, so a device without
    /// one cannot be offered for selection.
    #[error("failed to read device's name: {0}")]
    ReadDeviceName(#[from] cpal::DeviceNameError),
}

/// Represents an output audio device available on the default host.
#[derive(Clone)]
pub struct HostOutputDevice {
    /// Host-assigned device name, used as its identifier within the app.
    pub name: String,

    device: Device,
}

impl std::fmt::Display for HostOutputDevice {
    fn fmt(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(formatter, "{}", self.name)
    }
}

impl HostOutputDevice {
    /// The underlying device, e.g. for opening an output stream on it.
    pub fn device(&self) -> &Device {
        &self.device
    }
}

/// Returns a list of all output audio devices available on the default host.
pub fn list_output_devices() -> Result<Vec<HostOutputDevice>, DeviceError> {
    cpal::default_host()
        .output_devices()?
        .map(|device| {
            Ok(HostOutputDevice {
                name: device.name()?,
                device,
            })
        })
        .collect()
}

/// Retrieves a specific output device by its host-assigned name.
///
/// Returns `Ok(None)` when no output device with that name is currently
/// available, e.g. because it was unplugged since the list was shown.
pub fn get_device_by_name(name: &str) -> Result<Option<Device>, DeviceError> {
    for device in cpal::default_host().output_devices()? {
        if device.name()? == name {
            return Ok(Some(device));
        }
    }
    Ok(None)
}
