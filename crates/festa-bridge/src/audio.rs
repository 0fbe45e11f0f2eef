/// An audio output device as presented to the frontend.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutputDevice {
    /// Host-assigned device name, also used to select the device.
    pub name: String,
    /// Whether the session currently plays through this device.
    pub selected: bool,
}
