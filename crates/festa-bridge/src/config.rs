use serde::{Deserialize, Serialize};

/// Who the celebration is for, and when.
///
/// The birthday is stored as a plain month/day pair; the backend resolves it
/// into the next matching calendar instant when arming the countdown.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct CelebrationConfig {
    /// Display name of the birthday person, used all over the greeting and
    /// party screens.
    pub celebrant_name: String,
    /// Birthday month, `1..=12`.
    pub birthday_month: u32,
    /// Birthday day of month, `1..=31`.
    pub birthday_day: u32,
}

impl Default for CelebrationConfig {
    fn default() -> Self {
        Self {
            celebrant_name: "Nora".to_string(),
            birthday_month: 10,
            birthday_day: 24,
        }
    }
}

/// Initial behavior of the playback session.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct PlaybackConfig {
    /// Volume applied to the session at startup, clamped to `[0, 1]`.
    pub default_volume: f32,
    /// Whether the first song should start playing as soon as the greeting
    /// screen is reached.
    pub autoplay: bool,
}

impl Default for PlaybackConfig {
    fn default() -> Self {
        Self {
            default_volume: 0.8,
            autoplay: true,
        }
    }
}

/// Configuration for selecting a specific audio output device.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct AudioDeviceConfig {
    /// Name of the preferred audio output device. `None` means the host's
    /// default output.
    pub selected_device_name: Option<String>,
}

/// Global application configuration.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct Config {
    /// Who and when the application celebrates.
    pub celebration: CelebrationConfig,
    /// Startup behavior of the playback session.
    pub playback: PlaybackConfig,
    /// Configuration for the audio output device.
    pub audio_device_config: AudioDeviceConfig,
}
