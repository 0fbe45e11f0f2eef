//! Communication bridge between frontend and backend.
//!
//! This crate defines the types and protocols used to connect the graphical
//! frontend with the asynchronous backend responsible for the audio playback
//! session, the birthday countdown, song caching, and configuration.
//!
//! The design is deliberately lightweight and unidirectional:
//! - The frontend sends commands (e.g., play, seek, change song, reset the
//!   countdown, request config).
//! - The backend pushes events (e.g., playback snapshots, countdown ticks,
//!   download progress, notifications).
//!
//! Communication happens over bounded [`tokio::sync::mpsc`] channels wrapped
//! in [`BridgeChannels`], providing back-pressure, async compatibility, and
//! clean separation of concerns.

pub mod audio;
pub mod config;
pub mod countdown;
pub mod notification;
pub mod playback;
pub mod playlist;

use chrono::{DateTime, Local};
use tokio::sync::mpsc::{self, Receiver, Sender};

/// Messages emitted by the backend to inform the frontend of state updates.
///
/// These are typically sent in response to frontend requests or to push
/// asynchronous progress/events (e.g., playback position, countdown ticks,
/// notifications).
#[derive(Debug, Clone)]
pub enum MessageFromBackend {
    /// Generic message for all notifications in the application.
    NotificationMessage(notification::NotificationMessage),
    /// Response to the configuration request from the frontend.
    ConfigurationResponse(config::Config),
    /// Generic message for reporting the progress of a song download.
    DownloadProgressUpdate {
        /// Current speed in bytes per second.
        speed: f64,
        /// Amount of downloaded bytes to this point.
        downloaded_bytes: u64,
        /// Overall amount of bytes to be downloaded.
        total_bytes: u64,
        /// Estimated remaining time until download completion, in seconds.
        remaining_time: f64,
    },
    /// The list of output devices available on the active host.
    OutputDevicesListResponse(Vec<audio::OutputDevice>),
    /// A fresh snapshot of the shared playback session. Sent after every
    /// control command and periodically while a song is playing.
    PlaybackStateUpdate(playback::PlaybackSession),
    /// A recomputed countdown breakdown. Sent once per second while the
    /// countdown is armed, and a final time when it ends.
    CountdownTick(countdown::CountdownState),
    /// Confirmation of a countdown reset, carrying the resolved target. The
    /// countdown stays disarmed until the frontend re-arms it with
    /// [`MessageToBackend::StartCountdown`].
    CountdownReset { target: DateTime<Local> },
}

/// Commands issued by the frontend to control or query the backend.
///
/// These messages drive the core functionality of the application.
#[derive(Debug, Clone)]
pub enum MessageToBackend {
    /// Request for the application configuration.
    ConfigurationRequest,
    /// Request to persist a modified configuration.
    UpdateConfig(config::Config),
    /// Request for the list of audio output devices.
    OutputDevicesListRequest,
    /// Route playback through the output device with the given name, or the
    /// host's default output when `None`.
    SelectOutputDevice(Option<String>),
    /// Start or resume playback of the current song.
    Play,
    /// Pause playback. Idempotent when already paused.
    Pause,
    /// Dispatch to play or pause based on the current playback state.
    TogglePlay,
    /// Set the playback volume. Values are clamped to `[0, 1]`.
    SetVolume(f32),
    /// Flip the mute flag without touching the stored volume.
    ToggleMute,
    /// Seek to the given position in seconds, clamped to `[0, duration]`.
    SeekTo(f64),
    /// Switch the session to the song at the given URL. A URL equal to the
    /// current source is ignored; playback continuation is preserved.
    ChangeSong { url: String },
    /// Arm the countdown ticker for the given target instant.
    StartCountdown { target: DateTime<Local> },
    /// Disarm the countdown and zero its state. With `target: None` the next
    /// occurrence of the configured birthday is resolved and reported back.
    ResetCountdown { target: Option<DateTime<Local>> },
}

/// Paired `tokio::mpsc` channels for bidirectional communication between
/// frontend and backend.
pub struct BridgeChannels {
    /// Receiver used by the frontend to get messages from the backend.
    pub frontend_rx: Receiver<MessageFromBackend>,
    /// Sender used by the frontend to send commands to the backend.
    pub frontend_tx: Sender<MessageToBackend>,

    /// Receiver used by the backend to get commands from the frontend.
    pub backend_rx: Receiver<MessageToBackend>,
    /// Sender used by the backend to send events/responses to the frontend.
    pub backend_tx: Sender<MessageFromBackend>,
}

impl BridgeChannels {
    /// Creates a new pair of bridged channels with the given buffer capacity.
    pub fn new(buffer: usize) -> Self {
        let (to_backend_tx, to_backend_rx) = mpsc::channel(buffer);
        let (to_frontend_tx, to_frontend_rx) = mpsc::channel(buffer);
        Self {
            frontend_tx: to_backend_tx,
            frontend_rx: to_frontend_rx,
            backend_rx: to_backend_rx,
            backend_tx: to_frontend_tx,
        }
    }
}

impl Default for BridgeChannels {
    fn default() -> Self {
        Self::new(64)
    }
}
