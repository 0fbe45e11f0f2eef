/// Snapshot of the audio playback session owned by the backend.
///
/// The backend is the single writer of this state. It pushes a fresh snapshot
/// whenever a control is applied, a track finishes loading, or the playhead
/// advances, and the frontend renders whatever it last received.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PlaybackSession {
    /// URL of the current source, `None` before the first track is chosen.
    pub source_url: Option<String>,
    /// Whether playback is currently advancing.
    pub is_playing: bool,
    /// Whether output is muted. The logical `volume` is kept while muted.
    pub is_muted: bool,
    /// Logical volume in `[0, 1]`.
    pub volume: f32,
    /// Playhead position in seconds.
    pub current_time: f64,
    /// Duration of the current source in seconds, `0.0` while unknown.
    pub duration: f64,
    /// True between a source change being requested and the new source
    /// becoming playable (or failing).
    pub is_loading: bool,
    /// The most recent playback failure, cleared by the next successful play.
    pub last_error: Option<String>,
}
