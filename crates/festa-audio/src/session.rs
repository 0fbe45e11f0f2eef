//! The shared playback session.
//!
//! One worker thread owns the output stream, the sink, and the session state.
//! Commands go in through [`SessionHandle`], snapshots and failures come back
//! through the event callback passed to [`SessionHandle::spawn`]. Nothing in
//! here ever panics on a playback failure; errors degrade to the session's
//! `last_error` field and a [`SessionEvent::Failure`] event.

use std::fs::File;
use std::io::BufReader;
use std::path::{Path, PathBuf};
use std::sync::mpsc::{self, Receiver, RecvTimeoutError, Sender};
use std::thread;
use std::time::Duration;

use lofty::prelude::AudioFile;
use lofty::probe::Probe;
use rodio::{Decoder, OutputStream, OutputStreamHandle, Sink, Source};

use crate::device;

/// How often the worker polls playback progress while idle on commands.
const PROGRESS_TICK: Duration = Duration::from_millis(250);

/// Commands accepted by the session worker.
#[derive(Debug, Clone)]
pub enum SessionCommand {
    /// Start or resume playback of the loaded source.
    Play,
    /// Pause playback. Idempotent when already paused.
    Pause,
    /// Dispatch to play or pause based on the current state.
    TogglePlay,
    /// Set the logical volume. Values are clamped to `[0, 1]`.
    SetVolume(f32),
    /// Flip the mute flag. The logical volume is kept.
    ToggleMute,
    /// Seek to the given position in seconds, clamped to `[0, duration]`.
    SeekTo(f64),
    /// A source change was requested. Stops current audio and marks the
    /// session as loading until the matching finish or abort arrives.
    BeginLoad { url: String },
    /// The source behind `url` is available on disk and can be armed.
    FinishLoad { url: String, path: PathBuf },
    /// Fetching the source behind `url` failed.
    AbortLoad { url: String, message: String },
    /// Route playback through the output device with the given name, or the
    /// host default when `None`.
    SetOutputDevice { name: Option<String> },
    /// Tear the worker down.
    Shutdown,
}

/// Events emitted by the session worker.
#[derive(Debug, Clone)]
pub enum SessionEvent {
    /// A fresh snapshot, emitted after every command and progress change.
    State(SessionSnapshot),
    /// A failure worth surfacing to the user directly, in addition to being
    /// recorded on the snapshot's `last_error`.
    Failure { message: String },
}

/// A point-in-time copy of the session state.
#[derive(Debug, Clone, PartialEq)]
pub struct SessionSnapshot {
    pub source_url: Option<String>,
    pub is_playing: bool,
    pub is_muted: bool,
    pub volume: f32,
    pub current_time: f64,
    pub duration: f64,
    pub is_loading: bool,
    pub last_error: Option<String>,
}

/// The session state machine, kept free of audio side effects so that every
/// transition can be exercised without an output device.
///
/// `is_playing` tracks the listener's intent. While a source change is in
/// flight the intent survives, which is what keeps playback going across
/// song switches.
#[derive(Debug, Clone)]
pub struct SessionState {
    source_url: Option<String>,
    is_playing: bool,
    is_muted: bool,
    volume: f32,
    current_time: f64,
    duration: f64,
    is_loading: bool,
    last_error: Option<String>,
    pending_url: Option<String>,
}

fn sanitize_volume(volume: f32) -> Option<f32> {
    volume.is_finite().then(|| volume.clamp(0.0, 1.0))
}

impl SessionState {
    pub fn new(volume: f32) -> Self {
        Self {
            source_url: None,
            is_playing: false,
            is_muted: false,
            volume: sanitize_volume(volume).unwrap_or(1.0),
            current_time: 0.0,
            duration: 0.0,
            is_loading: false,
            last_error: None,
            pending_url: None,
        }
    }

    pub fn is_playing(&self) -> bool {
        self.is_playing
    }

    /// Volume that should actually be applied to the sink.
    pub fn effective_volume(&self) -> f32 {
        if self.is_muted { 0.0 } else { self.volume }
    }

    /// Marks the session as playing. Fails when there is nothing to play,
    /// recording the failure instead of raising it.
    pub fn play(&mut self) -> Result<(), &'static str> {
        if self.source_url.is_none() && self.pending_url.is_none() {
            let message = "no song is loaded";
            self.last_error = Some(message.to_string());
            return Err(message);
        }
        self.is_playing = true;
        self.last_error = None;
        Ok(())
    }

    pub fn pause(&mut self) {
        self.is_playing = false;
    }

    pub fn toggle_play(&mut self) -> Result<(), &'static str> {
        if self.is_playing {
            self.pause();
            Ok(())
        } else {
            self.play()
        }
    }

    /// Applies a clamped volume. Non-finite input is ignored.
    pub fn set_volume(&mut self, volume: f32) {
        if let Some(volume) = sanitize_volume(volume) {
            self.volume = volume;
        }
    }

    pub fn toggle_mute(&mut self) {
        self.is_muted = !self.is_muted;
    }

    /// Clamps the seek target to `[0, duration]` and records it as the new
    /// position. Returns the clamped value for the caller to apply.
    pub fn seek_to(&mut self, seconds: f64) -> f64 {
        let seconds = if seconds.is_finite() { seconds } else { 0.0 };
        let upper = if self.duration > 0.0 { self.duration } else { 0.0 };
        self.current_time = seconds.clamp(0.0, upper);
        self.current_time
    }

    /// Begins switching to a new source. Returns false when the session is
    /// already settled on that source, in which case nothing changes.
    pub fn begin_load(&mut self, url: &str) -> bool {
        if self.pending_url.is_none() && self.source_url.as_deref() == Some(url) {
            return false;
        }
        self.pending_url = Some(url.to_string());
        self.is_loading = true;
        self.current_time = 0.0;
        self.duration = 0.0;
        self.last_error = None;
        true
    }

    /// Whether `url` is the load the session is currently waiting for. Loads
    /// that were superseded by a newer request come back false and must be
    /// dropped by the caller.
    pub fn is_pending(&self, url: &str) -> bool {
        self.pending_url.as_deref() == Some(url)
    }

    /// Settles the pending load. Playback intent is kept, so a session that
    /// was playing keeps playing on the new source.
    pub fn finish_load(&mut self, url: &str, duration: f64) -> bool {
        if !self.is_pending(url) {
            return false;
        }
        self.pending_url = None;
        self.source_url = Some(url.to_string());
        self.is_loading = false;
        self.duration = if duration.is_finite() && duration > 0.0 {
            duration
        } else {
            0.0
        };
        self.current_time = 0.0;
        self.last_error = None;
        true
    }

    /// Fails the pending load, leaving the session stopped with the failure
    /// recorded rather than stuck on the loading flag.
    pub fn abort_load(&mut self, url: &str, message: &str) -> bool {
        if !self.is_pending(url) {
            return false;
        }
        self.pending_url = None;
        self.source_url = None;
        self.is_loading = false;
        self.is_playing = false;
        self.last_error = Some(message.to_string());
        true
    }

    /// Records a failure without touching the rest of the state.
    pub fn record_failure(&mut self, message: &str) {
        self.last_error = Some(message.to_string());
    }

    /// The sink drained while playing: the track is over.
    pub fn mark_ended(&mut self) {
        self.is_playing = false;
        if self.duration > 0.0 {
            self.current_time = self.duration;
        }
    }

    /// Decides where a replay of a drained sink starts. A track resting at
    /// its natural end starts over; a position a seek moved after the end
    /// is kept.
    pub fn rewind_for_replay(&mut self) {
        if self.duration <= 0.0 || self.current_time >= self.duration {
            self.current_time = 0.0;
        }
    }

    /// Updates the playhead from the sink, clamped to the known duration.
    pub fn set_progress(&mut self, seconds: f64) {
        let seconds = if seconds.is_finite() { seconds.max(0.0) } else { 0.0 };
        self.current_time = if self.duration > 0.0 {
            seconds.min(self.duration)
        } else {
            seconds
        };
    }

    pub fn snapshot(&self) -> SessionSnapshot {
        SessionSnapshot {
            source_url: self.source_url.clone(),
            is_playing: self.is_playing,
            is_muted: self.is_muted,
            volume: self.volume,
            current_time: self.current_time,
            duration: self.duration,
            is_loading: self.is_loading,
            last_error: self.last_error.clone(),
        }
    }
}

/// Handle to the playback session worker thread.
///
/// Dropping the handle shuts the worker down and joins it.
pub struct SessionHandle {
    tx: Sender<SessionCommand>,
    worker: Option<thread::JoinHandle<()>>,
}

impl SessionHandle {
    /// Spawns the session worker. `on_event` is invoked on the worker thread
    /// for every snapshot and failure, so it must not block for long.
    pub fn spawn<F>(initial_volume: f32, on_event: F) -> Self
    where
        F: Fn(SessionEvent) + Send + 'static,
    {
        let (tx, rx) = mpsc::channel();
        let worker = thread::spawn(move || run_worker(rx, initial_volume, on_event));
        Self {
            tx,
            worker: Some(worker),
        }
    }

    pub fn send(&self, command: SessionCommand) {
        if self.tx.send(command).is_err() {
            log::warn!("Playback session worker is gone, dropping command");
        }
    }
}

impl Drop for SessionHandle {
    fn drop(&mut self) {
        let _ = self.tx.send(SessionCommand::Shutdown);
        if let Some(worker) = self.worker.take() {
            let _ = worker.join();
        }
    }
}

struct AudioOutput {
    // The stream must be kept alive for as long as its sink plays.
    _stream: OutputStream,
    sink: Sink,
}

struct Worker<F: Fn(SessionEvent)> {
    state: SessionState,
    output: Option<AudioOutput>,
    preferred_device: Option<String>,
    current_path: Option<PathBuf>,
    last_sent: Option<SessionSnapshot>,
    on_event: F,
}

fn run_worker<F: Fn(SessionEvent)>(
    rx: Receiver<SessionCommand>,
    initial_volume: f32,
    on_event: F,
) {
    let mut worker = Worker {
        state: SessionState::new(initial_volume),
        output: None,
        preferred_device: None,
        current_path: None,
        last_sent: None,
        on_event,
    };
    worker.push_state();

    loop {
        match rx.recv_timeout(PROGRESS_TICK) {
            Ok(SessionCommand::Shutdown) => break,
            Ok(command) => {
                worker.handle(command);
                worker.push_state();
            }
            Err(RecvTimeoutError::Timeout) => worker.refresh(),
            Err(RecvTimeoutError::Disconnected) => break,
        }
    }

    if let Some(output) = worker.output.take() {
        output.sink.stop();
    }
    log::info!("Playback session worker stopped");
}

impl<F: Fn(SessionEvent)> Worker<F> {
    fn handle(&mut self, command: SessionCommand) {
        match command {
            SessionCommand::Play => self.apply_play(),
            SessionCommand::Pause => {
                self.state.pause();
                self.sync_sink();
            }
            SessionCommand::TogglePlay => self.apply_toggle(),
            SessionCommand::SetVolume(volume) => {
                self.state.set_volume(volume);
                self.sync_volume();
            }
            SessionCommand::ToggleMute => {
                self.state.toggle_mute();
                self.sync_volume();
            }
            SessionCommand::SeekTo(seconds) => self.apply_seek(seconds),
            SessionCommand::BeginLoad { url } => self.apply_begin_load(&url),
            SessionCommand::FinishLoad { url, path } => self.apply_finish_load(&url, path),
            SessionCommand::AbortLoad { url, message } => self.abort(&url, &message),
            SessionCommand::SetOutputDevice { name } => self.apply_output_device(name),
            // Intercepted by the worker loop.
            SessionCommand::Shutdown => {}
        }
    }

    fn apply_play(&mut self) {
        match self.state.play() {
            Ok(()) => {
                self.requeue_if_drained();
                self.sync_sink();
            }
            Err(message) => self.emit_failure(message),
        }
    }

    fn apply_toggle(&mut self) {
        match self.state.toggle_play() {
            Ok(()) => {
                if self.state.is_playing() {
                    self.requeue_if_drained();
                }
                self.sync_sink();
            }
            Err(message) => self.emit_failure(message),
        }
    }

    fn apply_seek(&mut self, seconds: f64) {
        let clamped = self.state.seek_to(seconds);
        if let Some(output) = &self.output {
            if !output.sink.empty() {
                if let Err(error) = output.sink.try_seek(Duration::from_secs_f64(clamped)) {
                    let message = format!("failed to seek: {error}");
                    self.state.record_failure(&message);
                    self.emit_failure(&message);
                }
            }
        }
    }

    fn apply_begin_load(&mut self, url: &str) {
        if !self.state.begin_load(url) {
            return;
        }
        self.current_path = None;
        if let Some(output) = &self.output {
            output.sink.clear();
        }
    }

    fn apply_finish_load(&mut self, url: &str, path: PathBuf) {
        if !self.state.is_pending(url) {
            log::debug!("Ignoring superseded load of {url}");
            return;
        }

        let source = match decode_source(&path) {
            Ok(source) => source,
            Err(message) => {
                self.abort(url, &message);
                return;
            }
        };
        let duration = match probe_duration(&path) {
            duration if duration > 0.0 => duration,
            _ => source
                .total_duration()
                .map(|duration| duration.as_secs_f64())
                .unwrap_or_default(),
        };

        if self.output.is_none() {
            match self.open_output() {
                Ok(output) => self.output = Some(output),
                Err(message) => {
                    self.abort(url, &message);
                    return;
                }
            }
        }
        let Some(output) = &self.output else { return };

        self.state.finish_load(url, duration);
        output.sink.clear();
        output.sink.append(source);
        output.sink.set_volume(self.state.effective_volume());
        if self.state.is_playing() {
            output.sink.play();
        }
        self.current_path = Some(path);
        log::info!("Armed {url} ({duration:.0}s)");
    }

    fn abort(&mut self, url: &str, message: &str) {
        if self.state.abort_load(url, message) {
            self.emit_failure(message);
        }
    }

    fn apply_output_device(&mut self, name: Option<String>) {
        self.preferred_device = name;
        if self.output.is_none() {
            // Nothing is playing yet; the preference applies on the next load.
            return;
        }
        match self.open_output() {
            Ok(new_output) => {
                if let Some(old_output) = self.output.take() {
                    old_output.sink.stop();
                }
                self.output = Some(new_output);
                self.requeue_current();
            }
            Err(message) => {
                self.state.record_failure(&message);
                self.emit_failure(&message);
            }
        }
    }

    /// Opens a sink on the preferred device, falling back to the host default
    /// when the preferred device cannot be used.
    fn open_output(&self) -> Result<AudioOutput, String> {
        let (stream, handle) = match &self.preferred_device {
            Some(name) => match open_preferred_stream(name) {
                Ok(streams) => streams,
                Err(message) => {
                    self.emit_failure(&format!("{message}, falling back to the default output"));
                    open_default_stream()?
                }
            },
            None => open_default_stream()?,
        };
        let sink = Sink::try_new(&handle)
            .map_err(|error| format!("failed to create a playback sink: {error}"))?;
        sink.set_volume(self.state.effective_volume());
        Ok(AudioOutput {
            _stream: stream,
            sink,
        })
    }

    /// Decodes the current source again and restores position and intent.
    /// Used after an output device switch and to replay a finished track.
    fn requeue_current(&mut self) {
        let Some(path) = self.current_path.clone() else {
            return;
        };
        let Some(output) = &self.output else { return };
        match decode_source(&path) {
            Ok(source) => {
                output.sink.clear();
                output.sink.append(source);
                output.sink.set_volume(self.state.effective_volume());
                if self.state.current_time > 0.0 {
                    if let Err(error) =
                        output.sink.try_seek(Duration::from_secs_f64(self.state.current_time))
                    {
                        log::warn!("Failed to restore playback position: {error}");
                    }
                }
                if self.state.is_playing() {
                    output.sink.play();
                }
            }
            Err(message) => {
                self.state.record_failure(&message);
                self.emit_failure(&message);
            }
        }
    }

    /// Replays a track that ran to its end: play on a drained sink starts
    /// the current source over, unless a seek after the end moved the
    /// playhead first.
    fn requeue_if_drained(&mut self) {
        let drained = self
            .output
            .as_ref()
            .is_some_and(|output| output.sink.empty());
        if drained && self.current_path.is_some() && !self.state.is_loading {
            self.state.rewind_for_replay();
            self.requeue_current();
        }
    }

    fn sync_sink(&self) {
        if let Some(output) = &self.output {
            if self.state.is_playing() {
                output.sink.play();
            } else {
                output.sink.pause();
            }
        }
    }

    fn sync_volume(&self) {
        if let Some(output) = &self.output {
            output.sink.set_volume(self.state.effective_volume());
        }
    }

    /// Polls playback progress and detects the end of the current track.
    fn refresh(&mut self) {
        if let Some(output) = &self.output {
            if !self.state.is_loading && self.state.is_playing() {
                if output.sink.empty() {
                    self.state.mark_ended();
                } else {
                    self.state.set_progress(output.sink.get_pos().as_secs_f64());
                }
            }
        }
        self.push_state();
    }

    fn push_state(&mut self) {
        let snapshot = self.state.snapshot();
        if self.last_sent.as_ref() != Some(&snapshot) {
            self.last_sent = Some(snapshot.clone());
            (self.on_event)(SessionEvent::State(snapshot));
        }
    }

    fn emit_failure(&self, message: &str) {
        log::error!("Playback failure: {message}");
        (self.on_event)(SessionEvent::Failure {
            message: message.to_string(),
        });
    }
}

fn open_default_stream() -> Result<(OutputStream, OutputStreamHandle), String> {
    OutputStream::try_default()
        .map_err(|error| format!("failed to open the default audio output: {error}"))
}

fn open_preferred_stream(name: &str) -> Result<(OutputStream, OutputStreamHandle), String> {
    let device = device::get_device_by_name(name)
        .map_err(|error| format!("failed to look up output device '{name}': {error}"))?
        .ok_or_else(|| format!("output device '{name}' is not available"))?;
    OutputStream::try_from_device(&device)
        .map_err(|error| format!("failed to open output device '{name}': {error}"))
}

fn decode_source(path: &Path) -> Result<Decoder<BufReader<File>>, String> {
    let file =
        File::open(path).map_err(|error| format!("failed to open audio file: {error}"))?;
    Decoder::new(BufReader::new(file))
        .map_err(|error| format!("failed to decode audio file: {error}"))
}

/// Reads the duration from the file's metadata. Falls back to zero when the
/// file cannot be probed; the caller may still know better from the decoder.
fn probe_duration(path: &Path) -> f64 {
    match Probe::open(path).and_then(|probe| probe.read()) {
        Ok(tagged) => tagged.properties().duration().as_secs_f64(),
        Err(error) => {
            log::warn!("Failed to probe duration of {path:?}: {error}");
            0.0
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SONG_A: &str = "https://media.festa.party/tracks/a.mp3";
    const SONG_B: &str = "https://media.festa.party/tracks/b.mp3";

    fn loaded_state() -> SessionState {
        let mut state = SessionState::new(0.8);
        state.begin_load(SONG_A);
        state.finish_load(SONG_A, 200.0);
        state
    }

    #[test]
    fn volume_is_clamped_to_unit_range() {
        let mut state = SessionState::new(0.8);
        state.set_volume(1.5);
        assert_eq!(state.snapshot().volume, 1.0);
        state.set_volume(-0.2);
        assert_eq!(state.snapshot().volume, 0.0);
        state.set_volume(0.4);
        assert_eq!(state.snapshot().volume, 0.4);
    }

    #[test]
    fn non_finite_volume_is_ignored() {
        let mut state = SessionState::new(0.8);
        state.set_volume(f32::NAN);
        assert_eq!(state.snapshot().volume, 0.8);
        state.set_volume(f32::INFINITY);
        assert_eq!(state.snapshot().volume, 0.8);
    }

    #[test]
    fn mute_keeps_the_logical_volume() {
        let mut state = SessionState::new(0.8);
        state.toggle_mute();
        assert_eq!(state.effective_volume(), 0.0);
        assert_eq!(state.snapshot().volume, 0.8);
        state.toggle_mute();
        assert_eq!(state.effective_volume(), 0.8);
    }

    #[test]
    fn toggling_twice_restores_the_playing_state() {
        let mut state = loaded_state();
        for initially_playing in [false, true] {
            if initially_playing {
                state.play().unwrap();
            } else {
                state.pause();
            }
            state.toggle_play().unwrap();
            state.toggle_play().unwrap();
            assert_eq!(state.is_playing(), initially_playing);
        }
    }

    #[test]
    fn seek_is_clamped_to_the_duration() {
        let mut state = loaded_state();
        assert_eq!(state.seek_to(250.0), 200.0);
        assert_eq!(state.seek_to(-3.0), 0.0);
        assert_eq!(state.seek_to(42.5), 42.5);
        assert_eq!(state.seek_to(f64::NAN), 0.0);
    }

    #[test]
    fn seek_with_unknown_duration_stays_at_zero() {
        let mut state = SessionState::new(0.8);
        state.begin_load(SONG_A);
        state.finish_load(SONG_A, 0.0);
        assert_eq!(state.seek_to(30.0), 0.0);
    }

    #[test]
    fn play_without_a_source_records_a_failure() {
        let mut state = SessionState::new(0.8);
        assert!(state.play().is_err());
        assert!(!state.is_playing());
        assert!(state.snapshot().last_error.is_some());
    }

    #[test]
    fn play_clears_a_previous_failure() {
        let mut state = loaded_state();
        state.record_failure("the speakers are on fire");
        state.play().unwrap();
        assert!(state.snapshot().last_error.is_none());
    }

    #[test]
    fn changing_song_while_paused_stays_paused() {
        let mut state = loaded_state();
        assert!(!state.is_playing());
        assert!(state.begin_load(SONG_B));
        assert!(state.snapshot().is_loading);
        assert!(state.finish_load(SONG_B, 180.0));
        assert!(!state.is_playing());
        assert_eq!(state.snapshot().source_url.as_deref(), Some(SONG_B));
    }

    #[test]
    fn changing_song_while_playing_keeps_playing() {
        let mut state = loaded_state();
        state.play().unwrap();
        state.begin_load(SONG_B);
        assert!(state.is_playing());
        state.finish_load(SONG_B, 180.0);
        assert!(state.is_playing());
        assert_eq!(state.snapshot().current_time, 0.0);
    }

    #[test]
    fn reselecting_the_current_song_is_a_no_op() {
        let mut state = loaded_state();
        state.play().unwrap();
        let before = state.snapshot();
        assert!(!state.begin_load(SONG_A));
        assert_eq!(state.snapshot(), before);
    }

    #[test]
    fn superseded_loads_are_dropped() {
        let mut state = loaded_state();
        state.begin_load(SONG_B);
        state.begin_load(SONG_A);
        assert!(!state.finish_load(SONG_B, 180.0));
        assert!(state.is_pending(SONG_A));
        assert!(state.finish_load(SONG_A, 200.0));
        assert_eq!(state.snapshot().source_url.as_deref(), Some(SONG_A));
    }

    #[test]
    fn aborted_load_clears_the_loading_flag() {
        let mut state = loaded_state();
        state.play().unwrap();
        state.begin_load(SONG_B);
        assert!(state.abort_load(SONG_B, "connection reset"));
        let snapshot = state.snapshot();
        assert!(!snapshot.is_loading);
        assert!(!snapshot.is_playing);
        assert_eq!(snapshot.last_error.as_deref(), Some("connection reset"));
    }

    #[test]
    fn stale_abort_is_dropped() {
        let mut state = loaded_state();
        state.begin_load(SONG_B);
        state.begin_load(SONG_A);
        assert!(!state.abort_load(SONG_B, "connection reset"));
        assert!(state.snapshot().last_error.is_none());
    }

    #[test]
    fn ended_track_rests_at_its_duration() {
        let mut state = loaded_state();
        state.play().unwrap();
        state.set_progress(199.6);
        state.mark_ended();
        let snapshot = state.snapshot();
        assert!(!snapshot.is_playing);
        assert_eq!(snapshot.current_time, 200.0);
    }

    #[test]
    fn replay_of_an_ended_track_starts_over() {
        let mut state = loaded_state();
        state.play().unwrap();
        state.set_progress(199.6);
        state.mark_ended();
        state.play().unwrap();
        state.rewind_for_replay();
        assert_eq!(state.snapshot().current_time, 0.0);
    }

    #[test]
    fn seek_after_the_end_survives_the_replay() {
        let mut state = loaded_state();
        state.play().unwrap();
        state.mark_ended();
        assert_eq!(state.seek_to(42.5), 42.5);
        state.play().unwrap();
        state.rewind_for_replay();
        assert_eq!(state.snapshot().current_time, 42.5);
    }

    #[test]
    fn replay_with_unknown_duration_starts_over() {
        let mut state = SessionState::new(0.8);
        state.begin_load(SONG_A);
        state.finish_load(SONG_A, 0.0);
        state.play().unwrap();
        state.set_progress(37.0);
        state.mark_ended();
        state.rewind_for_replay();
        assert_eq!(state.snapshot().current_time, 0.0);
    }

    #[test]
    fn progress_never_exceeds_the_duration() {
        let mut state = loaded_state();
        state.set_progress(200.4);
        assert_eq!(state.snapshot().current_time, 200.0);
        state.set_progress(f64::NAN);
        assert_eq!(state.snapshot().current_time, 0.0);
    }
}
