use festa_audio::session::{SessionCommand, SessionSnapshot};
use festa_bridge::playback::PlaybackSession;

use crate::services::song_service;

/// Converts a session snapshot into its bridge representation.
pub(crate) fn to_bridge_session(snapshot: SessionSnapshot) -> PlaybackSession {
    PlaybackSession {
        source_url: snapshot.source_url,
        is_playing: snapshot.is_playing,
        is_muted: snapshot.is_muted,
        volume: snapshot.volume,
        current_time: snapshot.current_time,
        duration: snapshot.duration,
        is_loading: snapshot.is_loading,
        last_error: snapshot.last_error,
    }
}

async fn send_to_session(context: &super::AppContextHandle, command: SessionCommand) {
    let state = context.state.read().await;
    state.session.send(command);
}

pub async fn handle_play(context: super::AppContextHandle) {
    send_to_session(&context, SessionCommand::Play).await;
}

pub async fn handle_pause(context: super::AppContextHandle) {
    send_to_session(&context, SessionCommand::Pause).await;
}

pub async fn handle_toggle_play(context: super::AppContextHandle) {
    send_to_session(&context, SessionCommand::TogglePlay).await;
}

pub async fn handle_set_volume(context: super::AppContextHandle, volume: f32) {
    send_to_session(&context, SessionCommand::SetVolume(volume)).await;
}

pub async fn handle_toggle_mute(context: super::AppContextHandle) {
    send_to_session(&context, SessionCommand::ToggleMute).await;
}

pub async fn handle_seek_to(context: super::AppContextHandle, seconds: f64) {
    send_to_session(&context, SessionCommand::SeekTo(seconds)).await;
}

/// Handles a song change: the session drops its current source right away
/// and the song service produces (or reuses) the cached file behind `url`.
pub async fn handle_change_song(context: super::AppContextHandle, url: String) {
    send_to_session(&context, SessionCommand::BeginLoad { url: url.clone() }).await;
    song_service::ensure_song_cached(context, url).await;
}
