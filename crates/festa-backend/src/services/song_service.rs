use std::path::{Path, PathBuf};

use festa_audio::session::SessionCommand;
use futures_util::StreamExt;
use reqwest::Url;
use tokio::io::AsyncWriteExt;

/// Maps a song URL to the file name it is cached under. The mapping keeps
/// the final path segment and swaps anything that could upset a filesystem.
fn cached_file_name(url: &str) -> String {
    let tail = url.trim_end_matches('/').rsplit('/').next().unwrap_or(url);
    let name: String = tail
        .chars()
        .map(|letter| {
            if letter.is_ascii_alphanumeric() || matches!(letter, '.' | '-' | '_') {
                letter
            } else {
                '-'
            }
        })
        .collect();
    if name.is_empty() { "track".to_string() } else { name }
}

/// A source naming an existing file on disk plays in place; anything else
/// is treated as a remote URL to fetch.
fn local_source(url: &str) -> Option<PathBuf> {
    let path = Path::new(url);
    path.is_file().then(|| path.to_path_buf())
}

/// In-flight downloads stream into a `.part` sibling; a song only appears
/// under its final name once it is complete.
fn partial_path(save_path: &Path) -> PathBuf {
    let mut name = save_path.as_os_str().to_owned();
    name.push(".part");
    PathBuf::from(name)
}

/// Makes sure the song behind `url` is available on disk, then hands it to
/// the playback session. A url naming a local file plays in place; remote
/// songs are downloaded into the cache once. Download progress is streamed
/// to the frontend; failures abort the pending load with the partial file
/// removed.
pub async fn ensure_song_cached(context: super::AppContextHandle, url: String) {
    if let Some(path) = local_source(&url) {
        log::debug!("Song {url} is a local file, playing it in place");
        finish_load(&context, url, path).await;
        return;
    }

    let (request_client, cache_path) = {
        let state = context.state.read().await;
        (state.request_client.clone(), state.cache_path.clone())
    };

    let save_path = cache_path.join(cached_file_name(&url));
    if save_path.exists() {
        log::debug!("Song {url} is already cached at {save_path:?}");
        finish_load(&context, url, save_path).await;
        return;
    }

    let song_url = match Url::parse(&url) {
        Ok(parsed) => parsed,
        Err(error) => {
            abort_load(&context, url, format!("invalid song URL: {error}")).await;
            return;
        }
    };
    log::info!("Downloading song from {song_url}, saving to {save_path:?}");

    if let Some(parent) = save_path.parent() {
        if let Err(error) = tokio::fs::create_dir_all(parent).await {
            abort_load(
                &context,
                url,
                format!("failed to create the song cache: {error}"),
            )
            .await;
            return;
        }
    }

    let part_path = partial_path(&save_path);
    let output_file = match tokio::fs::File::options()
        .write(true)
        .create(true)
        .truncate(true)
        .open(part_path.clone())
        .await
    {
        Ok(file) => file,
        Err(error) => {
            abort_load(
                &context,
                url,
                format!("failed to create the cached song file: {error}"),
            )
            .await;
            return;
        }
    };

    let request = match request_client.get(song_url).build() {
        Ok(request) => request,
        Err(error) => {
            abort_load(&context, url, error.without_url().to_string()).await;
            return;
        }
    };

    tokio::spawn(async move {
        let mut output_file = output_file;
        let fetched = download_song(
            &context,
            &request_client,
            request,
            &mut output_file,
            &part_path,
            &save_path,
        )
        .await;
        match fetched {
            Ok(()) => finish_load(&context, url, save_path).await,
            Err(message) => {
                // Nothing else ever cleans up an orphaned partial.
                let _ = tokio::fs::remove_file(&part_path).await;
                abort_load(&context, url, message).await;
            }
        }
    });
}

async fn download_song(
    context: &super::AppContextHandle,
    request_client: &reqwest::Client,
    request: reqwest::Request,
    output_file: &mut tokio::fs::File,
    part_path: &Path,
    save_path: &Path,
) -> Result<(), String> {
    let response = request_client
        .execute(request)
        .await
        .and_then(|response| response.error_for_status())
        .map_err(|error| error.without_url().to_string())?;

    let start = tokio::time::Instant::now();
    let total_bytes = response.content_length().unwrap_or(0);
    let mut downloaded_bytes = 0u64;

    let mut body = response.bytes_stream();
    while let Some(chunk) = body.next().await {
        let current_chunk = chunk.map_err(|error| error.without_url().to_string())?;
        output_file
            .write_all(&current_chunk)
            .await
            .map_err(|error| format!("failed to write the cached song: {error}"))?;
        downloaded_bytes += current_chunk.len() as u64;

        let elapsed_secs = start.elapsed().as_secs_f64();
        let speed = if elapsed_secs > 0.0 {
            downloaded_bytes as f64 / elapsed_secs
        } else {
            0.0
        };
        let remaining_time = if speed > 0.0 {
            total_bytes.saturating_sub(downloaded_bytes) as f64 / speed
        } else {
            0.0
        };

        // notify frontend about current state
        context
            .send(festa_bridge::MessageFromBackend::DownloadProgressUpdate {
                speed,
                downloaded_bytes,
                total_bytes,
                remaining_time,
            })
            .await;
    }

    output_file
        .sync_all()
        .await
        .map_err(|error| format!("failed to flush the cached song: {error}"))?;

    tokio::fs::rename(part_path, save_path)
        .await
        .map_err(|error| format!("failed to finalize the cached song: {error}"))
}

async fn finish_load(context: &super::AppContextHandle, url: String, path: PathBuf) {
    let state = context.state.read().await;
    state.session.send(SessionCommand::FinishLoad { url, path });
}

async fn abort_load(context: &super::AppContextHandle, url: String, message: String) {
    log::error!("Failed to fetch {url}: {message}");
    let state = context.state.read().await;
    state.session.send(SessionCommand::AbortLoad { url, message });
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn file_name_keeps_the_last_path_segment() {
        assert_eq!(
            cached_file_name("https://media.festa.party/tracks/golden-hour.mp3"),
            "golden-hour.mp3"
        );
    }

    #[test]
    fn file_name_flattens_query_strings() {
        assert_eq!(
            cached_file_name("https://media.festa.party/tracks/song.mp3?token=a%20b"),
            "song.mp3-token-a-20b"
        );
    }

    #[test]
    fn degenerate_urls_still_produce_a_name() {
        assert_eq!(cached_file_name("/"), "track");
        assert_eq!(cached_file_name(""), "track");
    }

    #[test]
    fn bundled_tracks_map_to_distinct_files() {
        let mut names: Vec<String> = festa_bridge::playlist::SONGS
            .iter()
            .map(|song| cached_file_name(song.url))
            .collect();
        names.push(cached_file_name(festa_bridge::playlist::MESSAGE_TRACK.url));
        let total = names.len();
        names.sort();
        names.dedup();
        assert_eq!(names.len(), total);
    }

    #[test]
    fn local_files_are_played_in_place() {
        let manifest = concat!(env!("CARGO_MANIFEST_DIR"), "/Cargo.toml");
        assert_eq!(local_source(manifest), Some(PathBuf::from(manifest)));
        assert_eq!(
            local_source("https://media.festa.party/tracks/golden-hour.mp3"),
            None
        );
        assert_eq!(local_source("/nowhere/missing.mp3"), None);
    }

    #[test]
    fn downloads_stream_to_a_partial_file() {
        let save_path = PathBuf::from("cache").join(cached_file_name(
            "https://media.festa.party/tracks/golden-hour.mp3",
        ));
        assert_eq!(
            partial_path(&save_path),
            PathBuf::from("cache/golden-hour.mp3.part")
        );
    }

    #[test]
    fn partial_files_never_shadow_finished_songs() {
        let finished: Vec<PathBuf> = festa_bridge::playlist::SONGS
            .iter()
            .map(|song| PathBuf::from(cached_file_name(song.url)))
            .collect();
        for name in &finished {
            assert!(!finished.contains(&partial_path(name)));
        }
    }
}
