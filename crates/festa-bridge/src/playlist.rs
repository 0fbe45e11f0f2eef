/// A track in the built-in celebration playlist.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Song {
    pub title: &'static str,
    pub artist: &'static str,
    /// Remote location of the track. Also the key under which the backend
    /// caches the downloaded file.
    pub url: &'static str,
}

/// Party tracks bundled with the experience, in menu order. The first entry
/// is the one armed at startup when autoplay is enabled.
pub const SONGS: &[Song] = &[
    Song {
        title: "Confetti Waltz",
        artist: "The Paper Lanterns",
        url: "https://media.festa.party/tracks/confetti-waltz.mp3",
    },
    Song {
        title: "Golden Hour",
        artist: "Mellow Fields",
        url: "https://media.festa.party/tracks/golden-hour.mp3",
    },
    Song {
        title: "One More Candle",
        artist: "The Velvet Owls",
        url: "https://media.festa.party/tracks/one-more-candle.mp3",
    },
    Song {
        title: "Sparkler Nights",
        artist: "Neon Picnic",
        url: "https://media.festa.party/tracks/sparkler-nights.mp3",
    },
    Song {
        title: "Dance Till Dawn",
        artist: "Disco Alibi",
        url: "https://media.festa.party/tracks/dance-till-dawn.mp3",
    },
];

/// The recorded birthday message that plays behind the video stage. Kept out
/// of [`SONGS`] so it never shows up in the party room's track menu.
pub const MESSAGE_TRACK: Song = Song {
    title: "A Message for You",
    artist: "Everyone who loves you",
    url: "https://media.festa.party/tracks/a-message-for-you.mp3",
};

/// Looks a party track up by its position in [`SONGS`].
pub fn song(index: usize) -> Option<&'static Song> {
    SONGS.get(index)
}

/// Reverse lookup from a session's source URL to its playlist position.
/// The message track has no position and yields `None`.
pub fn index_for_url(url: &str) -> Option<usize> {
    SONGS.iter().position(|song| song.url == url)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_song_maps_back_to_its_index() {
        for (index, song) in SONGS.iter().enumerate() {
            assert_eq!(index_for_url(song.url), Some(index));
        }
    }

    #[test]
    fn message_track_is_not_part_of_the_party_playlist() {
        assert_eq!(index_for_url(MESSAGE_TRACK.url), None);
    }

    #[test]
    fn out_of_range_index_yields_none() {
        assert!(song(SONGS.len()).is_none());
    }
}
