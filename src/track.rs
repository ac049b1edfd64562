//! The normalized `Track` entity.
//!
//! Tracks are built either from remote records or from explicit fields and
//! never fail to construct: anything absent degrades to an empty string,
//! zero or `false`.

use std::time::SystemTime;

use crate::remote::{RawPlayback, RawTrack};

#[derive(Debug, Clone)]
pub struct Track {
    /// Remote identifier; empty when the track is not remote-addressable.
    pub id: String,
    pub title: String,
    pub artist: String,
    pub album: String,
    /// Only meaningful on the currently-playing instance.
    pub is_playing: bool,
    pub progress_ms: i64,
    /// Zero when unknown.
    pub duration_ms: i64,
    pub image_url: Option<String>,
    /// Local wall clock at construction.
    pub added_at: SystemTime,
}

impl PartialEq for Track {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
            && self.title == other.title
            && self.artist == other.artist
            && self.album == other.album
            && self.is_playing == other.is_playing
            && self.progress_ms == other.progress_ms
            && self.duration_ms == other.duration_ms
            && self.image_url == other.image_url
    }
}

impl Track {
    /// Build a track from explicit fields. Used for local-only entries.
    pub fn manual(title: &str, artist: &str, album: &str, id: Option<&str>) -> Self {
        Self {
            id: id.unwrap_or_default().to_string(),
            title: title.to_string(),
            artist: artist.to_string(),
            album: album.to_string(),
            is_playing: false,
            progress_ms: 0,
            duration_ms: 0,
            image_url: None,
            added_at: SystemTime::now(),
        }
    }

    /// Normalize a queue or search record.
    pub fn from_raw(raw: &RawTrack) -> Self {
        let title = raw
            .name
            .as_deref()
            .filter(|s| !s.is_empty())
            .or(raw.title.as_deref())
            .unwrap_or_default()
            .to_string();

        let artist = raw
            .artists
            .as_deref()
            .unwrap_or_default()
            .iter()
            .filter_map(|a| a.name.as_deref())
            .collect::<Vec<_>>()
            .join(", ");

        let album = raw.album.as_ref();
        let image_url = album
            .and_then(|a| a.images.as_deref())
            .and_then(|images| images.first())
            .and_then(|img| img.url.clone())
            .filter(|url| !url.is_empty());

        Self {
            id: raw.id.clone().unwrap_or_default(),
            title,
            artist,
            album: album.and_then(|a| a.name.clone()).unwrap_or_default(),
            is_playing: false,
            progress_ms: 0,
            duration_ms: raw.duration_ms.unwrap_or(0),
            image_url,
            added_at: SystemTime::now(),
        }
    }

    /// Normalize a currently-playing envelope. `None` when it carries no item.
    pub fn from_playback(playback: &RawPlayback) -> Option<Self> {
        let item = playback.item.as_ref()?;
        let mut track = Self::from_raw(item);
        track.is_playing = playback.is_playing.unwrap_or(false);
        track.progress_ms = playback.progress_ms.unwrap_or(0);
        Some(track)
    }

    /// `"title - artist"`, or just the title when there is no artist.
    pub fn display_line(&self, sep: &str) -> String {
        match self.artist.trim() {
            "" => self.title.clone(),
            artist => format!("{}{}{}", self.title, sep, artist),
        }
    }

    /// Playback position as a fraction of the duration, clamped to `[0, 1]`.
    pub fn progress_ratio(&self) -> Option<f64> {
        if self.duration_ms <= 0 {
            return None;
        }
        Some((self.progress_ms as f64 / self.duration_ms as f64).clamp(0.0, 1.0))
    }

    /// Whole percent of the track played, `0` when the duration is unknown.
    pub fn progress_percent(&self) -> u16 {
        if self.duration_ms <= 0 {
            return 0;
        }
        let progress = i128::from(self.progress_ms.clamp(0, self.duration_ms));
        (progress * 100 / i128::from(self.duration_ms)) as u16
    }

    /// `"MM:SS / MM:SS"` when both progress and duration are known.
    pub fn duration_text(&self) -> String {
        if self.progress_ms > 0 && self.duration_ms > 0 {
            format!(
                "{} / {}",
                format_mmss(self.progress_ms),
                format_mmss(self.duration_ms)
            )
        } else {
            "--:-- / --:--".to_string()
        }
    }
}

/// Format milliseconds as `MM:SS`. Negative values render as `00:00`.
pub fn format_mmss(ms: i64) -> String {
    let secs = ms.max(0) / 1000;
    format!("{:02}:{:02}", secs / 60, secs % 60)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_raw_defaults_every_missing_field() {
        let t = Track::from_raw(&RawTrack::default());
        assert_eq!(t.id, "");
        assert_eq!(t.title, "");
        assert_eq!(t.artist, "");
        assert_eq!(t.album, "");
        assert!(!t.is_playing);
        assert_eq!(t.progress_ms, 0);
        assert_eq!(t.duration_ms, 0);
        assert!(t.image_url.is_none());
    }

    #[test]
    fn from_raw_joins_artists_and_takes_first_image() {
        let raw: RawTrack = serde_json::from_str(
            r#"{
                "id": "x",
                "name": "Song",
                "artists": [{ "name": "A" }, { "name": null }, { "name": "B" }],
                "album": {
                    "name": "LP",
                    "images": [{ "url": "https://img/1" }, { "url": "https://img/2" }]
                },
                "duration_ms": -5
            }"#,
        )
        .unwrap();
        let t = Track::from_raw(&raw);
        assert_eq!(t.artist, "A, B");
        assert_eq!(t.album, "LP");
        assert_eq!(t.image_url.as_deref(), Some("https://img/1"));
        // negative durations are preserved as given
        assert_eq!(t.duration_ms, -5);
    }

    #[test]
    fn from_raw_falls_back_to_title_key() {
        let raw = RawTrack {
            title: Some("Alt".into()),
            ..RawTrack::default()
        };
        assert_eq!(Track::from_raw(&raw).title, "Alt");
    }

    #[test]
    fn from_playback_without_item_is_none() {
        let p = RawPlayback {
            is_playing: Some(true),
            progress_ms: Some(10),
            item: None,
        };
        assert!(Track::from_playback(&p).is_none());
    }

    #[test]
    fn playing_track_reports_fifteen_percent() {
        let p = RawPlayback {
            is_playing: Some(true),
            progress_ms: Some(30_000),
            item: Some(RawTrack {
                duration_ms: Some(200_000),
                ..crate::remote::fake::raw_track("t1", "Song A", "Artist A")
            }),
        };
        let t = Track::from_playback(&p).unwrap();
        assert_eq!(t.id, "t1");
        assert_eq!(t.title, "Song A");
        assert_eq!(t.artist, "Artist A");
        assert!(t.is_playing);
        assert_eq!(t.progress_ms, 30_000);
        assert_eq!(t.duration_ms, 200_000);
        assert_eq!(t.progress_percent(), 15);
        assert_eq!(t.duration_text(), "00:30 / 03:20");
    }

    #[test]
    fn unknown_duration_has_no_ratio() {
        let t = Track::manual("Song", "", "", None);
        assert!(t.progress_ratio().is_none());
        assert_eq!(t.progress_percent(), 0);
        assert_eq!(t.duration_text(), "--:-- / --:--");
    }

    #[test]
    fn huge_durations_do_not_overflow_percent() {
        let mut t = Track::manual("Long", "", "", None);
        t.duration_ms = i64::MAX;
        t.progress_ms = i64::MAX / 2;
        assert_eq!(t.progress_percent(), 49);
        t.progress_ms = i64::MAX;
        assert_eq!(t.progress_percent(), 100);
    }

    #[test]
    fn display_line_omits_blank_artist() {
        assert_eq!(
            Track::manual("Song", "Artist", "", None).display_line(" - "),
            "Song - Artist"
        );
        assert_eq!(Track::manual("Song", "  ", "", None).display_line(" - "), "Song");
    }

    #[test]
    fn equality_ignores_construction_time() {
        let a = Track::manual("Song", "Artist", "LP", Some("id"));
        std::thread::sleep(std::time::Duration::from_millis(2));
        let b = Track::manual("Song", "Artist", "LP", Some("id"));
        assert_eq!(a, b);
    }
}
