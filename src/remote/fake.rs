//! Scripted in-memory [`RemoteMusicClient`] for tests.

use std::cell::{Cell, RefCell};

use super::client::RemoteMusicClient;
use super::error::{RemoteError, RemoteResult};
use super::raw::{RawAlbum, RawArtist, RawPlayback, RawTrack};

/// Records every call and replays whatever the test configured.
#[derive(Default)]
pub struct FakeRemote {
    pub playback: RefCell<Option<RawPlayback>>,
    pub queue: RefCell<Vec<RawTrack>>,
    pub search_results: RefCell<Vec<RawTrack>>,
    /// When set, every call fails with a transport error.
    pub offline: Cell<bool>,
    /// When set, transport commands (enqueue, play, pause...) fail.
    pub reject_commands: Cell<bool>,
    pub calls: RefCell<Vec<String>>,
}

impl FakeRemote {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn calls(&self) -> Vec<String> {
        self.calls.borrow().clone()
    }

    pub fn set_playing(&self, item: RawTrack, is_playing: bool, progress_ms: i64) {
        *self.playback.borrow_mut() = Some(RawPlayback {
            is_playing: Some(is_playing),
            progress_ms: Some(progress_ms),
            item: Some(item),
        });
    }

    fn record(&self, call: impl Into<String>) -> RemoteResult<()> {
        self.calls.borrow_mut().push(call.into());
        if self.offline.get() {
            return Err(RemoteError::Transport("offline".into()));
        }
        Ok(())
    }

    fn command(&self, call: impl Into<String>) -> RemoteResult<()> {
        self.record(call)?;
        if self.reject_commands.get() {
            return Err(RemoteError::Status {
                code: 404,
                message: "no active device".into(),
            });
        }
        Ok(())
    }
}

/// Build a raw track record with a single artist.
pub fn raw_track(id: &str, name: &str, artist: &str) -> RawTrack {
    RawTrack {
        id: Some(id.into()),
        name: Some(name.into()),
        artists: Some(vec![RawArtist {
            name: Some(artist.into()),
        }]),
        album: Some(RawAlbum {
            name: Some(format!("{name} (album)")),
            images: None,
        }),
        ..RawTrack::default()
    }
}

impl RemoteMusicClient for FakeRemote {
    fn currently_playing(&self) -> RemoteResult<Option<RawPlayback>> {
        self.record("currently_playing")?;
        Ok(self.playback.borrow().clone())
    }

    fn queue(&self) -> RemoteResult<Vec<RawTrack>> {
        self.record("queue")?;
        Ok(self.queue.borrow().clone())
    }

    fn search(&self, query: &str, limit: usize) -> RemoteResult<Vec<RawTrack>> {
        self.record(format!("search:{query}:{limit}"))?;
        Ok(self
            .search_results
            .borrow()
            .iter()
            .take(limit)
            .cloned()
            .collect())
    }

    fn enqueue(&self, track_id: &str) -> RemoteResult<()> {
        self.command(format!("enqueue:{track_id}"))
    }

    fn play(&self, track_id: &str) -> RemoteResult<()> {
        self.command(format!("play:{track_id}"))
    }

    fn pause(&self) -> RemoteResult<()> {
        self.command("pause")
    }

    fn resume(&self) -> RemoteResult<()> {
        self.command("resume")
    }

    fn next(&self) -> RemoteResult<()> {
        self.command("next")
    }

    fn previous(&self) -> RemoteResult<()> {
        self.command("previous")
    }
}
