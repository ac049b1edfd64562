//! Transport controls that consult remote state before acting.

use std::rc::Rc;

use crate::queue::QueueReconciler;
use crate::remote::{RemoteMusicClient, succeeded};
use crate::track::Track;

/// Play/pause/skip front for the remote player.
///
/// Playback state is re-derived from the remote on every poll; the
/// `is_playing` flag here is advisory.
pub struct PlaybackFacade<C> {
    client: Rc<C>,
    is_playing: bool,
}

impl<C: RemoteMusicClient> PlaybackFacade<C> {
    pub fn new(client: Rc<C>) -> Self {
        Self {
            client,
            is_playing: false,
        }
    }

    /// Whether the last toggle call succeeded.
    pub fn is_playing(&self) -> bool {
        self.is_playing
    }

    /// Pause when the remote reports a playing track, resume otherwise.
    ///
    /// The flag records whether the issued call succeeded, not the resulting
    /// play state: a successful pause sets it to `true`, a failed one to
    /// `false`.
    pub fn toggle_play_pause(&mut self, queue: &QueueReconciler<C>) -> bool {
        let playing = queue.current_track().is_some_and(|t| t.is_playing);
        self.is_playing = if playing {
            succeeded(self.client.pause(), "pause")
        } else {
            succeeded(self.client.resume(), "resume")
        };
        self.is_playing
    }

    /// Skip forward. On success the local queue head is evicted too.
    pub fn next_track(&mut self, queue: &mut QueueReconciler<C>) -> bool {
        let ok = succeeded(self.client.next(), "next");
        if ok {
            if let Some(evicted) = queue.pop_local_head() {
                log::debug!("skip consumed local head '{}'", evicted.title);
            }
        }
        ok
    }

    pub fn previous_track(&mut self) -> bool {
        succeeded(self.client.previous(), "previous")
    }

    /// Start `track` directly. Local-only tracks cannot be addressed.
    pub fn play_track(&mut self, track: &Track) -> bool {
        if track.id.is_empty() {
            return false;
        }
        succeeded(self.client.play(&track.id), "play")
    }
}

#[cfg(test)]
mod tests;
