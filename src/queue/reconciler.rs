use std::rc::Rc;

use crate::remote::{RemoteMusicClient, succeeded};
use crate::track::Track;

pub struct QueueReconciler<C> {
    client: Rc<C>,
    local_queue: Vec<Track>,
    search_limit: usize,
}

impl<C: RemoteMusicClient> QueueReconciler<C> {
    pub fn new(client: Rc<C>, search_limit: usize) -> Self {
        Self {
            client,
            local_queue: Vec::new(),
            search_limit,
        }
    }

    /// Fresh fetch of the currently playing track; `None` when nothing is
    /// playing or the call failed.
    pub fn current_track(&self) -> Option<Track> {
        match self.client.currently_playing() {
            Ok(playback) => playback.as_ref().and_then(Track::from_playback),
            Err(e) => {
                log::warn!("currently-playing fetch failed: {e}");
                None
            }
        }
    }

    /// The queue to display: the remote view when it has entries, otherwise
    /// a copy of the local queue. Never a concatenation of the two.
    pub fn queue(&self) -> Vec<Track> {
        let remote = match self.client.queue() {
            Ok(raw) => raw,
            Err(e) => {
                log::warn!("queue fetch failed, showing local queue: {e}");
                Vec::new()
            }
        };

        if remote.is_empty() {
            log::debug!("remote queue empty, {} local entries", self.local_queue.len());
            return self.local_queue.clone();
        }
        remote.iter().map(Track::from_raw).collect()
    }

    /// Enqueue `track`. Remote-addressable tracks go through the remote first
    /// and are only recorded locally when it accepts them; local-only tracks
    /// are always accepted.
    pub fn add_to_queue(&mut self, track: &Track) -> bool {
        if !track.id.is_empty() && !succeeded(self.client.enqueue(&track.id), "enqueue") {
            return false;
        }
        log::info!("queued '{}' ({})", track.title, track.id);
        self.local_queue.push(track.clone());
        true
    }

    /// Drop the first local entry equal to `track`. The remote offers no
    /// removal, so this never touches it.
    pub fn remove_from_queue(&mut self, track: &Track) -> bool {
        match self.local_queue.iter().position(|t| t == track) {
            Some(pos) => {
                self.local_queue.remove(pos);
                true
            }
            None => false,
        }
    }

    /// Search the remote catalogue. Blank queries return nothing without a
    /// remote call.
    pub fn search(&self, query: &str) -> Vec<Track> {
        let query = query.trim();
        if query.is_empty() {
            return Vec::new();
        }
        match self.client.search(query, self.search_limit) {
            Ok(raw) => raw.iter().map(Track::from_raw).collect(),
            Err(e) => {
                log::warn!("search for '{query}' failed: {e}");
                Vec::new()
            }
        }
    }

    pub fn local_queue(&self) -> &[Track] {
        &self.local_queue
    }

    pub fn clear_local_queue(&mut self) {
        self.local_queue.clear();
    }

    /// Evict the local head after a successful skip.
    ///
    /// This assumes the remote consumed the same track the local queue holds
    /// first, which does not hold once another device edits the queue.
    pub(crate) fn pop_local_head(&mut self) -> Option<Track> {
        if self.local_queue.is_empty() {
            None
        } else {
            Some(self.local_queue.remove(0))
        }
    }
}
