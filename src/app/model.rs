//! Application model types: `App` and `Screen`.
//!
//! `App` owns the reconciler and the playback facade and keeps the last
//! values it rendered so each poll can decide whether a redraw is needed.

use std::rc::Rc;

use ratatui::widgets::ListState;

use crate::playback::PlaybackFacade;
use crate::queue::{QueueReconciler, queues_equal};
use crate::remote::RemoteMusicClient;
use crate::track::Track;

/// Which screen is currently shown.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub enum Screen {
    /// Now playing + queue.
    #[default]
    Main,
    /// Search input + results.
    Search,
}

/// The main application model.
pub struct App<C> {
    pub reconciler: QueueReconciler<C>,
    pub playback: PlaybackFacade<C>,

    pub now_playing: Option<Track>,
    pub queue: Vec<Track>,
    pub queue_selected: usize,
    /// Selection and scroll offset of the rendered queue list.
    pub queue_view: ListState,

    pub screen: Screen,
    pub search_query: String,
    pub search_results: Vec<Track>,
    pub result_selected: usize,
    pub results_view: ListState,
    results_stale: bool,

    pub notification: Option<String>,
    /// Set whenever something visible changed since the last draw.
    pub dirty: bool,
}

/// Whether a now-playing poll produced something worth redrawing.
fn now_playing_changed(old: Option<&Track>, new: Option<&Track>) -> bool {
    match (old, new) {
        (None, None) => false,
        (Some(a), Some(b)) => {
            a.id != b.id
                || a.title != b.title
                || a.artist != b.artist
                || a.is_playing != b.is_playing
                || a.progress_ms != b.progress_ms
                || a.duration_ms != b.duration_ms
        }
        _ => true,
    }
}

/// Step `current` by one within `len` entries, wrapping at both ends.
fn wrap_step(current: usize, len: usize, forward: bool) -> usize {
    if len == 0 {
        return 0;
    }
    match (forward, current.min(len - 1)) {
        (true, c) => (c + 1) % len,
        (false, 0) => len - 1,
        (false, c) => c - 1,
    }
}

impl<C: RemoteMusicClient> App<C> {
    /// Create a new `App` sharing one long-lived `client`.
    pub fn new(client: Rc<C>, search_limit: usize) -> Self {
        Self {
            reconciler: QueueReconciler::new(Rc::clone(&client), search_limit),
            playback: PlaybackFacade::new(client),
            now_playing: None,
            queue: Vec::new(),
            queue_selected: 0,
            queue_view: ListState::default(),
            screen: Screen::Main,
            search_query: String::new(),
            search_results: Vec::new(),
            result_selected: 0,
            results_view: ListState::default(),
            results_stale: false,
            notification: None,
            dirty: true,
        }
    }

    pub fn mark_dirty(&mut self) {
        self.dirty = true;
    }

    pub fn clear_dirty(&mut self) {
        self.dirty = false;
    }

    /// Push the selected indices into the list states. The scroll offsets
    /// are left to the renderer so a redraw keeps the viewport in place.
    fn sync_views(&mut self) {
        self.queue_view
            .select((!self.queue.is_empty()).then_some(self.queue_selected));
        self.results_view
            .select((!self.search_results.is_empty()).then_some(self.result_selected));
    }

    /// Show a one-line message in the status area until the next one.
    pub fn notify(&mut self, msg: impl Into<String>) {
        self.notification = Some(msg.into());
        self.mark_dirty();
    }

    /// Poll the remote for the current track. Returns whether it changed.
    pub fn refresh_now_playing(&mut self) -> bool {
        let latest = self.reconciler.current_track();
        if !now_playing_changed(self.now_playing.as_ref(), latest.as_ref()) {
            return false;
        }
        self.now_playing = latest;
        self.mark_dirty();
        true
    }

    /// Poll the queue. An equivalent queue leaves the model untouched so
    /// the list keeps its selection and scroll position.
    pub fn refresh_queue(&mut self) -> bool {
        let latest = self.reconciler.queue();
        if queues_equal(&self.queue, &latest) {
            return false;
        }
        log::debug!("queue changed: {} -> {} entries", self.queue.len(), latest.len());
        self.queue = latest;
        self.queue_selected = self.queue_selected.min(self.queue.len().saturating_sub(1));
        self.sync_views();
        self.mark_dirty();
        true
    }

    pub fn selected_queued(&self) -> Option<&Track> {
        self.queue.get(self.queue_selected)
    }

    pub fn selected_result(&self) -> Option<&Track> {
        self.search_results.get(self.result_selected)
    }

    pub fn next_queued(&mut self) {
        self.queue_selected = wrap_step(self.queue_selected, self.queue.len(), true);
        self.sync_views();
        self.mark_dirty();
    }

    pub fn prev_queued(&mut self) {
        self.queue_selected = wrap_step(self.queue_selected, self.queue.len(), false);
        self.sync_views();
        self.mark_dirty();
    }

    pub fn next_result(&mut self) {
        self.result_selected = wrap_step(self.result_selected, self.search_results.len(), true);
        self.sync_views();
        self.mark_dirty();
    }

    pub fn prev_result(&mut self) {
        self.result_selected = wrap_step(self.result_selected, self.search_results.len(), false);
        self.sync_views();
        self.mark_dirty();
    }

    pub fn open_search(&mut self) {
        self.screen = Screen::Search;
        self.mark_dirty();
    }

    /// Leave the search screen and pick up any queue change it caused.
    pub fn close_search(&mut self) {
        self.screen = Screen::Main;
        self.mark_dirty();
        self.refresh_queue();
    }

    pub fn push_search_char(&mut self, c: char) {
        self.search_query.push(c);
        self.results_stale = true;
        self.mark_dirty();
    }

    pub fn pop_search_char(&mut self) {
        self.search_query.pop();
        self.results_stale = true;
        self.mark_dirty();
    }

    /// Run the search for the current input. Blank input is ignored.
    pub fn submit_search(&mut self) -> bool {
        let query = self.search_query.trim().to_string();
        if query.is_empty() {
            return false;
        }
        self.search_results = self.reconciler.search(&query);
        self.result_selected = 0;
        self.results_view = ListState::default();
        self.sync_views();
        self.results_stale = false;
        if self.search_results.is_empty() {
            self.notify(format!("No results for '{query}'"));
        }
        self.mark_dirty();
        true
    }

    /// Enter on the search screen: search when the input changed since the
    /// last search, otherwise enqueue the highlighted result.
    pub fn activate_search(&mut self) {
        if self.results_stale || self.search_results.is_empty() {
            self.submit_search();
        } else {
            self.enqueue_selected_result();
        }
    }

    /// Enqueue the highlighted result and go back to the main screen.
    pub fn enqueue_selected_result(&mut self) -> bool {
        let Some(track) = self.selected_result().cloned() else {
            return false;
        };

        if !self.reconciler.add_to_queue(&track) {
            self.notify(format!("Could not add '{}' to the queue", track.title));
            return false;
        }

        self.notify(format!("'{}' added to the queue", track.title));
        self.search_query.clear();
        self.search_results.clear();
        self.result_selected = 0;
        self.results_view = ListState::default();
        self.results_stale = false;
        self.close_search();
        true
    }

    /// Remove the highlighted queue entry from the local queue.
    pub fn remove_selected_queued(&mut self) -> bool {
        let Some(track) = self.selected_queued().cloned() else {
            return false;
        };
        if !self.reconciler.remove_from_queue(&track) {
            self.notify(format!("'{}' is not in the local queue", track.title));
            return false;
        }
        if self.refresh_queue() {
            self.notify(format!("Removed '{}'", track.title));
        } else {
            // The remote queue is on screen and still lists the track.
            self.notify(format!(
                "Removed local copy of '{}'; the remote queue still has it",
                track.title
            ));
        }
        true
    }

    /// Forget every locally tracked enqueue.
    pub fn clear_local_queue(&mut self) {
        let n = self.reconciler.local_queue().len();
        self.reconciler.clear_local_queue();
        self.notify(format!("Cleared {n} local queue entries"));
        self.refresh_queue();
    }

    pub fn play_selected_queued(&mut self) -> bool {
        let Some(track) = self.selected_queued().cloned() else {
            return false;
        };
        let ok = self.playback.play_track(&track);
        if !ok {
            self.notify(format!("Could not play '{}'", track.title));
        }
        self.refresh_now_playing();
        ok
    }

    pub fn toggle_play_pause(&mut self) -> bool {
        let ok = self.playback.toggle_play_pause(&self.reconciler);
        if !ok {
            self.notify("Play/pause failed");
        }
        self.refresh_now_playing();
        ok
    }

    pub fn next_track(&mut self) -> bool {
        let ok = self.playback.next_track(&mut self.reconciler);
        if !ok {
            self.notify("Skip failed");
        }
        self.refresh_now_playing();
        self.refresh_queue();
        ok
    }

    pub fn previous_track(&mut self) -> bool {
        let ok = self.playback.previous_track();
        if !ok {
            self.notify("Previous failed");
        }
        self.refresh_now_playing();
        ok
    }
}
