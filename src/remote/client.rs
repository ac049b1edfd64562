use super::error::RemoteResult;
use super::raw::{RawPlayback, RawTrack};

/// Authenticated calls against the remote streaming account.
///
/// Every call is blocking. Implementations report failures through
/// [`RemoteResult`]; converting a failure into a neutral value is the
/// caller's decision.
pub trait RemoteMusicClient {
    /// Current playback state, `Ok(None)` when nothing is playing.
    fn currently_playing(&self) -> RemoteResult<Option<RawPlayback>>;

    /// Best-effort view of the upcoming queue. May be empty because of API
    /// limitations rather than because the queue is empty.
    fn queue(&self) -> RemoteResult<Vec<RawTrack>>;

    fn search(&self, query: &str, limit: usize) -> RemoteResult<Vec<RawTrack>>;

    fn enqueue(&self, track_id: &str) -> RemoteResult<()>;

    fn play(&self, track_id: &str) -> RemoteResult<()>;

    fn pause(&self) -> RemoteResult<()>;

    fn resume(&self) -> RemoteResult<()>;

    fn next(&self) -> RemoteResult<()>;

    fn previous(&self) -> RemoteResult<()>;

    /// The service cannot remove queued items, so the default reports
    /// [`RemoteError::Unsupported`](super::error::RemoteError::Unsupported).
    fn delete_from_queue(&self, _track_id: &str) -> RemoteResult<()> {
        Err(super::error::RemoteError::Unsupported)
    }
}

/// Collapse a unit result into a success flag, logging the failure.
pub(crate) fn succeeded(result: RemoteResult<()>, action: &str) -> bool {
    match result {
        Ok(()) => true,
        Err(e) => {
            log::warn!("{action} failed: {e}");
            false
        }
    }
}
