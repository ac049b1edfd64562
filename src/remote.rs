//! Remote streaming-service boundary.
//!
//! The rest of the crate only talks to the service through the
//! [`RemoteMusicClient`] trait. `SpotifyClient` is the production
//! implementation; tests use a scripted in-memory fake.

mod client;
mod error;
mod raw;
mod spotify;

#[cfg(test)]
pub mod fake;

pub use client::RemoteMusicClient;
pub(crate) use client::succeeded;
pub use raw::{RawPlayback, RawTrack};
pub use spotify::SpotifyClient;
