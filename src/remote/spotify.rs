//! Spotify Web API implementation of [`RemoteMusicClient`].
//!
//! Authentication is out of scope: the client is handed a bearer token
//! obtained elsewhere and reports [`RemoteError::MissingToken`] without one.

use std::time::Duration;

use serde::de::DeserializeOwned;
use serde_json::json;

use super::client::RemoteMusicClient;
use super::error::{RemoteError, RemoteResult};
use super::raw::{QueueResponse, RawPlayback, RawTrack, SearchResponse};
use crate::config::RemoteSettings;

const TRACK_URI_PREFIX: &str = "spotify:track:";

/// Blocking Spotify client backed by `ureq`.
pub struct SpotifyClient {
    agent: ureq::Agent,
    api_base: String,
    access_token: Option<String>,
}

impl SpotifyClient {
    pub fn new(settings: &RemoteSettings) -> Self {
        let agent = ureq::AgentBuilder::new()
            .timeout_connect(Duration::from_millis(settings.connect_timeout_ms))
            .timeout_read(Duration::from_millis(settings.read_timeout_ms))
            .timeout_write(Duration::from_millis(settings.read_timeout_ms))
            .build();
        Self {
            agent,
            api_base: settings.api_base.trim().trim_end_matches('/').to_string(),
            access_token: settings
                .access_token
                .as_deref()
                .map(str::trim)
                .filter(|t| !t.is_empty())
                .map(ToOwned::to_owned),
        }
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.api_base, path)
    }

    fn request(&self, method: &str, path: &str) -> RemoteResult<ureq::Request> {
        let token = self
            .access_token
            .as_deref()
            .ok_or(RemoteError::MissingToken)?;
        Ok(self
            .agent
            .request(method, &self.url(path))
            .set("Authorization", &format!("Bearer {token}")))
    }

    /// GET a JSON document. `Ok(None)` for `204 No Content`.
    fn get_json<T: DeserializeOwned>(
        &self,
        path: &str,
        query: &[(&str, &str)],
    ) -> RemoteResult<Option<T>> {
        let mut req = self.request("GET", path)?;
        for (k, v) in query {
            req = req.query(k, v);
        }
        let resp = req.call().map_err(map_ureq_error)?;
        if resp.status() == 204 {
            return Ok(None);
        }
        resp.into_json::<T>()
            .map(Some)
            .map_err(|e| RemoteError::Decode(e.to_string()))
    }

    /// Issue a command endpoint with an empty body.
    fn command(&self, method: &str, path: &str, query: &[(&str, &str)]) -> RemoteResult<()> {
        let mut req = self.request(method, path)?.set("Content-Length", "0");
        for (k, v) in query {
            req = req.query(k, v);
        }
        req.call().map_err(map_ureq_error)?;
        Ok(())
    }
}

/// Turn a bare track id into a track URI; URIs pass through.
pub(crate) fn track_uri(track_id: &str) -> String {
    if track_id.starts_with("spotify:") {
        track_id.to_string()
    } else {
        format!("{TRACK_URI_PREFIX}{track_id}")
    }
}

fn map_ureq_error(err: ureq::Error) -> RemoteError {
    match err {
        ureq::Error::Status(401, _) => RemoteError::Unauthorized,
        ureq::Error::Status(code, resp) => RemoteError::Status {
            code,
            message: resp.into_string().unwrap_or_default().trim().to_string(),
        },
        ureq::Error::Transport(t) => RemoteError::Transport(t.to_string()),
    }
}

impl RemoteMusicClient for SpotifyClient {
    fn currently_playing(&self) -> RemoteResult<Option<RawPlayback>> {
        self.get_json::<RawPlayback>("/me/player/currently-playing", &[])
    }

    fn queue(&self) -> RemoteResult<Vec<RawTrack>> {
        Ok(self
            .get_json::<QueueResponse>("/me/player/queue", &[])?
            .map(QueueResponse::into_tracks)
            .unwrap_or_default())
    }

    fn search(&self, query: &str, limit: usize) -> RemoteResult<Vec<RawTrack>> {
        let limit = limit.to_string();
        Ok(self
            .get_json::<SearchResponse>(
                "/search",
                &[("q", query), ("type", "track"), ("limit", limit.as_str())],
            )?
            .map(SearchResponse::into_tracks)
            .unwrap_or_default())
    }

    fn enqueue(&self, track_id: &str) -> RemoteResult<()> {
        let uri = track_uri(track_id);
        self.command("POST", "/me/player/queue", &[("uri", uri.as_str())])
    }

    fn play(&self, track_id: &str) -> RemoteResult<()> {
        let body = json!({ "uris": [track_uri(track_id)] });
        self.request("PUT", "/me/player/play")?
            .send_json(body)
            .map_err(map_ureq_error)?;
        Ok(())
    }

    fn pause(&self) -> RemoteResult<()> {
        self.command("PUT", "/me/player/pause", &[])
    }

    fn resume(&self) -> RemoteResult<()> {
        self.command("PUT", "/me/player/play", &[])
    }

    fn next(&self) -> RemoteResult<()> {
        self.command("POST", "/me/player/next", &[])
    }

    fn previous(&self) -> RemoteResult<()> {
        self.command("POST", "/me/player/previous", &[])
    }
}
