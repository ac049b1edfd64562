//! Loosely-typed records as the remote API returns them.
//!
//! Every field is optional and read leniently: a missing, `null` or wrongly
//! typed value decodes to `None`, and a malformed list entry is skipped, so
//! one bad field never costs the rest of the response. Normalization into
//! `Track` applies the defaults.

use serde::de::DeserializeOwned;
use serde::{Deserialize, Deserializer};
use serde_json::Value;

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct RawArtist {
    #[serde(deserialize_with = "text")]
    pub name: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct RawImage {
    #[serde(deserialize_with = "text")]
    pub url: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct RawAlbum {
    #[serde(deserialize_with = "text")]
    pub name: Option<String>,
    #[serde(deserialize_with = "list")]
    pub images: Option<Vec<RawImage>>,
}

/// A track record from the queue, search or currently-playing endpoints.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct RawTrack {
    #[serde(deserialize_with = "text")]
    pub id: Option<String>,
    #[serde(deserialize_with = "text")]
    pub name: Option<String>,
    /// Some payloads carry the display name under `title` instead of `name`.
    #[serde(deserialize_with = "text")]
    pub title: Option<String>,
    #[serde(deserialize_with = "list")]
    pub artists: Option<Vec<RawArtist>>,
    #[serde(deserialize_with = "record")]
    pub album: Option<RawAlbum>,
    #[serde(deserialize_with = "millis")]
    pub duration_ms: Option<i64>,
}

/// The currently-playing envelope.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct RawPlayback {
    #[serde(deserialize_with = "flag")]
    pub is_playing: Option<bool>,
    #[serde(deserialize_with = "millis")]
    pub progress_ms: Option<i64>,
    #[serde(deserialize_with = "record")]
    pub item: Option<RawTrack>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub(crate) struct QueueResponse {
    #[serde(deserialize_with = "list")]
    pub queue: Option<Vec<RawTrack>>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub(crate) struct TrackPage {
    #[serde(deserialize_with = "list")]
    pub items: Option<Vec<RawTrack>>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub(crate) struct SearchResponse {
    #[serde(deserialize_with = "record")]
    pub tracks: Option<TrackPage>,
}

impl QueueResponse {
    pub fn into_tracks(self) -> Vec<RawTrack> {
        self.queue.unwrap_or_default()
    }
}

impl SearchResponse {
    pub fn into_tracks(self) -> Vec<RawTrack> {
        self.tracks.and_then(|page| page.items).unwrap_or_default()
    }
}

fn text<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Option<String>, D::Error> {
    let value = Value::deserialize(deserializer)?;
    Ok(value.as_str().map(ToOwned::to_owned))
}

fn flag<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Option<bool>, D::Error> {
    let value = Value::deserialize(deserializer)?;
    Ok(value.as_bool())
}

/// Integer milliseconds; numeric strings and floats are accepted too.
fn millis<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Option<i64>, D::Error> {
    let value = Value::deserialize(deserializer)?;
    Ok(value
        .as_i64()
        .or_else(|| value.as_f64().map(|ms| ms as i64))
        .or_else(|| value.as_str().and_then(|s| s.trim().parse().ok())))
}

fn record<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned,
{
    let value = Value::deserialize(deserializer)?;
    if !value.is_object() {
        return Ok(None);
    }
    Ok(serde_json::from_value(value).ok())
}

/// A JSON array; entries that are not usable records are dropped.
fn list<'de, D, T>(deserializer: D) -> Result<Option<Vec<T>>, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned,
{
    match Value::deserialize(deserializer)? {
        Value::Array(items) => Ok(Some(
            items
                .into_iter()
                .filter(Value::is_object)
                .filter_map(|item| serde_json::from_value(item).ok())
                .collect(),
        )),
        _ => Ok(None),
    }
}
