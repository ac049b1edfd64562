use thiserror::Error;

/// Failures reported by a [`RemoteMusicClient`](super::RemoteMusicClient).
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RemoteError {
    /// No access token was configured.
    #[error("no access token configured (set remote.access_token)")]
    MissingToken,

    /// The service rejected the token.
    #[error("access token rejected by the remote service")]
    Unauthorized,

    /// Network-level failure (DNS, connect, timeout, TLS).
    #[error("transport error: {0}")]
    Transport(String),

    /// Non-success HTTP status other than 401.
    #[error("remote returned status {code}: {message}")]
    Status { code: u16, message: String },

    /// The response body could not be decoded.
    #[error("could not decode response: {0}")]
    Decode(String),

    /// The remote API has no such capability.
    #[error("operation not supported by the remote service")]
    Unsupported,
}

/// Result type for remote calls.
pub type RemoteResult<T> = Result<T, RemoteError>;
