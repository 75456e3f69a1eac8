//! Error type shared by every [`ApiClient`](crate::ApiClient) call.

use thiserror::Error;

/// Failure of a backend call.
///
/// `Server` carries the message the UI shows for a non-2xx response — parsed
/// from the body when the backend supplies one, synthesized from the status
/// code otherwise. Transport and body-decoding failures propagate unchanged.
#[derive(Debug, Error)]
pub enum ApiError {
    /// The backend answered with a non-success status.
    #[error("{message}")]
    Server { status: u16, message: String },

    /// The request never completed, or the success body failed to decode.
    #[error(transparent)]
    Transport(#[from] reqwest::Error),
}

impl ApiError {
    /// The HTTP status, when the backend answered at all.
    pub fn status(&self) -> Option<u16> {
        match self {
            ApiError::Server { status, .. } => Some(*status),
            ApiError::Transport(err) => err.status().map(|s| s.as_u16()),
        }
    }
}
