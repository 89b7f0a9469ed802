//! Error types for guessit calls
//!
//! Every failure of a guess is terminal. The variants fall into three
//! categories (see [`ErrorKind`]): the server rejected the input, the server
//! failed, or the exchange itself broke down (transport, timeout, decoding).

use thiserror::Error;

/// Errors that can occur while guessing a filename.
#[derive(Debug, Error)]
pub enum GuessError {
    /// The server rejected the filename (HTTP 400)
    #[error("guessit: invalid request")]
    InvalidRequest,

    /// The server failed or answered with an unexpected status code
    #[error("guessit: server error (HTTP {status})")]
    ServerError { status: u16 },

    /// The deadline elapsed before a complete response was received
    #[error("guessit: request timed out")]
    Timeout,

    /// The request could not be sent or the response body could not be read
    #[error("guessit: request failed: {0}")]
    Request(#[source] reqwest::Error),

    /// The response body is not a valid guess payload
    #[error("guessit: failed to decode response: {0}")]
    Decode(#[from] serde_json::Error),
}

/// Coarse classification of a [`GuessError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// The server rejected the input; retrying the same filename is pointless
    InvalidRequest,
    /// Remote failure not attributable to the caller's input
    ServerError,
    /// Connectivity problem, including timeouts
    Transport,
    /// Malformed response body
    Decode,
}

impl GuessError {
    /// Returns the category this error belongs to.
    pub fn kind(&self) -> ErrorKind {
        match self {
            GuessError::InvalidRequest => ErrorKind::InvalidRequest,
            GuessError::ServerError { .. } => ErrorKind::ServerError,
            GuessError::Timeout | GuessError::Request(_) => ErrorKind::Transport,
            GuessError::Decode(_) => ErrorKind::Decode,
        }
    }

    /// Returns true if the call was aborted because its deadline elapsed.
    pub fn is_timeout(&self) -> bool {
        matches!(self, GuessError::Timeout)
    }
}

impl From<reqwest::Error> for GuessError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            GuessError::Timeout
        } else {
            GuessError::Request(err)
        }
    }
}
