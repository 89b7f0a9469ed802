//! Guessit HTTP client
//!
//! Sends a filename to a guessit endpoint and decodes the metadata the service
//! infers from it. One call is one `POST` with a JSON body:
//!
//! ```text
//! POST <endpoint>
//! Content-Type: application/json
//!
//! {"name": "<filename>"}
//! ```
//!
//! A `200` answer carries the guessed metadata, `400` means the service
//! rejected the filename, and anything else is treated as a server failure.
//! Calls are never retried.

use crate::error::GuessError;
use crate::response::{GuessRequest, GuessResponse};
use reqwest::StatusCode;
use reqwest::header::USER_AGENT;
use std::time::{Duration, Instant};
use tracing::{debug, warn};

/// Timeout applied to a call when the caller does not supply one
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

const CLIENT_USER_AGENT: &str = concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION"));

/// Client for a guessit endpoint.
///
/// The client holds no mutable state, so a single instance can be shared
/// between threads. Clones share the underlying connection pool.
#[derive(Debug, Clone)]
pub struct GuessClient {
    http_client: reqwest::blocking::Client,
    endpoint: String,
    timeout: Duration,
}

impl GuessClient {
    /// Creates a client for the given endpoint URL.
    ///
    /// The endpoint is stored verbatim; an unusable URL only surfaces as a
    /// request error on the first call.
    ///
    /// # Examples
    ///
    /// ```no_run
    /// use guessit_client::GuessClient;
    ///
    /// let client = GuessClient::new("http://localhost:5000/");
    /// let guess = client.guess("The.Matrix.Reloaded.2003.1080p.BrRip.x264.YIFY.mp4")?;
    /// println!("{} ({})", guess.title, guess.year);
    /// # Ok::<(), guessit_client::GuessError>(())
    /// ```
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self {
            http_client: reqwest::blocking::Client::new(),
            endpoint: endpoint.into(),
            timeout: DEFAULT_TIMEOUT,
        }
    }

    /// Replaces the default timeout used by [`GuessClient::guess`].
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Uses a pre-configured HTTP client, e.g. one with a proxy or custom TLS
    /// roots.
    pub fn with_http_client(mut self, http_client: reqwest::blocking::Client) -> Self {
        self.http_client = http_client;
        self
    }

    /// The endpoint this client talks to
    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    /// The timeout applied by [`GuessClient::guess`]
    pub fn timeout(&self) -> Duration {
        self.timeout
    }

    /// Guesses metadata for `filename` using the client's default timeout.
    pub fn guess(&self, filename: &str) -> Result<GuessResponse, GuessError> {
        self.guess_with_timeout(filename, self.timeout)
    }

    /// Guesses metadata for `filename`, failing with [`GuessError::Timeout`]
    /// once `deadline` has passed.
    ///
    /// An already expired deadline fails immediately without sending anything.
    pub fn guess_with_deadline(
        &self,
        filename: &str,
        deadline: Instant,
    ) -> Result<GuessResponse, GuessError> {
        match deadline.checked_duration_since(Instant::now()) {
            Some(remaining) if !remaining.is_zero() => self.guess_with_timeout(filename, remaining),
            _ => {
                debug!(filename, "Deadline already expired, not sending request");
                Err(GuessError::Timeout)
            }
        }
    }

    /// Guesses metadata for `filename`, aborting the call after `timeout`.
    ///
    /// The timeout covers connecting, sending the request and reading the
    /// whole response body.
    ///
    /// # Errors
    ///
    /// * [`GuessError::InvalidRequest`] if the service answers `400`
    /// * [`GuessError::ServerError`] for any other non-`200` status
    /// * [`GuessError::Timeout`] if the timeout elapses
    /// * [`GuessError::Request`] if the service cannot be reached
    /// * [`GuessError::Decode`] if the body is not a valid guess payload
    pub fn guess_with_timeout(
        &self,
        filename: &str,
        timeout: Duration,
    ) -> Result<GuessResponse, GuessError> {
        debug!(endpoint = %self.endpoint, filename, ?timeout, "Sending guess request");

        let response = self
            .http_client
            .post(&self.endpoint)
            .header(USER_AGENT, CLIENT_USER_AGENT)
            .json(&GuessRequest { name: filename })
            .timeout(timeout)
            .send()
            .map_err(|e| {
                warn!(endpoint = %self.endpoint, error = %e, "Guess request failed");
                GuessError::from(e)
            })?;

        let status = response.status();
        debug!(status = status.as_u16(), "Received guess response");

        match status {
            StatusCode::OK => {}
            StatusCode::BAD_REQUEST => {
                warn!(filename, "Service rejected filename");
                return Err(GuessError::InvalidRequest);
            }
            _ => {
                warn!(
                    filename,
                    status = status.as_u16(),
                    reason = status.canonical_reason().unwrap_or("Unknown"),
                    "Service returned an error status"
                );
                return Err(GuessError::ServerError {
                    status: status.as_u16(),
                });
            }
        }

        // Read the body before decoding so transport failures stay separate
        // from malformed payloads.
        let body = response.bytes()?;
        Ok(serde_json::from_slice(&body)?)
    }
}
