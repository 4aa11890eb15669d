//! Blocking HTTP client construction.

use std::time::Duration;

use reqwest::blocking::Client;

use crate::error::Error;

/// Builds a fresh blocking [`Client`] for each request.
///
/// The factory is the injected collaborator the wrapper and the MIME
/// guesser issue requests through; building per request lets a timeout set
/// between requests apply to the next one without touching an already-open
/// stream.
#[derive(Debug, Clone, Default)]
pub struct HttpClientFactory {
    default_timeout: Option<Duration>,
}

impl HttpClientFactory {
    /// A factory with no default timeout; requests block until the
    /// transport gives up.
    pub fn new() -> Self {
        HttpClientFactory::default()
    }

    /// A factory whose clients time out after `timeout` unless a
    /// per-request timeout overrides it.
    pub fn with_default_timeout(timeout: Duration) -> Self {
        HttpClientFactory {
            default_timeout: Some(timeout),
        }
    }

    /// Build a client, preferring the per-request `timeout` over the
    /// factory default.
    pub fn client(&self, timeout: Option<Duration>) -> Result<Client, Error> {
        let mut builder = Client::builder();
        if let Some(timeout) = timeout.or(self.default_timeout) {
            builder = builder.timeout(timeout);
        }
        Ok(builder.build()?)
    }
}
