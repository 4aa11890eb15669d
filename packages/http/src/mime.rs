//! Best-effort MIME type inference for remote URIs.

use std::sync::Arc;

use reqwest::header::CONTENT_TYPE;
use tracing::warn;
use url::Url;

use remotefs_vfs::{Uri, WrapperRegistry};

use crate::client::HttpClientFactory;
use crate::error::Error;

/// The catch-all content type returned when no specific mapping matches.
pub const GENERIC_MIME_FALLBACK: &str = "application/octet-stream";

/// Local filename-extension-to-MIME mapping collaborator.
///
/// Implementations may return the generic fallback for unknown
/// extensions; the guesser treats that the same as no match.
pub trait ExtensionMimeGuesser: Send + Sync {
    fn guess(&self, filename: &str) -> Option<String>;
}

/// Extension mapping backed by the `mime_guess` database.
#[derive(Debug, Clone, Copy, Default)]
pub struct MimeGuessExtensionGuesser;

impl ExtensionMimeGuesser for MimeGuessExtensionGuesser {
    fn guess(&self, filename: &str) -> Option<String> {
        mime_guess::from_path(filename)
            .first()
            .map(|mime| mime.essence_str().to_string())
    }
}

/// Guesses the MIME type of a remote URI.
///
/// The cheap, local heuristic runs first: if the URI's filename carries an
/// extension with a non-generic mapping, that wins without any network
/// traffic. Only then does the guesser fall back to a HEAD probe and the
/// literal `Content-Type` header value. Probe failures never escape; MIME
/// guessing is always best-effort.
///
/// Non-remote URIs produce no result — local guessing belongs to another
/// collaborator.
pub struct HttpMimeTypeGuesser<E = MimeGuessExtensionGuesser> {
    registry: Arc<WrapperRegistry>,
    extension_guesser: E,
    factory: HttpClientFactory,
}

impl HttpMimeTypeGuesser<MimeGuessExtensionGuesser> {
    pub fn new(registry: Arc<WrapperRegistry>, factory: HttpClientFactory) -> Self {
        Self::with_extension_guesser(registry, MimeGuessExtensionGuesser, factory)
    }
}

impl<E: ExtensionMimeGuesser> HttpMimeTypeGuesser<E> {
    pub fn with_extension_guesser(
        registry: Arc<WrapperRegistry>,
        extension_guesser: E,
        factory: HttpClientFactory,
    ) -> Self {
        HttpMimeTypeGuesser {
            registry,
            extension_guesser,
            factory,
        }
    }

    /// Guess the MIME type of `uri`, or `None` when nothing matched.
    ///
    /// Callers are expected to apply their own default (typically
    /// [`GENERIC_MIME_FALLBACK`]) on `None`.
    pub fn guess(&self, uri: &str) -> Option<String> {
        let uri = Uri::parse(uri).ok()?;
        if !self.registry.is_remote(uri.scheme()) {
            return None;
        }

        // A filename without a period cannot match any known mapping, so
        // skip the extension lookup entirely.
        let filename = uri.filename();
        if filename.contains('.') {
            if let Some(mime) = self.extension_guesser.guess(filename) {
                if mime != GENERIC_MIME_FALLBACK {
                    return Some(mime);
                }
            }
        }

        match self.probe(uri.as_str()) {
            Ok(content_type) => content_type,
            Err(error) => {
                warn!(uri = %uri, error = %error, "HEAD probe for MIME type failed");
                None
            }
        }
    }

    /// HEAD the URI and return the literal `Content-Type` value, if any.
    fn probe(&self, uri: &str) -> Result<Option<String>, Error> {
        let url = Url::parse(uri)?;
        let client = self.factory.client(None)?;
        let response = client.head(url).send()?.error_for_status()?;

        Ok(response
            .headers()
            .get(CONTENT_TYPE)
            .and_then(|value| value.to_str().ok())
            .map(str::to_string))
    }
}
