//! Errors at the wrapper contract layer.

use crate::uri::UriError;

/// Errors surfaced by stream wrapper operations.
///
/// All wrapper failures are local and non-fatal: implementations catch
/// transport faults at their boundary and translate them into these
/// variants rather than letting lower-level errors escape.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// URI parse or validation failure.
    #[error("URI error: {0}")]
    Uri(#[from] UriError),

    /// The caller asked for an open mode the wrapper does not support.
    #[error("unsupported open mode '{mode}': stream wrapper is read-only")]
    UnsupportedMode { mode: String },

    /// The underlying stream does not support the requested seek.
    #[error("seek not supported: {message}")]
    SeekUnsupported { message: String },

    /// Network-level failure (connection, DNS, timeout, error status).
    #[error("transport error: {message}")]
    Transport { message: String },

    /// Local I/O failure while consuming a stream.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// No wrapper is registered for the URI's scheme.
    #[error("no stream wrapper registered for scheme '{scheme}'")]
    UnknownScheme { scheme: String },
}
