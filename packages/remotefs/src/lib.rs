//! remotefs: remote resources behind a uniform stream wrapper contract.
//!
//! Application code opens, reads, seeks, and stats a URI as if it were a
//! local file; a scheme registry dispatches to the wrapper implementation
//! that knows the transport. The HTTP wrapper maps the contract onto
//! one-shot GET/HEAD requests; the local wrapper serves files beneath a
//! configured root.
//!
//! ```ignore
//! use std::sync::Arc;
//! use remotefs::{
//!     HttpClientFactory, HttpStreamWrapper, OpenOptions, Uri, WrapperRegistry, WrapperType,
//! };
//!
//! let mut registry = WrapperRegistry::new();
//! registry.register("https", WrapperType::READ | WrapperType::REMOTE, || {
//!     Box::new(HttpStreamWrapper::new(HttpClientFactory::new()))
//! });
//!
//! let uri = Uri::parse("https://example.com/file.txt")?;
//! let mut wrapper = registry.wrapper_for(&uri)?;
//! let mut opened = wrapper.open(&uri, "rb", OpenOptions::default())?;
//! ```

pub use remotefs_vfs::{
    Error, LockOperation, OpenMode, OpenOptions, OpenedStream, RemoteStream, SeekFrom, StatFlags,
    StatRecord, StreamOption, StreamWrapper, Uri, UriError, WrapperFactory, WrapperRegistry,
    WrapperType, MODE_FILE_READ, MODE_FILE_READ_WRITE, MODE_FILE_WRITE,
};

pub use remotefs_http::{
    ExtensionMimeGuesser, HttpBody, HttpClientFactory, HttpMimeTypeGuesser,
    HttpStreamWrapper, MimeGuessExtensionGuesser, GENERIC_MIME_FALLBACK,
};

pub use remotefs_local::{LocalBody, LocalStreamWrapper};
