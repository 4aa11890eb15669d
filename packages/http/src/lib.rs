//! # remotefs-http
//!
//! HTTP(S) stream wrapper for the remotefs contract.
//!
//! This crate maps the filesystem-primitive contract (open, read, seek,
//! stat, lock) onto one-shot blocking HTTP requests:
//! - [`HttpStreamWrapper`]: opens a URI with a GET and hands back the
//!   response body as a forward-only [`HttpBody`] stream handle
//! - [`HttpMimeTypeGuesser`]: infers a content type from the filename
//!   extension first, falling back to a HEAD probe of `Content-Type`
//!
//! Every request is a fresh, single-shot fetch: no caching, no pooling
//! policy, no authentication, no retries.
//!
//! ## Example
//!
//! ```ignore
//! use remotefs_http::{HttpClientFactory, HttpStreamWrapper};
//! use remotefs_vfs::{OpenOptions, StreamWrapper, Uri};
//!
//! let mut wrapper = HttpStreamWrapper::new(HttpClientFactory::new());
//! let uri = Uri::parse("https://example.com/file.txt")?;
//!
//! let mut opened = wrapper.open(&uri, "rb", OpenOptions::default())?;
//! let mut buf = [0u8; 8192];
//! while !opened.stream.eof() {
//!     let n = opened.stream.read(&mut buf)?;
//!     // ...
//! }
//! ```

pub mod body;
pub mod client;
pub mod error;
pub mod mime;
pub mod wrapper;

pub use body::HttpBody;
pub use client::HttpClientFactory;
pub use error::Error;
pub use mime::{
    ExtensionMimeGuesser, HttpMimeTypeGuesser, MimeGuessExtensionGuesser, GENERIC_MIME_FALLBACK,
};
pub use wrapper::HttpStreamWrapper;
