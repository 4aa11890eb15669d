//! Core remotefs: the stream wrapper contract.
//!
//! This layer defines the uniform file-access contract that wrapper
//! implementations plug into:
//! - `Uri`: a `scheme://target` identifier with scheme/target splitting
//! - `StreamWrapper`: per-scheme operations (open, stat, dirname, options)
//! - `RemoteStream`: an open stream handle (read, seek, tell, eof, lock)
//! - `WrapperRegistry`: the scheme → wrapper dispatch table, owned by the
//!   caller as configuration
//!
//! Wrapper implementations live in sibling crates (`remotefs-http`,
//! `remotefs-local`); this crate carries no I/O of its own.
//!
//! # Example
//!
//! ```rust
//! use remotefs_vfs::Uri;
//!
//! let uri = Uri::parse("http://example.com/a/b/c.txt").unwrap();
//! assert_eq!(uri.scheme(), "http");
//! assert_eq!(uri.dirname().as_str(), "http://example.com/a/b");
//! ```

mod error;
mod registry;
mod stat;
mod uri;
mod wrapper;

pub use error::Error;
pub use registry::{WrapperFactory, WrapperRegistry};
pub use stat::{StatRecord, MODE_FILE_READ, MODE_FILE_READ_WRITE, MODE_FILE_WRITE};
pub use uri::{Uri, UriError};
pub use wrapper::{
    LockOperation, OpenMode, OpenOptions, OpenedStream, RemoteStream, StatFlags, StreamOption,
    StreamWrapper, WrapperType,
};

pub use std::io::SeekFrom;
