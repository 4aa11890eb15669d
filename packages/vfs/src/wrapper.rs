//! Capability traits: StreamWrapper and RemoteStream.

use std::io::SeekFrom;
use std::ops::BitOr;

use crate::{Error, StatRecord, Uri};

/// Capability bits describing a wrapper implementation.
///
/// Combined with `|`; queried with [`WrapperType::contains`]. A wrapper
/// without the `VISIBLE` bit is hidden from directory-style listings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct WrapperType(u32);

impl WrapperType {
    /// Refers to a local file system location.
    pub const LOCAL: WrapperType = WrapperType(0x0001);

    /// Refers to a remote file system location.
    pub const REMOTE: WrapperType = WrapperType(0x0002);

    /// Wrapper is readable.
    pub const READ: WrapperType = WrapperType(0x0004);

    /// Wrapper is writable.
    pub const WRITE: WrapperType = WrapperType(0x0008);

    /// Exposed in file listings and scheme enumeration.
    pub const VISIBLE: WrapperType = WrapperType(0x0010);

    /// Visible and readable using local files.
    pub const LOCAL_NORMAL: WrapperType = WrapperType(0x0015);

    /// Visible and readable using remote files.
    pub const REMOTE_NORMAL: WrapperType = WrapperType(0x0016);

    /// Whether every bit of `other` is set in `self`.
    pub const fn contains(self, other: WrapperType) -> bool {
        self.0 & other.0 == other.0
    }

    /// The raw bit pattern.
    pub const fn bits(self) -> u32 {
        self.0
    }
}

impl BitOr for WrapperType {
    type Output = WrapperType;

    fn bitor(self, rhs: WrapperType) -> WrapperType {
        WrapperType(self.0 | rhs.0)
    }
}

/// The read-only open mode spellings accepted by wrappers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OpenMode {
    /// `"r"`
    Read,
    /// `"rb"`
    ReadBinary,
    /// `"rt"`
    ReadText,
}

impl OpenMode {
    /// Parse a mode string; anything other than the three read-only
    /// spellings yields `None`.
    pub fn parse(mode: &str) -> Option<OpenMode> {
        match mode {
            "r" => Some(OpenMode::Read),
            "rb" => Some(OpenMode::ReadBinary),
            "rt" => Some(OpenMode::ReadText),
            _ => None,
        }
    }
}

/// Flags accompanying an open call.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct OpenOptions {
    /// Surface diagnostics for failures instead of failing silently.
    pub report_errors: bool,
    /// Ask the wrapper to echo the resolved path back on success.
    pub use_path: bool,
}

/// Flags accompanying a `url_stat` call.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct StatFlags {
    /// Suppress failures: a failed stat yields `None` instead of an error.
    pub quiet: bool,
    /// Stat the link itself rather than its referent. Wrappers without
    /// link semantics ignore this.
    pub link: bool,
}

/// Advisory lock operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LockOperation {
    Shared,
    Exclusive,
    Unlock,
    NonBlocking,
}

/// Runtime stream options.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StreamOption {
    /// Blocking or non-blocking reads were requested.
    Blocking { enabled: bool },
    /// Read timeout for subsequent requests; the microsecond fraction is
    /// folded into the effective duration.
    ReadTimeout { seconds: u64, microseconds: u32 },
    /// Write buffer sizing. Read-only wrappers reject this.
    WriteBuffer { size: usize },
}

/// A successfully opened stream plus the optionally echoed path.
pub struct OpenedStream {
    pub stream: Box<dyn RemoteStream>,
    /// Set when the caller passed [`OpenOptions::use_path`].
    pub opened_path: Option<Uri>,
}

/// An open stream handle over a wrapper resource.
///
/// Handles are single-owner: one handle per logical open, consumed by
/// reads and seeks until discarded. Dropping the handle is the only close;
/// there is no persistent connection to release.
///
/// # Object Safety
///
/// This trait is object-safe: you can use `Box<dyn RemoteStream>`.
pub trait RemoteStream: Send {
    /// Read up to `buf.len()` bytes, advancing the internal cursor.
    ///
    /// Returns fewer bytes (possibly zero) at end-of-stream.
    fn read(&mut self, buf: &mut [u8]) -> Result<usize, Error>;

    /// Seek to a new position.
    ///
    /// A failed seek leaves the position unchanged unless documented
    /// otherwise by the implementation.
    fn seek(&mut self, pos: SeekFrom) -> Result<u64, Error>;

    /// Current byte offset into the stream.
    fn tell(&self) -> u64;

    /// Whether the stream has been fully consumed.
    fn eof(&self) -> bool;

    /// Synthesize a stat record for the open resource.
    fn stat(&self) -> StatRecord;

    /// Take or release an advisory lock.
    ///
    /// Remote resources are not lockable, so the default succeeds without
    /// taking any lock; callers must not depend on exclusion.
    fn lock(&mut self, operation: LockOperation) -> bool {
        let _ = operation;
        true
    }

    /// Close the stream. The default is a no-op; dropping the handle
    /// releases everything.
    fn close(&mut self) {}
}

/// A pluggable implementation of the uniform file-access contract, bound
/// to one or more URI schemes through a [`WrapperRegistry`].
///
/// Wrapper instances are stateful (current URI, pending options) and are
/// owned by a single logical file handle at a time; [`StreamWrapper::open`]
/// returns a fresh [`RemoteStream`] handle rather than mutating stream
/// state on the wrapper itself.
///
/// [`WrapperRegistry`]: crate::WrapperRegistry
pub trait StreamWrapper: Send {
    /// Capability bits for this wrapper.
    fn wrapper_type(&self) -> WrapperType;

    /// Human-readable wrapper name.
    fn name(&self) -> &'static str;

    /// Human-readable wrapper description.
    fn description(&self) -> &'static str;

    /// Set the URI this instance refers to.
    fn set_uri(&mut self, uri: Uri);

    /// The URI this instance refers to, if one has been set.
    fn uri(&self) -> Option<&Uri>;

    /// The URL by which the resource is reachable externally. For remote
    /// resources this is simply the URI.
    fn external_url(&self) -> Option<String> {
        self.uri().map(|uri| uri.as_str().to_string())
    }

    /// The canonical path of the resource. Remote resources have no
    /// local/remote path distinction, so the default is the URI itself.
    fn realpath(&self) -> Option<String> {
        self.uri().map(|uri| uri.as_str().to_string())
    }

    /// The parent of `uri`, or of the instance URI when `uri` is `None`.
    fn dirname(&self, uri: Option<&Uri>) -> Option<Uri> {
        uri.or_else(|| self.uri()).map(Uri::dirname)
    }

    /// Open `uri` for reading, returning a fresh stream handle.
    ///
    /// Fails without any I/O for mode strings other than `r`, `rb`, `rt`.
    fn open(&mut self, uri: &Uri, mode: &str, options: OpenOptions) -> Result<OpenedStream, Error>;

    /// Stat `uri` with a fresh request, independent of any open stream.
    ///
    /// With [`StatFlags::quiet`] set, failures are suppressed and yield
    /// `Ok(None)`.
    fn url_stat(&mut self, uri: &Uri, flags: StatFlags) -> Result<Option<StatRecord>, Error>;

    /// Apply a stream option. Returns `false` for options the wrapper
    /// does not implement; unrecognized options fail silently.
    fn set_option(&mut self, option: StreamOption) -> bool {
        let _ = option;
        false
    }
}
