//! Read-only local file stream wrapper.

use std::fs::File;
use std::io;
use std::path::{Path, PathBuf};

use tracing::{debug, warn};

use remotefs_vfs::{
    Error as VfsError, OpenMode, OpenOptions, OpenedStream, StatFlags, StatRecord, StreamWrapper,
    Uri, WrapperType,
};

use crate::body::{stat_from_metadata, LocalBody};

/// Read-only stream wrapper over files beneath a configured root.
///
/// The URI target is resolved as a relative path under the root; parent
/// references are rejected so a URI can never escape it.
pub struct LocalStreamWrapper {
    root: PathBuf,
    uri: Option<Uri>,
}

impl LocalStreamWrapper {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        LocalStreamWrapper {
            root: root.into(),
            uri: None,
        }
    }

    /// The directory all targets resolve under.
    pub fn root(&self) -> &Path {
        &self.root
    }

    fn resolve(&self, uri: &Uri) -> Result<PathBuf, VfsError> {
        let mut path = self.root.clone();
        for component in uri.target().split('/') {
            if component.is_empty() || component == "." {
                continue;
            }
            if component == ".." {
                return Err(VfsError::Io(io::Error::new(
                    io::ErrorKind::InvalidInput,
                    format!("URI '{}' escapes the wrapper root", uri),
                )));
            }
            path.push(component);
        }
        Ok(path)
    }
}

impl StreamWrapper for LocalStreamWrapper {
    fn wrapper_type(&self) -> WrapperType {
        WrapperType::LOCAL_NORMAL
    }

    fn name(&self) -> &'static str {
        "Local stream wrapper"
    }

    fn description(&self) -> &'static str {
        "Read-only access to local files under a configured root"
    }

    fn set_uri(&mut self, uri: Uri) {
        self.uri = Some(uri);
    }

    fn uri(&self) -> Option<&Uri> {
        self.uri.as_ref()
    }

    /// Local files have no external URL.
    fn external_url(&self) -> Option<String> {
        None
    }

    /// The canonical filesystem path of the resource.
    fn realpath(&self) -> Option<String> {
        let uri = self.uri.as_ref()?;
        let path = self.resolve(uri).ok()?;
        let path = path.canonicalize().unwrap_or(path);
        Some(path.to_string_lossy().into_owned())
    }

    fn open(&mut self, uri: &Uri, mode: &str, options: OpenOptions) -> Result<OpenedStream, VfsError> {
        if OpenMode::parse(mode).is_none() {
            if options.report_errors {
                warn!(mode, "write modes are not supported for local stream wrappers");
            }
            return Err(VfsError::UnsupportedMode {
                mode: mode.to_string(),
            });
        }

        let path = self.resolve(uri)?;
        let file = File::open(&path).map_err(|error| {
            if options.report_errors {
                warn!(uri = %uri, error = %error, "failed to open local file");
            }
            VfsError::Io(error)
        })?;

        self.uri = Some(uri.clone());
        let opened_path = if options.use_path {
            Some(uri.clone())
        } else {
            None
        };

        Ok(OpenedStream {
            stream: Box::new(LocalBody::new(file)?),
            opened_path,
        })
    }

    fn url_stat(&mut self, uri: &Uri, flags: StatFlags) -> Result<Option<StatRecord>, VfsError> {
        let stat = self
            .resolve(uri)
            .and_then(|path| std::fs::metadata(path).map_err(VfsError::Io));

        match stat {
            Ok(metadata) => {
                self.uri = Some(uri.clone());
                Ok(Some(stat_from_metadata(&metadata)))
            }
            Err(error) if flags.quiet => {
                debug!(uri = %uri, error = %error, "stat failed under quiet flag");
                Ok(None)
            }
            Err(error) => Err(error),
        }
    }
}
