//! Open stream handle over a local file.

use std::fs::{File, Metadata};
use std::io::{Read, Seek, SeekFrom};
use std::time::{SystemTime, UNIX_EPOCH};

use remotefs_vfs::{Error as VfsError, RemoteStream, StatRecord, MODE_FILE_READ};

/// A read-only local file behind the [`RemoteStream`] contract.
///
/// Unlike an HTTP body, local files support true random access: seeks in
/// any direction delegate to the file handle.
pub struct LocalBody {
    file: File,
    position: u64,
    record: StatRecord,
}

impl LocalBody {
    pub(crate) fn new(file: File) -> Result<Self, VfsError> {
        let metadata = file.metadata()?;
        Ok(LocalBody {
            file,
            position: 0,
            record: stat_from_metadata(&metadata),
        })
    }
}

impl RemoteStream for LocalBody {
    fn read(&mut self, buf: &mut [u8]) -> Result<usize, VfsError> {
        let n = self.file.read(buf).map_err(VfsError::Io)?;
        self.position += n as u64;
        Ok(n)
    }

    fn seek(&mut self, pos: SeekFrom) -> Result<u64, VfsError> {
        self.position = self.file.seek(pos).map_err(VfsError::Io)?;
        Ok(self.position)
    }

    fn tell(&self) -> u64 {
        self.position
    }

    fn eof(&self) -> bool {
        self.position >= self.record.size
    }

    fn stat(&self) -> StatRecord {
        self.record
    }
}

/// Build a read-only stat record from filesystem metadata.
pub(crate) fn stat_from_metadata(metadata: &Metadata) -> StatRecord {
    StatRecord {
        mode: MODE_FILE_READ,
        size: metadata.len(),
        atime: unix_seconds(metadata.accessed().ok()),
        mtime: unix_seconds(metadata.modified().ok()),
        ctime: unix_seconds(metadata.created().ok()),
        ..StatRecord::default()
    }
}

fn unix_seconds(time: Option<SystemTime>) -> i64 {
    time.and_then(|time| time.duration_since(UNIX_EPOCH).ok())
        .map(|duration| duration.as_secs() as i64)
        .unwrap_or(0)
}
