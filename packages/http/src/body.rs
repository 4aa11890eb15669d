//! Open stream handle over an HTTP response body.

use std::io::{Read, SeekFrom};

use remotefs_vfs::{Error as VfsError, RemoteStream, StatRecord};

const SKIP_CHUNK: usize = 8192;

/// A lazily-consumed HTTP response body behind the [`RemoteStream`]
/// contract.
///
/// The body is forward-only: seeks at or past the current position are
/// honored by discarding bytes, while backward seeks fail and leave the
/// position unchanged. If the body ends before a forward seek target, the
/// position stops at end-of-stream and the seek reports failure.
pub struct HttpBody {
    reader: Box<dyn Read + Send>,
    position: u64,
    size: Option<u64>,
    eof: bool,
}

impl HttpBody {
    /// Wrap a response, taking the reported `Content-Length` as the
    /// authoritative size when present.
    pub fn from_response(response: reqwest::blocking::Response) -> Self {
        let size = response.content_length();
        HttpBody {
            reader: Box::new(response),
            position: 0,
            size,
            eof: size == Some(0),
        }
    }

    /// Byte length reported by the server, if any.
    pub fn size(&self) -> Option<u64> {
        self.size
    }

    /// Consume and discard `count` bytes.
    fn skip(&mut self, count: u64) -> Result<(), VfsError> {
        let mut chunk = [0u8; SKIP_CHUNK];
        let mut remaining = count;
        while remaining > 0 {
            let want = remaining.min(chunk.len() as u64) as usize;
            let n = RemoteStream::read(self, &mut chunk[..want])?;
            if n == 0 {
                return Err(VfsError::SeekUnsupported {
                    message: "seek target is past the end of the stream".to_string(),
                });
            }
            remaining -= n as u64;
        }
        Ok(())
    }
}

impl RemoteStream for HttpBody {
    fn read(&mut self, buf: &mut [u8]) -> Result<usize, VfsError> {
        if buf.is_empty() || self.eof {
            return Ok(0);
        }

        let n = self.reader.read(buf).map_err(VfsError::Io)?;
        self.position += n as u64;

        // With a known length, eof flips exactly when the last byte is
        // consumed; otherwise only a zero-byte read reveals the end.
        if n == 0 || self.size.is_some_and(|size| self.position >= size) {
            self.eof = true;
        }
        Ok(n)
    }

    fn seek(&mut self, pos: SeekFrom) -> Result<u64, VfsError> {
        let target = match pos {
            SeekFrom::Start(offset) => offset,
            SeekFrom::Current(delta) => {
                self.position
                    .checked_add_signed(delta)
                    .ok_or_else(|| VfsError::SeekUnsupported {
                        message: format!("offset {} from position {} underflows", delta, self.position),
                    })?
            }
            SeekFrom::End(delta) => {
                let size = self.size.ok_or_else(|| VfsError::SeekUnsupported {
                    message: "cannot seek from end: stream size unknown".to_string(),
                })?;
                size.checked_add_signed(delta)
                    .ok_or_else(|| VfsError::SeekUnsupported {
                        message: format!("offset {} from end underflows", delta),
                    })?
            }
        };

        if target < self.position {
            return Err(VfsError::SeekUnsupported {
                message: "cannot seek backwards on an HTTP response body".to_string(),
            });
        }

        self.skip(target - self.position)?;
        Ok(self.position)
    }

    fn tell(&self) -> u64 {
        self.position
    }

    fn eof(&self) -> bool {
        self.eof
    }

    fn stat(&self) -> StatRecord {
        StatRecord::read_only(self.size.unwrap_or(0))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use remotefs_vfs::LockOperation;

    fn body_over(bytes: &'static [u8], size: Option<u64>) -> HttpBody {
        HttpBody {
            reader: Box::new(bytes),
            position: 0,
            size,
            eof: size == Some(0),
        }
    }

    #[test]
    fn read_advances_cursor_until_eof() {
        let mut body = body_over(b"hello world", Some(11));
        let mut buf = [0u8; 11];

        assert!(!body.eof());
        let n = body.read(&mut buf).unwrap();
        assert_eq!(&buf[..n], b"hello world");
        assert_eq!(body.tell(), 11);
        assert!(body.eof());
        assert_eq!(body.read(&mut buf).unwrap(), 0);
    }

    #[test]
    fn eof_flips_only_after_last_byte() {
        let mut body = body_over(b"hello world", Some(11));
        let mut buf = [0u8; 10];

        assert_eq!(body.read(&mut buf).unwrap(), 10);
        assert!(!body.eof());
        assert_eq!(body.read(&mut buf).unwrap(), 1);
        assert!(body.eof());
    }

    #[test]
    fn unknown_size_needs_a_zero_read_for_eof() {
        let mut body = body_over(b"abc", None);
        let mut buf = [0u8; 3];

        assert_eq!(body.read(&mut buf).unwrap(), 3);
        assert!(!body.eof());
        assert_eq!(body.read(&mut buf).unwrap(), 0);
        assert!(body.eof());
    }

    #[test]
    fn forward_seek_discards_bytes() {
        let mut body = body_over(b"abcdefghij", Some(10));
        assert_eq!(body.seek(SeekFrom::Start(4)).unwrap(), 4);

        let mut buf = [0u8; 3];
        assert_eq!(body.read(&mut buf).unwrap(), 3);
        assert_eq!(&buf, b"efg");
        assert_eq!(body.tell(), 7);

        assert_eq!(body.seek(SeekFrom::Current(1)).unwrap(), 8);
        assert_eq!(body.read(&mut buf).unwrap(), 2);
        assert_eq!(&buf[..2], b"ij");
    }

    #[test]
    fn backward_seek_fails_and_keeps_position() {
        let mut body = body_over(b"abcdefghij", Some(10));
        body.seek(SeekFrom::Start(5)).unwrap();

        assert!(matches!(
            body.seek(SeekFrom::Start(2)),
            Err(VfsError::SeekUnsupported { .. })
        ));
        assert!(matches!(
            body.seek(SeekFrom::Current(-1)),
            Err(VfsError::SeekUnsupported { .. })
        ));
        assert_eq!(body.tell(), 5);
    }

    #[test]
    fn seek_from_end_requires_known_size() {
        let mut body = body_over(b"abcdefghij", None);
        assert!(matches!(
            body.seek(SeekFrom::End(-2)),
            Err(VfsError::SeekUnsupported { .. })
        ));
        assert_eq!(body.tell(), 0);

        let mut sized = body_over(b"abcdefghij", Some(10));
        assert_eq!(sized.seek(SeekFrom::End(-2)).unwrap(), 8);
        assert_eq!(sized.tell(), 8);
    }

    #[test]
    fn stat_reports_size_and_read_only_mode() {
        let body = body_over(b"hello world", Some(11));
        let record = body.stat();
        assert_eq!(record.size, 11);
        assert_eq!(record.mode, remotefs_vfs::MODE_FILE_READ);

        let unsized_body = body_over(b"hello world", None);
        assert_eq!(unsized_body.stat().size, 0);
    }

    #[test]
    fn lock_always_succeeds() {
        let mut body = body_over(b"", Some(0));
        for operation in [
            LockOperation::Shared,
            LockOperation::Exclusive,
            LockOperation::Unlock,
            LockOperation::NonBlocking,
        ] {
            assert!(body.lock(operation));
        }
    }

    #[test]
    fn empty_body_starts_at_eof() {
        let mut body = body_over(b"", Some(0));
        assert!(body.eof());
        let mut buf = [0u8; 4];
        assert_eq!(body.read(&mut buf).unwrap(), 0);
    }
}
