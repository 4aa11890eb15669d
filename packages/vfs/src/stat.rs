//! Synthesized stat records for wrapper resources.

use serde::{Deserialize, Serialize};

/// Permission mode for a read-only regular file (`0100444`).
pub const MODE_FILE_READ: u32 = 0o100_444;

/// Permission mode for a read-write regular file (`0100666`).
pub const MODE_FILE_READ_WRITE: u32 = 0o100_666;

/// Permission mode for a writable regular file (`0100644`).
pub const MODE_FILE_WRITE: u32 = 0o100_644;

/// A fixed-shape stat record, synthesized on demand.
///
/// Remote resources have no real inode, so most fields stay at their zero
/// placeholders; only `mode` and `size` carry meaning for HTTP streams.
/// Local wrappers additionally fill in the timestamps.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatRecord {
    pub dev: u64,
    pub ino: u64,
    pub mode: u32,
    pub nlink: u64,
    pub uid: u32,
    pub gid: u32,
    pub rdev: u64,
    pub size: u64,
    pub atime: i64,
    pub mtime: i64,
    pub ctime: i64,
    pub blksize: u64,
    pub blocks: u64,
}

impl StatRecord {
    /// A record for a read-only regular file of the given size.
    pub fn read_only(size: u64) -> Self {
        StatRecord {
            mode: MODE_FILE_READ,
            size,
            ..StatRecord::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn canonical_mode_values() {
        assert_eq!(MODE_FILE_READ, 33060);
        assert_eq!(MODE_FILE_READ_WRITE, 33206);
        assert_eq!(MODE_FILE_WRITE, 33188);
    }

    #[test]
    fn serializes_with_posix_field_names() {
        let json = serde_json::to_value(StatRecord::read_only(11)).unwrap();
        assert_eq!(json["mode"], 33060);
        assert_eq!(json["size"], 11);
        assert_eq!(json["blksize"], 0);
    }

    #[test]
    fn read_only_record_sets_mode_and_size() {
        let record = StatRecord::read_only(11);
        assert_eq!(record.mode, MODE_FILE_READ);
        assert_eq!(record.size, 11);
        assert_eq!(record.dev, 0);
        assert_eq!(record.ino, 0);
        assert_eq!(record.mtime, 0);
        assert_eq!(record.blocks, 0);
    }
}
