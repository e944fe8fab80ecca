use std::fs::{self, File};
use std::path::Path;

use memmap2::Mmap;

use super::{PinyinTable, TableError};

pub(super) const MAGIC: &[u8; 4] = b"PYTB";
pub(super) const VERSION: u8 = 1;
/// magic(4) + version(1) + reserved(3) + payload_len(4) + crc32(4).
pub(super) const HEADER_SIZE: usize = 16;

fn read_u32_le(data: &[u8], pos: usize) -> u32 {
    u32::from_le_bytes([data[pos], data[pos + 1], data[pos + 2], data[pos + 3]])
}

impl PinyinTable {
    /// Serialize to bytes (PYTB format).
    pub fn to_bytes(&self) -> Result<Vec<u8>, TableError> {
        let payload = bincode::serialize(self).map_err(TableError::Serialize)?;
        let payload_len: u32 = payload
            .len()
            .try_into()
            .map_err(|_| TableError::Parse("payload exceeds u32::MAX".to_string()))?;
        let crc = crc32fast::hash(&payload);

        let mut buf = Vec::with_capacity(HEADER_SIZE + payload.len());
        buf.extend_from_slice(MAGIC);
        buf.push(VERSION);
        buf.extend_from_slice(&[0u8; 3]); // reserved
        buf.extend_from_slice(&payload_len.to_le_bytes());
        buf.extend_from_slice(&crc.to_le_bytes());
        buf.extend_from_slice(&payload);
        Ok(buf)
    }

    /// Deserialize from bytes (PYTB format), validating every index.
    pub fn from_bytes(data: &[u8]) -> Result<Self, TableError> {
        if data.len() < 5 {
            return Err(TableError::InvalidHeader);
        }
        if &data[..4] != MAGIC {
            return Err(TableError::InvalidMagic);
        }
        if data[4] != VERSION {
            return Err(TableError::UnsupportedVersion(data[4]));
        }
        if data.len() < HEADER_SIZE {
            return Err(TableError::InvalidHeader);
        }

        let payload_len = read_u32_le(data, 8) as usize;
        let expected_crc = read_u32_le(data, 12);
        let end = HEADER_SIZE
            .checked_add(payload_len)
            .ok_or(TableError::InvalidHeader)?;
        if data.len() != end {
            return Err(TableError::InvalidHeader);
        }

        let payload = &data[HEADER_SIZE..end];
        let actual_crc = crc32fast::hash(payload);
        if actual_crc != expected_crc {
            return Err(TableError::ChecksumMismatch {
                expected: expected_crc,
                actual: actual_crc,
            });
        }

        let table: PinyinTable = bincode::deserialize(payload).map_err(TableError::Deserialize)?;
        table.validate()?;
        Ok(table)
    }

    /// Open a compiled table file.
    ///
    /// The file is memory-mapped for decoding only; the returned table owns
    /// its data and does not keep the mapping alive.
    pub fn open(path: &Path) -> Result<Self, TableError> {
        let file = File::open(path)?;
        // SAFETY: The file is opened read-only and the mapping is immutable.
        let mmap = unsafe { Mmap::map(&file)? };
        Self::from_bytes(&mmap)
    }

    pub fn save(&self, path: &Path) -> Result<(), TableError> {
        Ok(fs::write(path, self.to_bytes()?)?)
    }
}
