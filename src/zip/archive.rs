use flate2::Crc;
use flate2::read::DeflateDecoder;
use std::io::Read;
use std::path::Path;
use tracing::debug;

use crate::error::{BookError, Result};
use crate::io::{LocalFileReader, MemoryReader, ReadAt};

use super::parser::ZipParser;
use super::structures::{CompressionMethod, ZipEntry, normalize_separators};

/// Largest entry that will be materialized in memory (256 MiB)
pub const MAX_ENTRY_SIZE: u64 = 256 * 1024 * 1024;

/// An opened zip container with its central directory already read
pub struct Archive<R: ReadAt> {
    parser: ZipParser<R>,
    entries: Vec<ZipEntry>,
}

impl Archive<LocalFileReader> {
    /// Open an archive on disk
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let reader = LocalFileReader::new(path)
            .map_err(|e| BookError::ArchiveOpen(format!("{}: {e}", path.display())))?;
        Self::new(reader)
    }
}

impl Archive<MemoryReader> {
    /// Drain a byte stream and open it as an archive
    pub fn from_reader<T: Read>(reader: T) -> Result<Self> {
        let reader =
            MemoryReader::from_reader(reader).map_err(|e| BookError::ArchiveOpen(e.to_string()))?;
        Self::new(reader)
    }

    /// Open an archive held entirely in memory
    pub fn from_bytes(data: Vec<u8>) -> Result<Self> {
        Self::new(MemoryReader::new(data))
    }
}

impl<R: ReadAt> Archive<R> {
    /// Read the central directory of `reader`.
    ///
    /// Fails with [`BookError::ArchiveOpen`] when the source is not a zip.
    pub fn new(reader: R) -> Result<Self> {
        let parser = ZipParser::new(reader);
        let entries = parser.list_entries()?;
        debug!(entries = entries.len(), "opened archive");
        Ok(Self { parser, entries })
    }

    /// All entries, in central directory order
    pub fn entries(&self) -> &[ZipEntry] {
        &self.entries
    }

    /// Find the entry whose name equals `logical_path`.
    ///
    /// Backslashes are rewritten to forward slashes on both sides before an
    /// exact, case-sensitive comparison. The first match in directory order wins.
    pub fn find(&self, logical_path: &str) -> Option<&ZipEntry> {
        let wanted = normalize_separators(logical_path);
        self.entries.iter().find(|e| e.normalized_name() == wanted)
    }

    /// Resolve a logical path to the entry's complete, decompressed bytes.
    pub fn resolve(&self, logical_path: &str) -> Result<Vec<u8>> {
        let entry = self
            .find(logical_path)
            .ok_or_else(|| BookError::EntryNotFound(logical_path.to_string()))?;
        debug!(path = logical_path, entry = %entry.file_name, "resolved entry");
        self.read_entry(entry)
    }

    /// Materialize one entry in memory, verifying its size and CRC-32.
    pub fn read_entry(&self, entry: &ZipEntry) -> Result<Vec<u8>> {
        let name = entry.file_name.as_str();

        if entry.is_encrypted() {
            return Err(BookError::entry_read(name, "entry is encrypted"));
        }
        if entry.uncompressed_size > MAX_ENTRY_SIZE || entry.compressed_size > MAX_ENTRY_SIZE {
            return Err(BookError::entry_read(
                name,
                format!("entry exceeds {MAX_ENTRY_SIZE} bytes"),
            ));
        }

        let data_offset = self.parser.data_offset(entry)?;
        let mut raw = vec![0u8; entry.compressed_size as usize];
        self.parser
            .reader()
            .read_exact_at(data_offset, &mut raw)
            .map_err(|e| BookError::entry_read(name, e))?;

        let data = match entry.compression_method {
            CompressionMethod::Stored => raw,
            CompressionMethod::Deflate => {
                let mut out = Vec::with_capacity(entry.uncompressed_size as usize);
                // One extra byte lets an understated size show up as a mismatch
                DeflateDecoder::new(raw.as_slice())
                    .take(entry.uncompressed_size + 1)
                    .read_to_end(&mut out)
                    .map_err(|e| BookError::entry_read(name, format!("inflate failed: {e}")))?;
                out
            }
            CompressionMethod::Unknown(method) => {
                return Err(BookError::entry_read(
                    name,
                    format!("unsupported compression method {method}"),
                ));
            }
        };

        if data.len() as u64 != entry.uncompressed_size {
            return Err(BookError::entry_read(
                name,
                format!(
                    "expected {} bytes, found {}",
                    entry.uncompressed_size,
                    data.len()
                ),
            ));
        }

        let mut crc = Crc::new();
        crc.update(&data);
        if crc.sum() != entry.crc32 {
            return Err(BookError::entry_read(
                name,
                format!("checksum mismatch: expected {:#010x}, got {:#010x}", entry.crc32, crc.sum()),
            ));
        }

        Ok(data)
    }
}
