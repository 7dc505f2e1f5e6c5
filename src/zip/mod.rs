//! ZIP archive access.
//!
//! This module opens zip-structured containers and resolves logical paths
//! inside them to the entries' raw bytes.
//!
//! ## Architecture
//!
//! - [`structures`]: Data structures representing ZIP format elements (EOCD, file headers, etc.)
//! - [`parser`]: Low-level parsing of ZIP structures from raw bytes
//! - [`archive`]: The [`Archive`] handle used by the EPUB layer
//!
//! ## ZIP Format Overview
//!
//! A ZIP file consists of:
//! 1. Local file headers and compressed data for each file
//! 2. Central Directory with metadata for all files
//! 3. End of Central Directory (EOCD) record at the end
//!
//! This implementation reads the EOCD first (from the end of the file),
//! then the Central Directory. Entry names written with Windows separators
//! are matched as if they used forward slashes.
//!
//! ## Supported Features
//!
//! - ZIP64 extensions
//! - STORED (no compression) method
//! - DEFLATE compression method
//! - CRC-32 verification of every entry read
//!
//! ## Limitations
//!
//! - No encryption support
//! - No multi-disk archive support
//! - No BZIP2, LZMA, or other compression methods

mod archive;
mod parser;
mod structures;

pub use archive::{Archive, MAX_ENTRY_SIZE};
pub use parser::ZipParser;
pub use structures::*;
