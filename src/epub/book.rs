use std::io::Read;
use std::path::Path;
use tracing::debug;

use crate::error::Result;
use crate::io::ReadAt;
use crate::isbn;
use crate::zip::Archive;

use super::container::resolve_content_document_path;
use super::metadata::{IdentifierRecord, MetadataSet, extract_metadata};

/// Metadata parsed from one EPUB.
///
/// The ISBN accessors are recomputed on every call; the record never
/// changes after parsing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BookRecord {
    metadata: MetadataSet,
}

impl BookRecord {
    pub fn new(metadata: MetadataSet) -> Self {
        Self { metadata }
    }

    pub fn metadata(&self) -> &MetadataSet {
        &self.metadata
    }

    pub fn identifiers(&self) -> &[IdentifierRecord] {
        self.metadata.identifiers()
    }

    /// The first identifier classified as an ISBN, in document order
    pub fn isbn_record(&self) -> Option<&IdentifierRecord> {
        isbn::first_isbn(&self.metadata)
    }

    /// Value of the first ISBN identifier as declared, with surrounding whitespace trimmed
    pub fn isbn(&self) -> Option<&str> {
        self.isbn_record().map(|record| record.value.as_str())
    }

    /// The first ISBN identifier in compact form, e.g. `9785446117666`
    pub fn clean_isbn(&self) -> Option<String> {
        self.isbn().map(isbn::normalize)
    }
}

/// Parse an EPUB on disk
pub fn parse_epub<P: AsRef<Path>>(path: P) -> Result<BookRecord> {
    let archive = Archive::open(path)?;
    parse_archive(&archive)
}

/// Parse an EPUB read from a byte stream
pub fn parse_epub_from_reader<T: Read>(reader: T) -> Result<BookRecord> {
    let archive = Archive::from_reader(reader)?;
    parse_archive(&archive)
}

/// Follow `META-INF/container.xml` to the package document and decode its metadata
pub fn parse_archive<R: ReadAt>(archive: &Archive<R>) -> Result<BookRecord> {
    let opf_path = resolve_content_document_path(archive)?;
    let opf = archive.resolve(&opf_path)?;
    let metadata = extract_metadata(&opf)?;
    debug!(
        path = %opf_path,
        identifiers = metadata.len(),
        "decoded package metadata"
    );
    Ok(BookRecord::new(metadata))
}
