//! Error types for EPUB parsing and catalog lookups.

use thiserror::Error;

/// Errors raised while opening an archive and decoding its metadata.
///
/// Every variant is fatal to the parse call that produced it; no partial
/// [`BookRecord`](crate::BookRecord) is ever returned alongside one.
#[derive(Debug, Error)]
pub enum BookError {
    /// The source could not be read, or its bytes are not a zip structure.
    #[error("cannot open archive: {0}")]
    ArchiveOpen(String),

    /// No entry matches the logical path after separator normalization.
    #[error("entry not found in archive: {0}")]
    EntryNotFound(String),

    /// The entry exists but its data cannot be materialized.
    #[error("cannot read entry {name}: {reason}")]
    EntryRead { name: String, reason: String },

    /// `META-INF/container.xml` is not well-formed XML.
    #[error("malformed container manifest: {0}")]
    ManifestParse(String),

    /// The manifest decodes but lacks `rootfiles/rootfile[@full-path]`.
    #[error("container manifest has no root file: {0}")]
    ManifestShape(&'static str),

    /// The package document is not well-formed XML or not a `package`.
    #[error("malformed package document: {0}")]
    MetadataParse(String),
}

impl BookError {
    pub(crate) fn entry_read(name: &str, reason: impl ToString) -> Self {
        BookError::EntryRead {
            name: name.to_string(),
            reason: reason.to_string(),
        }
    }
}

/// A convenience `Result` alias over [`BookError`].
pub type Result<T> = std::result::Result<T, BookError>;

/// Errors raised by a catalog lookup.
#[derive(Debug, Error)]
pub enum LookupError {
    /// The ISBN failed checksum validation; no request was sent.
    #[error("invalid ISBN: {0:?}")]
    InvalidIsbn(String),

    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// The catalog answered with something other than 200 OK.
    #[error("catalog returned status {status}: {body}")]
    Status {
        status: reqwest::StatusCode,
        body: String,
    },

    #[error("failed to decode catalog response: {0}")]
    Decode(#[from] serde_json::Error),

    /// Every attempt timed out or failed to connect.
    #[error("catalog unreachable after {0} attempts")]
    RetriesExhausted(u32),
}
