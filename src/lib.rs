//! # bookid
//!
//! Extract, normalize and validate ISBNs from EPUB containers.
//!
//! An EPUB is a zip archive. Its `META-INF/container.xml` points at the
//! package document, whose `<metadata>` lists the book's identifiers.
//! This crate follows that indirection, decodes the identifiers in
//! document order and picks the first one that looks like an ISBN.
//!
//! ## Features
//!
//! - Read EPUBs from disk or from any byte stream
//! - Entry lookup that tolerates archives written with `\` separators
//! - ISBN detection by `scheme`, `urn:isbn:` prefix or `id` attribute
//! - ISBN-10 and ISBN-13 checksum validation
//! - Catalog lookups of validated ISBNs over HTTP
//!
//! ## Example
//!
//! ```no_run
//! use bookid::{isbn, parse_epub};
//!
//! fn main() -> bookid::Result<()> {
//!     let book = parse_epub("book.epub")?;
//!
//!     if let Some(compact) = book.clean_isbn() {
//!         println!("{compact} valid: {}", isbn::validate(&compact));
//!     }
//!
//!     Ok(())
//! }
//! ```

pub mod catalog;
pub mod cli;
pub mod epub;
pub mod error;
pub mod io;
pub mod isbn;
pub mod zip;

pub use cli::Cli;
pub use epub::{
    BookRecord, IdentifierRecord, MetadataSet, parse_archive, parse_epub, parse_epub_from_reader,
};
pub use error::{BookError, LookupError, Result};
pub use io::{LocalFileReader, MemoryReader, ReadAt};
pub use zip::{Archive, ZipEntry};
