//! EPUB container parsing.
//!
//! An EPUB is a zip archive whose bootstrap entry `META-INF/container.xml`
//! names the package document (usually `content.opf`). The package's
//! `<metadata>` block carries the `<dc:identifier>` entries this crate
//! turns into [`IdentifierRecord`]s.
//!
//! Only the first `<rootfile>` of the container manifest is read; books
//! advertising several renditions are parsed through their first one.

mod book;
mod container;
mod metadata;

pub use book::{BookRecord, parse_archive, parse_epub, parse_epub_from_reader};
pub use container::{CONTAINER_PATH, parse_container, resolve_content_document_path};
pub use metadata::{IdentifierRecord, MetadataSet, extract_metadata};

use quick_xml::events::BytesStart;

/// Look up an attribute by local name, ignoring any namespace prefix.
fn attribute(element: &BytesStart<'_>, name: &[u8]) -> Result<Option<String>, String> {
    for attr in element.attributes() {
        let attr = attr.map_err(|e| e.to_string())?;
        if attr.key.local_name().as_ref() == name {
            let value = attr.unescape_value().map_err(|e| e.to_string())?;
            return Ok(Some(value.into_owned()));
        }
    }
    Ok(None)
}
